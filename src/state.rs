use std::rc::Rc;

use yew::functional::Reducible;

use crate::models::{Budget, ChatExchange, DashboardSummary, Expense};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Dashboard,
    Expenses,
    Chat,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Dashboard, Tab::Expenses, Tab::Chat];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Expenses => "Expenses",
            Tab::Chat => "AI Chat",
        }
    }
}

/// Client-side snapshot of the dashboard.
///
/// Expenses, budgets and the summary mirror the backend and are only ever
/// replaced wholesale by a fresh read; the chat log exists only for the
/// current session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub active_tab: Tab,
    pub expenses: Vec<Expense>,
    pub budgets: Vec<Budget>,
    pub summary: Option<DashboardSummary>,
    pub chat_log: Vec<ChatExchange>,
}

impl DashboardState {
    pub fn active_budget_count(&self) -> usize {
        self.budgets.len()
    }

    pub fn recent_expenses(&self, limit: usize) -> &[Expense] {
        match &self.summary {
            Some(summary) => &summary.recent_expenses[..summary.recent_expenses.len().min(limit)],
            None => &[],
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    SelectTab(Tab),
    ExpensesLoaded(Vec<Expense>),
    BudgetsLoaded(Vec<Budget>),
    SummaryLoaded(DashboardSummary),
    ChatAppended(ChatExchange),
}

impl Reducible for DashboardState {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Action) -> Rc<Self> {
        if let Action::SelectTab(tab) = &action {
            if *tab == self.active_tab {
                return self;
            }
        }

        let mut this = self;
        let state = Rc::make_mut(&mut this);
        match action {
            Action::SelectTab(tab) => state.active_tab = tab,
            Action::ExpensesLoaded(expenses) => state.expenses = expenses,
            Action::BudgetsLoaded(budgets) => state.budgets = budgets,
            Action::SummaryLoaded(summary) => state.summary = Some(summary),
            Action::ChatAppended(exchange) => state.chat_log.push(exchange),
        }
        this
    }
}
