//! Dashboard workflows: initial load, writes, and the re-reads that follow them.
//!
//! Every workflow reports its outcome as a `Result`, and fetch failures are
//! logged here. A failed read leaves its slice of [`DashboardState`] as it
//! was. Writes never patch local state directly; their only visible effect
//! is re-reading the collections they touch.
//!
//! [`DashboardState`]: crate::state::DashboardState

use chrono::Utc;
use wasm_bindgen_futures::spawn_local;

use crate::api::FinanceApi;
use crate::error::{ActionError, ApiError, ValidationError};
use crate::models::{BudgetDraft, ChatExchange, ExpenseDraft};
use crate::state::Action;

pub async fn load_expenses<A, D>(api: &A, dispatch: &D) -> Result<(), ApiError>
where
    A: FinanceApi,
    D: Fn(Action),
{
    let expenses = api
        .fetch_expenses()
        .await
        .inspect_err(|err| log::warn!("Error loading expenses: {err}"))?;
    log::debug!("loaded {} expenses", expenses.len());
    dispatch(Action::ExpensesLoaded(expenses));
    Ok(())
}

pub async fn load_budgets<A, D>(api: &A, dispatch: &D) -> Result<(), ApiError>
where
    A: FinanceApi,
    D: Fn(Action),
{
    let budgets = api
        .fetch_budgets()
        .await
        .inspect_err(|err| log::warn!("Error loading budgets: {err}"))?;
    log::debug!("loaded {} budgets", budgets.len());
    dispatch(Action::BudgetsLoaded(budgets));
    Ok(())
}

pub async fn load_summary<A, D>(api: &A, dispatch: &D) -> Result<(), ApiError>
where
    A: FinanceApi,
    D: Fn(Action),
{
    let summary = api
        .fetch_dashboard_summary()
        .await
        .inspect_err(|err| log::warn!("Error loading dashboard: {err}"))?;
    dispatch(Action::SummaryLoaded(summary));
    Ok(())
}

/// Runs the three reads side by side. Each one lands in state as soon as it
/// resolves, whatever happens to the others.
pub async fn load_all<A, D>(api: &A, dispatch: &D)
where
    A: FinanceApi,
    D: Fn(Action),
{
    let _ = futures::join!(
        load_expenses(api, dispatch),
        load_summary(api, dispatch),
        load_budgets(api, dispatch),
    );
}

pub fn initialize<A, D>(api: A, dispatch: D)
where
    A: FinanceApi + 'static,
    D: Fn(Action) + 'static,
{
    log::info!("Loading dashboard data...");
    spawn_local(async move { load_all(&api, &dispatch).await });
}

/// Budgets are not re-read; an expense cannot change them.
pub async fn add_expense<A, D>(api: &A, dispatch: &D, draft: &ExpenseDraft) -> Result<(), ActionError>
where
    A: FinanceApi,
    D: Fn(Action),
{
    let expense = draft.validate()?;
    api.create_expense(&expense)
        .await
        .inspect_err(|err| log::warn!("Error adding expense: {err}"))?;
    log::info!("expense saved: {} ({})", expense.description, expense.amount);

    let _ = futures::join!(load_expenses(api, dispatch), load_summary(api, dispatch));
    Ok(())
}

pub async fn add_budget<A, D>(api: &A, dispatch: &D, draft: &BudgetDraft) -> Result<(), ActionError>
where
    A: FinanceApi,
    D: Fn(Action),
{
    let budget = draft.validate()?;
    api.create_budget(&budget)
        .await
        .inspect_err(|err| log::warn!("Error adding budget: {err}"))?;
    log::info!("budget saved: {} for {}", budget.category, budget.month);

    let _ = load_budgets(api, dispatch).await;
    Ok(())
}

/// Asks the mentor endpoint and appends the exchange to the session log.
/// The message goes out exactly as typed.
pub async fn send_chat<A, D>(api: &A, dispatch: &D, text: &str) -> Result<(), ActionError>
where
    A: FinanceApi,
    D: Fn(Action),
{
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyMessage.into());
    }
    let reply = api
        .send_chat_message(text)
        .await
        .inspect_err(|err| log::warn!("Error sending chat: {err}"))?;

    dispatch(Action::ChatAppended(ChatExchange {
        message: text.to_string(),
        response: reply.response,
        timestamp: Utc::now(),
    }));
    Ok(())
}
