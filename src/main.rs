use yew::prelude::*;

mod api;
mod chart;
mod components;
mod config;
mod controller;
mod error;
mod format;
mod models;
mod state;

use api::HttpClient;
use components::{BudgetsPanel, Charts, ChatPanel, ExpensesPanel, Header, RecentExpenses, StatsCards};
use config::ApiConfig;
use state::{Action, DashboardState, Tab};

const RECENT_EXPENSE_LIMIT: usize = 5;

#[function_component(App)]
fn app() -> Html {
    let client = use_state(|| HttpClient::new(ApiConfig::load()));
    let state = use_reducer(DashboardState::default);

    let on_action = {
        let dispatcher = state.dispatcher();
        Callback::from(move |action: Action| dispatcher.dispatch(action))
    };
    let on_select = on_action.reform(Action::SelectTab);

    {
        let client = (*client).clone();
        let on_action = on_action.clone();
        use_effect_with_deps(
            move |_| {
                controller::initialize(client, move |action| on_action.emit(action));
                || ()
            },
            (),
        );
    }

    let content = match state.active_tab {
        Tab::Dashboard => html! {
            <>
                <StatsCards summary={state.summary.clone()} budget_count={state.active_budget_count()} />
                <div class="mt-8">
                    <Charts summary={state.summary.clone()} />
                </div>
                <div class="mt-8">
                    <RecentExpenses expenses={state.recent_expenses(RECENT_EXPENSE_LIMIT).to_vec()} />
                </div>
            </>
        },
        Tab::Expenses => html! {
            <div class="space-y-8">
                <ExpensesPanel client={(*client).clone()} expenses={state.expenses.clone()} on_action={on_action.clone()} />
                <BudgetsPanel client={(*client).clone()} budgets={state.budgets.clone()} on_action={on_action.clone()} />
            </div>
        },
        Tab::Chat => html! {
            <ChatPanel client={(*client).clone()} log={state.chat_log.clone()} on_action={on_action.clone()} />
        },
    };

    html! {
        <div class="min-h-screen bg-gray-50">
            <Header active_tab={state.active_tab} on_select={on_select} />
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                { content }
            </main>
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("Personal Finance Mentor starting against {}", ApiConfig::load().base_url());

    yew::Renderer::<App>::new().render();
}
