use chrono::Local;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, InputEvent};
use yew::prelude::*;

use super::icons::icon_plus;
use super::layout::panel;
use crate::api::HttpClient;
use crate::controller;
use crate::format::format_currency;
use crate::models::{Budget, BudgetDraft};
use crate::state::Action;

fn fresh_draft() -> BudgetDraft {
    BudgetDraft::for_month(Local::now().date_naive())
}

#[derive(Properties, PartialEq)]
pub struct BudgetsPanelProps {
    pub budgets: Vec<Budget>,
    pub client: HttpClient,
    pub on_action: Callback<Action>,
}

#[function_component(BudgetsPanel)]
pub fn budgets_panel(props: &BudgetsPanelProps) -> Html {
    let client = props.client.clone();
    let draft = use_state(fresh_draft);
    let loading = use_state(|| false);

    let on_submit = {
        let draft = draft.clone();
        let loading = loading.clone();
        let on_action = props.on_action.clone();

        Callback::from(move |_| {
            if *loading {
                return;
            }
            let current = (*draft).clone();
            let client = client.clone();
            let on_action = on_action.clone();
            let draft = draft.clone();
            let loading = loading.clone();

            loading.set(true);
            spawn_local(async move {
                let dispatch = |action| on_action.emit(action);
                if controller::add_budget(&client, &dispatch, &current).await.is_ok() {
                    draft.set(fresh_draft());
                }
                loading.set(false);
            });
        })
    };

    let on_category = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                draft.set(BudgetDraft { category: input.value(), ..(*draft).clone() });
            }
        })
    };
    let on_amount = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                draft.set(BudgetDraft { amount: input.value(), ..(*draft).clone() });
            }
        })
    };
    let on_month = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                draft.set(BudgetDraft { month: input.value(), ..(*draft).clone() });
            }
        })
    };

    let form = html! {
        <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
            <input type="text" placeholder="Category" value={draft.category.clone()} oninput={on_category}
                class="border border-gray-200 rounded-md px-3 py-2 text-gray-900 placeholder-gray-400" />
            <input type="number" placeholder="Monthly limit" value={draft.amount.clone()} oninput={on_amount}
                class="border border-gray-200 rounded-md px-3 py-2 text-gray-900 placeholder-gray-400" />
            <input type="month" value={draft.month.clone()} oninput={on_month}
                class="border border-gray-200 rounded-md px-3 py-2 text-gray-900" />
            <button onclick={on_submit} disabled={*loading}
                class="bg-blue-500 text-white px-4 py-2 rounded-md hover:bg-blue-600 disabled:opacity-50">
                { icon_plus() }
                { if *loading { "Saving..." } else { "Add Budget" } }
            </button>
        </div>
    };

    let list = if props.budgets.is_empty() {
        html! { <p class="text-sm text-gray-500">{"No budgets set yet."}</p> }
    } else {
        html! {
            <ul class="divide-y divide-gray-200">
                { for props.budgets.iter().map(|budget| html! {
                    <li key={budget.id.to_string()} class="flex items-center justify-between py-3 text-sm">
                        <span class="text-gray-900 font-medium">{ budget.category.clone() }</span>
                        <span class="text-gray-500">{ budget.month.clone() }</span>
                        <span class="font-semibold text-gray-900">{ format_currency(budget.amount) }</span>
                    </li>
                }) }
            </ul>
        }
    };

    html! {
        <div class="space-y-6">
            { panel("Set a Budget", form) }
            { panel("Budgets", list) }
        </div>
    }
}
