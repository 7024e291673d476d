use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, InputEvent};
use yew::prelude::*;

use super::icons::icon_plus;
use super::layout::panel;
use crate::api::HttpClient;
use crate::controller;
use crate::format::{format_currency, format_date};
use crate::models::{Expense, ExpenseDraft, EXPENSE_CATEGORIES};
use crate::state::Action;

#[derive(Properties, PartialEq)]
pub struct ExpensesPanelProps {
    pub expenses: Vec<Expense>,
    pub client: HttpClient,
    pub on_action: Callback<Action>,
}

#[function_component(ExpensesPanel)]
pub fn expenses_panel(props: &ExpensesPanelProps) -> Html {
    let client = props.client.clone();
    let draft = use_state(ExpenseDraft::default);
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
                if controller::add_expense(&client, &dispatch, &current).await.is_ok() {
                    draft.set(ExpenseDraft::default());
                }
                loading.set(false);
            });
        })
    };

    let on_amount = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                draft.set(ExpenseDraft { amount: input.value(), ..(*draft).clone() });
            }
        })
    };
    let on_description = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                draft.set(ExpenseDraft { description: input.value(), ..(*draft).clone() });
            }
        })
    };
    let on_category = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                draft.set(ExpenseDraft { category: select.value(), ..(*draft).clone() });
            }
        })
    };

    let form = html! {
        <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
            <input type="number" placeholder="Amount" value={draft.amount.clone()} oninput={on_amount}
                class="border border-gray-200 rounded-md px-3 py-2 text-gray-900 placeholder-gray-400" />
            <input type="text" placeholder="Description" value={draft.description.clone()} oninput={on_description}
                class="border border-gray-200 rounded-md px-3 py-2 text-gray-900 placeholder-gray-400" />
            <select onchange={on_category} class="border border-gray-200 rounded-md px-3 py-2 text-gray-900">
                <option value="" selected={draft.category.is_empty()}>{"Auto-categorize"}</option>
                { for EXPENSE_CATEGORIES.iter().map(|&category| html! {
                    <option value={category} selected={draft.category == category}>{ category }</option>
                }) }
            </select>
            <button onclick={on_submit} disabled={*loading}
                class="bg-blue-500 text-white px-4 py-2 rounded-md hover:bg-blue-600 disabled:opacity-50">
                { icon_plus() }
                { if *loading { "Saving..." } else { "Add Expense" } }
            </button>
        </div>
    };

    html! {
        <div class="space-y-6">
            { panel("Add New Expense", form) }
            <div class="bg-white rounded-lg shadow overflow-hidden">
                <div class="px-6 py-4 border-b border-gray-200">
                    <h3 class="text-lg font-medium text-gray-900">{"All Expenses"}</h3>
                </div>
                <div class="overflow-x-auto">
                    <table class="w-full">
                        <thead class="bg-gray-50">
                            <tr>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Description"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Category"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Amount"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Date"}</th>
                            </tr>
                        </thead>
                        <tbody class="bg-white divide-y divide-gray-200">
                            { if props.expenses.is_empty() {
                                html! { <tr><td colspan="4" class="px-6 py-6 text-center text-gray-500">{"No expenses yet."}</td></tr> }
                            } else {
                                html! {
                                    <>
                                        { for props.expenses.iter().map(|expense| html! {
                                            <tr key={expense.id.to_string()}>
                                                <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{ expense.description.clone() }</td>
                                                <td class="px-6 py-4 whitespace-nowrap">
                                                    <span class="px-2 py-1 text-xs font-semibold rounded-full bg-blue-100 text-blue-800">{ expense.category.clone() }</span>
                                                </td>
                                                <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900">{ format_currency(expense.amount) }</td>
                                                <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{ format_date(expense.date) }</td>
                                            </tr>
                                        }) }
                                    </>
                                }
                            }}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
