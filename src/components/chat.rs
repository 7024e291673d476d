use chrono::Local;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, InputEvent, KeyboardEvent};
use yew::prelude::*;

use super::icons::{icon_message, icon_send};
use crate::api::HttpClient;
use crate::controller;
use crate::format::format_time;
use crate::models::ChatExchange;
use crate::state::Action;

#[derive(Properties, PartialEq)]
pub struct ChatPanelProps {
    pub log: Vec<ChatExchange>,
    pub client: HttpClient,
    pub on_action: Callback<Action>,
}

#[function_component(ChatPanel)]
pub fn chat_panel(props: &ChatPanelProps) -> Html {
    let client = props.client.clone();
    let input = use_state(String::new);
    let loading = use_state(|| false);

    let send = {
        let input = input.clone();
        let loading = loading.clone();
        let on_action = props.on_action.clone();

        Callback::from(move |_: ()| {
            if *loading || input.trim().is_empty() {
                return;
            }
            let text = (*input).clone();
            let client = client.clone();
            let on_action = on_action.clone();
            let input = input.clone();
            let loading = loading.clone();

            loading.set(true);
            spawn_local(async move {
                let dispatch = |action| on_action.emit(action);
                if controller::send_chat(&client, &dispatch, &text).await.is_ok() {
                    input.set(String::new());
                }
                loading.set(false);
            });
        })
    };

    let on_input = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(el) = e.target_dyn_into::<HtmlInputElement>() {
                input.set(el.value());
            }
        })
    };
    let on_keypress = {
        let send = send.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                send.emit(());
            }
        })
    };
    let on_click = send.reform(|_: MouseEvent| ());

    html! {
        <div class="bg-white rounded-lg shadow flex flex-col h-[600px]">
            <div class="px-6 py-4 border-b border-gray-200">
                <h3 class="text-lg font-medium text-gray-900">{"AI Finance Mentor"}</h3>
            </div>

            <div class="flex-1 overflow-y-auto p-6 space-y-4">
                { if props.log.is_empty() {
                    html! {
                        <div class="text-center text-gray-500 mt-8">
                            { icon_message() }
                            <p>{"Start a conversation about your finances!"}</p>
                            <p class="text-sm mt-2">{"Try asking: \"How am I doing with my spending this month?\""}</p>
                        </div>
                    }
                } else {
                    html! {
                        <>
                            { for props.log.iter().enumerate().map(|(idx, chat)| html! {
                                <div key={idx} class="space-y-2">
                                    <div class="bg-blue-500 text-white p-3 rounded-lg max-w-lg ml-auto">
                                        <p class="text-sm">{ chat.message.clone() }</p>
                                    </div>
                                    <div class="bg-gray-100 p-3 rounded-lg max-w-lg">
                                        <p class="text-sm text-gray-900 whitespace-pre-wrap">{ chat.response.clone() }</p>
                                        <p class="text-[10px] text-gray-400 mt-1">{ format_time(&chat.timestamp.with_timezone(&Local)) }</p>
                                    </div>
                                </div>
                            }) }
                        </>
                    }
                }}
            </div>

            <div class="border-t border-gray-200 p-4">
                <div class="flex space-x-2">
                    <input type="text" placeholder="Ask about your finances..." value={(*input).clone()}
                        oninput={on_input} onkeypress={on_keypress}
                        class="flex-1 border border-gray-200 rounded-md px-3 py-2 text-gray-900 placeholder-gray-400" />
                    <button onclick={on_click} disabled={*loading || input.trim().is_empty()}
                        class="bg-blue-500 text-white px-4 py-2 rounded-md hover:bg-blue-600 disabled:opacity-50">
                        { icon_send() }
                    </button>
                </div>
            </div>
        </div>
    }
}
