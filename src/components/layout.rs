use yew::prelude::*;

use crate::state::Tab;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub active_tab: Tab,
    pub on_select: Callback<Tab>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="bg-white shadow-sm border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center py-6">
                    <h1 class="text-3xl font-bold text-gray-900">{"Personal Finance Mentor"}</h1>
                    <TabBar active_tab={props.active_tab} on_select={props.on_select.clone()} />
                </div>
            </div>
        </header>
    }
}

#[function_component(TabBar)]
fn tab_bar(props: &HeaderProps) -> Html {
    html! {
        <nav class="flex space-x-4">
            { for Tab::ALL.iter().map(|&tab| {
                let class_name = if tab == props.active_tab {
                    "px-4 py-2 rounded-md bg-blue-500 text-white"
                } else {
                    "px-4 py-2 rounded-md text-gray-600 hover:text-blue-500"
                };
                let on_select = props.on_select.clone();

                html! {
                    <button type="button" class={class_name} onclick={Callback::from(move |_| on_select.emit(tab))}>
                        { tab.label() }
                    </button>
                }
            }) }
        </nav>
    }
}

pub fn panel(title: &'static str, children: Html) -> Html {
    html! {
        <div class="bg-white p-6 rounded-lg shadow">
            <h3 class="text-lg font-medium text-gray-900 mb-4">{ title }</h3>
            { children }
        </div>
    }
}
