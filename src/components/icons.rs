use yew::prelude::*;

fn icon_base(path: &'static str, class: &'static str) -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class={class}>
            <path d={path}></path>
        </svg>
    }
}

pub fn icon_dollar() -> Html {
    icon_base("M12 1v22M17 5H9.5a3.5 3.5 0 000 7h5a3.5 3.5 0 010 7H6", "h-8 w-8 text-green-500")
}
pub fn icon_trending_up() -> Html {
    icon_base("M3 17l6-6 4 4 7-7", "h-8 w-8 text-blue-500")
}
pub fn icon_calendar() -> Html {
    icon_base("M3 5h18v16H3zM16 3v4M8 3v4M3 10h18", "h-8 w-8 text-purple-500")
}
pub fn icon_plus() -> Html {
    icon_base("M12 5v14M5 12h14", "h-4 w-4 inline mr-2")
}
pub fn icon_send() -> Html {
    icon_base("M22 2L11 13M22 2l-7 20-4-9-9-4 20-7z", "h-4 w-4")
}
pub fn icon_message() -> Html {
    icon_base("M21 11.5a8.4 8.4 0 01-9 8.4 8.5 8.5 0 01-3.8-.9L3 21l1.9-5.7A8.4 8.4 0 1121 11.5z", "h-12 w-12 mx-auto mb-4 text-gray-300")
}
