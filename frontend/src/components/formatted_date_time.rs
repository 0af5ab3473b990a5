use common::file_format::format_date_time;
use dioxus::prelude::*;

#[component]
pub fn FormattedDateTime(date: ReadSignal<String>, #[props(default)] style: String) -> Element {
    let text = use_memo(move || {
        let date = date.read();
        format_date_time((!date.is_empty()).then_some(date.as_str()))
    });
    rsx! {
        p {
            style: "margin: 0; font-size: 12px; color: #A3B2C7; {style}",
            "{text}"
        }
    }
}
