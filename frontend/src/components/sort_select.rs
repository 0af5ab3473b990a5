use common::file_query::SortOrder;
use dioxus::prelude::*;

/// Sort order picker; the chosen order is written back into the url.
#[component]
pub fn SortSelect(sort: ReadSignal<SortOrder>, on_change: EventHandler<SortOrder>) -> Element {
    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 10px;",
            span { style: "font-size: 14px; color: #A3B2C7;", "Sort by:" }
            select {
                style: "
                    height: 40px;
                    padding: 0 12px;
                    border: none;
                    border-radius: 10px;
                    background: white;
                    color: #333F4E;
                    font-size: 14px;
                    cursor: pointer;
                ",
                value: "{sort}",
                onchange: move |event: Event<FormData>| {
                    match event.value().parse::<SortOrder>() {
                        Ok(order) => on_change.call(order),
                        Err(e) => dioxus::logger::tracing::warn!("Ignoring sort choice: {e}"),
                    }
                },
                for (order, label) in SortOrder::OPTIONS {
                    option {
                        key: "{order}",
                        value: "{order}",
                        selected: order == sort(),
                        "{label}"
                    }
                }
            }
        }
    }
}
