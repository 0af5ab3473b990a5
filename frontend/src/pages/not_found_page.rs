use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFoundPage(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        Title { "StoreIt - Not found" }
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                gap: 16px;
                width: 100%;
                height: 100vh;
            ",
            h1 { style: "margin: 0; font-size: 48px; color: #FA7275;", "Page not found" }
            p { style: "margin: 0; color: #A3B2C7;", "There is nothing at /{path}" }
            Link {
                to: Route::DashboardPage {},
                style: "color: #56B8FF; font-size: 18px;",
                "Back to Dashboard"
            }
        }
    }
}
