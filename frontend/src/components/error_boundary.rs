//! Error panels for the dashboard: a full-page one for crashes, and an inline one per section.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_alert_icons::MdErrorOutline;

use crate::data_definitions::error_recovery::ErrorRecovery;
use crate::routes::Route;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                dioxus::logger::tracing::error!("{} crashed: {:#?}", boundary_name.read(), err);
                let error_txt = format!("{err:#?}");
                let dashboard_href = Route::DashboardPage {}.to_string();
                // the router may be the thing that failed, so links here are plain hrefs
                rsx! {
                    div {
                        id: "x-global-error",
                        style: "
                            min-height: 100vh;
                            display: flex;
                            flex-direction: column;
                            align-items: center;
                            justify-content: center;
                            gap: 16px;
                            padding: 24px;
                            background: #F2F4F8;
                        ",
                        Icon { icon: MdErrorOutline, style: "width: 64px; height: 64px; color: #FA7275;" }
                        h1 { style: "margin: 0; font-size: 32px; color: #333F4E;", "StoreIt ran into a problem" }
                        a {
                            href: dashboard_href,
                            style: "{LINK_STYLE}",
                            "Back to Dashboard"
                        }
                        ErrorDetails { error_txt }
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(e) => format!("{:#?}", e.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            style: "{LINK_STYLE} background: white; cursor: pointer;",
                            onclick: move |_| err.clear_errors(),
                            "Try Again"
                        }
                    }
                }
            },
            div {
                width: "100%",
                height: "100%",
                {children}
            }
        }
    }
}

/// Inline panel for a section that failed to load. `children` are extra actions.
#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    let recovery = use_memo(move || ErrorRecovery::from_error_text(&error_txt.read()));
    rsx! {
        div {
            class: "x-section-error",
            style: "
                width: 100%;
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                gap: 12px;
                padding: 32px 16px;
                border-radius: 20px;
                background: white;
            ",
            Icon { icon: MdErrorOutline, style: "width: 40px; height: 40px; color: #FA7275;" }
            h2 { style: "margin: 0; font-size: 20px; color: #333F4E;", "{recovery().headline()}" }
            div {
                style: "display: flex; flex-direction: row; gap: 12px;",
                if let Some((route, label)) = recovery().link() {
                    a { href: route.to_string(), style: "{LINK_STYLE}", "{label}" }
                }
                {children}
            }
            ErrorDetails { error_txt }
        }
    }
}

#[component]
fn ErrorDetails(error_txt: ReadSignal<String>) -> Element {
    rsx! {
        details {
            style: "max-width: 560px; color: #A3B2C7; font-size: 12px;",
            summary { style: "cursor: pointer;", "Details" }
            pre {
                style: "max-height: 240px; overflow-y: auto; text-wrap: auto; color: #B42318;",
                "{error_txt}"
            }
        }
    }
}

const LINK_STYLE: &str = "
    padding: 8px 18px;
    border: 1px solid #FA7275;
    border-radius: 9999px;
    color: #FA7275;
    font-size: 14px;
    font-weight: 600;
    text-decoration: none;
";
