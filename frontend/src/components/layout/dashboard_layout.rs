//! Signed-in shell: sidebar, mobile navigation, header and the routed page.

use dioxus::prelude::*;
use dioxus_primitives::toast::ToastProvider;

use crate::api::user_api::get_current_user;
use crate::components::error_boundary::GlobalErrorBoundary;
use crate::components::layout::header::Header;
use crate::components::layout::mobile_navigation::MobileNavigation;
use crate::components::layout::sidebar::Sidebar;
use crate::data_definitions::layout_gate::LayoutGate;
use crate::routes::Route;

#[component]
pub fn DashboardLayout() -> Element {
    let current_user = use_server_future(move || get_current_user())?;
    let gate = use_memo(move || match &*current_user.read() {
        Some(Ok(user)) => Some(LayoutGate::from_user(user.clone())),
        Some(Err(e)) => {
            dioxus::logger::tracing::error!("Error loading current user: {e:#?}");
            Some(LayoutGate::from_user(None))
        }
        None => None,
    });
    use_effect(move || {
        if let Some(LayoutGate::Redirect(route)) = gate() {
            navigator().replace(route);
        }
    });

    let Some(LayoutGate::Render(user)) = gate() else {
        return rsx! {};
    };
    rsx! {
        ToastProvider {
            div {
                id: "x-dashboard-container",
                style: "
                    display: flex;
                    flex-direction: row;
                    width: 100%;
                    height: 100vh;
                    background: #F2F4F8;
                ",
                Sidebar { user: user.clone() }
                div {
                    id: "x-dashboard-main",
                    style: "
                        display: flex;
                        flex-direction: column;
                        flex-grow: 1;
                        min-width: 0;
                        height: 100%;
                    ",
                    MobileNavigation { user: user.clone() }
                    Header { user: user.clone() }
                    div {
                        id: "x-page-container",
                        style: "
                            flex-grow: 1;
                            overflow-y: auto;
                            padding: 24px 36px;
                            background: #F2F4F8;
                            border-top-left-radius: 30px;
                        ",
                        GlobalErrorBoundary {
                            boundary_name: "Dashboard".to_string(),
                            Outlet::<Route> {}
                        }
                    }
                }
            }
        }
    }
}
