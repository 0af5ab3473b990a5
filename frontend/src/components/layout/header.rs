//! Top bar with the search box and the sign out button.

use common::file_document::UserProfile;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdExitToApp;

use crate::components::search::Search;
use crate::routes::Route;

#[component]
pub fn Header(user: ReadSignal<UserProfile>) -> Element {
    let current_route = use_route::<Route>();
    rsx! {
        header {
            id: "x-header",
            class: "storeit-desktop-only",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: space-between;
                gap: 20px;
                padding: 20px 36px;
                background: white;
            ",
            Search { current_route }
            div {
                style: "display: flex; align-items: center; gap: 16px;",
                span {
                    style: "font-size: 14px; color: #A3B2C7;",
                    title: "{user.read().account_id}",
                    "{user.read().full_name}"
                }
                SignOutButton { show_label: false }
            }
        }
    }
}

/// Posts to the sign out handler, which drops the session cookie.
#[component]
pub fn SignOutButton(show_label: bool) -> Element {
    rsx! {
        form {
            method: "post",
            action: "/_auth/sign-out",
            style: "margin: 0;",
            button {
                r#type: "submit",
                class: "storeit-hover-shadow-background",
                title: "Sign out",
                style: "
                    display: flex;
                    align-items: center;
                    gap: 10px;
                    height: 48px;
                    padding: 0 14px;
                    border: none;
                    border-radius: 9999px;
                    background: rgba(250, 114, 117, 0.1);
                    color: #FA7275;
                    font-weight: 600;
                    cursor: pointer;
                ",
                Icon { icon: MdExitToApp, style: "width: 24px; height: 24px;" }
                if show_label {
                    span { "Sign out" }
                }
            }
        }
    }
}
