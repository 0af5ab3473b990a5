//! Desktop sidebar: logo, navigation and the signed-in user.

use common::file_document::UserProfile;
use dioxus::prelude::*;

use crate::components::layout::nav_items::{NavItem, NavItemLink};
use crate::routes::Route;

const LOGO: Asset = asset!("/assets/favicon.svg");

#[component]
pub fn Sidebar(user: ReadSignal<UserProfile>) -> Element {
    let current_route = use_route::<Route>();
    rsx! {
        aside {
            id: "x-sidebar",
            class: "storeit-desktop-only",
            style: "
                display: flex;
                flex-direction: column;
                gap: 32px;
                width: 280px;
                height: 100%;
                padding: 28px 20px;
                box-sizing: border-box;
                background: white;
                flex-shrink: 0;
            ",

            Link {
                to: Route::DashboardPage {},
                style: "display: flex; align-items: center; gap: 10px; text-decoration: none;",
                img { src: LOGO, style: "width: 48px; height: 48px;" }
                span {
                    style: "font-size: 26px; font-weight: 700; color: #FA7275;",
                    "StoreIt"
                }
            }

            nav {
                style: "display: flex; flex-direction: column; gap: 6px;",
                for item in NavItem::ALL {
                    NavItemLink { key: "{item.label()}", item, active: item.is_active(&current_route) }
                }
            }

            // push the user card to the bottom
            div { style: "flex-grow: 1;" }

            UserCard { user }
        }
    }
}

#[component]
pub fn UserCard(user: ReadSignal<UserProfile>) -> Element {
    let user = user.read().clone();
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 12px;
                padding: 10px;
                border-radius: 9999px;
                background: rgba(250, 114, 117, 0.1);
            ",
            img {
                src: "{user.avatar}",
                alt: "Avatar",
                style: "width: 44px; height: 44px; border-radius: 50%; object-fit: cover;",
            }
            div {
                style: "display: flex; flex-direction: column; min-width: 0;",
                span {
                    style: "font-size: 14px; font-weight: 600; color: #333F4E; text-transform: capitalize;",
                    "{user.full_name}"
                }
                span {
                    style: "font-size: 12px; color: #A3B2C7; overflow: hidden; text-overflow: ellipsis;",
                    "{user.email}"
                }
            }
        }
    }
}
