//! Compact top bar with a slide-in navigation sheet for small screens.

use common::file_document::UserProfile;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::{MdClose, MdMenu};

use crate::components::layout::header::SignOutButton;
use crate::components::layout::nav_items::{NavItem, NavItemLink};
use crate::components::layout::sidebar::UserCard;
use crate::routes::Route;

const LOGO: Asset = asset!("/assets/favicon.svg");

#[component]
pub fn MobileNavigation(user: ReadSignal<UserProfile>) -> Element {
    let current_route = use_route::<Route>();
    let mut is_open = use_signal(|| false);
    rsx! {
        div {
            id: "x-mobile-navigation",
            class: "storeit-mobile-only",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: space-between;
                height: 60px;
                padding: 0 16px;
                background: white;
            ",
            Link {
                to: Route::DashboardPage {},
                img { src: LOGO, style: "width: 36px; height: 36px;" }
            }
            button {
                style: "border: none; background: none; cursor: pointer; color: #333F4E;",
                onclick: move |_| is_open.set(true),
                Icon { icon: MdMenu, style: "width: 30px; height: 30px;" }
            }
        }

        if is_open() {
            // backdrop
            div {
                style: "
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.2);
                    z-index: 1000;
                ",
                onclick: move |_| is_open.set(false),
            }
            div {
                style: "
                    position: fixed;
                    top: 0;
                    right: 0;
                    width: min(320px, 90vw);
                    height: 100vh;
                    display: flex;
                    flex-direction: column;
                    gap: 20px;
                    padding: 20px;
                    box-sizing: border-box;
                    background: white;
                    z-index: 1001;
                ",
                div {
                    style: "display: flex; justify-content: flex-end;",
                    button {
                        style: "border: none; background: none; cursor: pointer; color: #333F4E;",
                        onclick: move |_| is_open.set(false),
                        Icon { icon: MdClose, style: "width: 28px; height: 28px;" }
                    }
                }
                UserCard { user }
                nav {
                    style: "display: flex; flex-direction: column; gap: 6px;",
                    for item in NavItem::ALL {
                        NavItemLink {
                            key: "{item.label()}",
                            item,
                            active: item.is_active(&current_route),
                            onclick: move |_: ()| is_open.set(false),
                        }
                    }
                }
                div { style: "flex-grow: 1;" }
                SignOutButton { show_label: true }
            }
        }
    }
}
