//! Navigation entries shared by the sidebar and the mobile sheet.

use common::file_document::FileCategory;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::{MdDashboard, MdDescription};
use dioxus_free_icons::icons::md_av_icons::MdVideoLibrary;
use dioxus_free_icons::icons::md_file_icons::MdFolder;
use dioxus_free_icons::icons::md_image_icons::MdImage;

use crate::routes::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Dashboard,
    Category(FileCategory),
}

impl NavItem {
    pub const ALL: [NavItem; 5] = [
        NavItem::Dashboard,
        NavItem::Category(FileCategory::Documents),
        NavItem::Category(FileCategory::Images),
        NavItem::Category(FileCategory::Media),
        NavItem::Category(FileCategory::Others),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NavItem::Dashboard => "Dashboard",
            NavItem::Category(category) => category.title(),
        }
    }

    pub fn route(&self) -> Route {
        match self {
            NavItem::Dashboard => Route::DashboardPage {},
            NavItem::Category(category) => Route::category_page(*category, ""),
        }
    }

    /// Category pages stay highlighted whatever their query or sort.
    pub fn is_active(&self, current: &Route) -> bool {
        match self {
            NavItem::Dashboard => matches!(current, Route::DashboardPage {}),
            NavItem::Category(category) => current.current_category() == Some(*category),
        }
    }
}

#[component]
pub fn NavItemIcon(item: NavItem, size: u32) -> Element {
    let style = format!("width: {size}px; height: {size}px;");
    match item {
        NavItem::Dashboard => rsx! { Icon { icon: MdDashboard, style } },
        NavItem::Category(FileCategory::Documents) => rsx! { Icon { icon: MdDescription, style } },
        NavItem::Category(FileCategory::Images) => rsx! { Icon { icon: MdImage, style } },
        NavItem::Category(FileCategory::Media) => rsx! { Icon { icon: MdVideoLibrary, style } },
        NavItem::Category(FileCategory::Others) => rsx! { Icon { icon: MdFolder, style } },
    }
}

/// One navigation link, filled with the brand color when active.
#[component]
pub fn NavItemLink(item: NavItem, active: bool, onclick: Option<EventHandler<()>>) -> Element {
    let (background, color) = if active { ("#FA7275", "white") } else { ("transparent", "#333F4E") };
    rsx! {
        Link {
            to: item.route(),
            onclick: move |_| {
                if let Some(onclick) = onclick {
                    onclick.call(());
                }
            },
            class: "storeit-hover-shadow-background",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 16px;
                padding: 12px 24px;
                border-radius: 9999px;
                text-decoration: none;
                font-size: 16px;
                font-weight: 600;
                background: {background};
                color: {color};
            ",
            NavItemIcon { item, size: 24 }
            span { "{item.label()}" }
        }
    }
}
