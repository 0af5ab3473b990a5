//! Dashboard: storage usage, per-category totals and the latest uploads.

use common::file_document::FileDocument;
use common::file_format::convert_file_size;
use common::file_query::GetFilesRequest;
use common::file_summary::{CategorySummary, UsageSummary, summarize_usage};
use dioxus::prelude::*;

use crate::api::file_api::get_files;
use crate::components::actions_dropdown::{ActionsDropdown, FileListReload};
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::formatted_date_time::FormattedDateTime;
use crate::components::layout::nav_items::{NavItem, NavItemIcon};
use crate::components::suspend_boundary::LoadingIndicator;
use crate::components::thumbnail::Thumbnail;
use crate::routes::Route;

const RECENT_FILES: usize = 10;

#[component]
pub fn DashboardPage() -> Element {
    let mut all_files = use_resource(move || get_files(GetFilesRequest::default()));
    use_context_provider(move || FileListReload {
        reload: Callback::new(move |_: ()| all_files.restart()),
    });

    let all_files = all_files.read();
    let files = match all_files.as_ref() {
        Some(Err(e)) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Some(Ok(files)) => files.clone(),
        None => return rsx! { LoadingIndicator {} },
    };
    let usage = summarize_usage(&files);
    let recent: Vec<FileDocument> = files.into_iter().take(RECENT_FILES).collect();

    rsx! {
        Title { "StoreIt - Dashboard" }
        div {
            id: "x-dashboard-page",
            style: "
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(360px, 1fr));
                gap: 24px;
            ",
            section {
                style: "display: flex; flex-direction: column; gap: 20px;",
                UsageChart { usage: usage.clone() }
                div {
                    style: "
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(160px, 1fr));
                        gap: 16px;
                    ",
                    for summary in usage.categories.clone() {
                        CategorySummaryCard { key: "{summary.category}", summary }
                    }
                }
            }
            section {
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 12px;
                    padding: 24px;
                    border-radius: 20px;
                    background: white;
                ",
                h2 { style: "margin: 0; font-size: 20px; color: #333F4E;", "Recent files uploaded" }
                if recent.is_empty() {
                    p { style: "margin-top: 10px; text-align: center; color: #A3B2C7;", "No files uploaded" }
                } else {
                    ul {
                        style: "margin: 0; padding: 0; list-style: none; display: flex; flex-direction: column; gap: 10px;",
                        for file in recent {
                            RecentFileRow { key: "{file.id}", file }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn UsageChart(usage: ReadSignal<UsageSummary>) -> Element {
    let usage = usage.read().clone();
    let percent = usage.used_percent();
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 12px;
                padding: 24px;
                border-radius: 20px;
                background: #FA7275;
                color: white;
            ",
            h3 { style: "margin: 0; font-size: 20px;", "Available Storage" }
            div {
                style: "width: 100%; height: 12px; border-radius: 9999px; background: rgba(255, 255, 255, 0.3); overflow: hidden;",
                div { style: "width: {percent:.1}%; height: 100%; background: white;" }
            }
            p {
                style: "margin: 0; font-size: 14px;",
                "{percent:.1}% space used: {convert_file_size(usage.used)} / {convert_file_size(usage.total)}"
            }
        }
    }
}

#[component]
fn CategorySummaryCard(summary: ReadSignal<CategorySummary>) -> Element {
    let summary = summary.read().clone();
    let item = NavItem::Category(summary.category);
    rsx! {
        Link {
            to: Route::category_page(summary.category, ""),
            class: "storeit-hover-shadow-background",
            style: "
                display: flex;
                flex-direction: column;
                gap: 8px;
                padding: 18px;
                border-radius: 20px;
                background: white;
                color: #333F4E;
                text-decoration: none;
            ",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; color: #FA7275;",
                NavItemIcon { item, size: 32 }
                span { style: "font-size: 16px; font-weight: 600; color: #333F4E;", "{convert_file_size(summary.size)}" }
            }
            h5 { style: "margin: 0; font-size: 16px;", "{summary.category.title()}" }
            span { style: "font-size: 13px; color: #A3B2C7;", "{summary.file_count} files" }
            FormattedDateTime { date: summary.latest_update.clone().unwrap_or_default() }
        }
    }
}

#[component]
fn RecentFileRow(file: ReadSignal<FileDocument>) -> Element {
    let f = file.read().clone();
    rsx! {
        li {
            style: "display: flex; align-items: center; gap: 12px;",
            Thumbnail { file_type: f.file_type, extension: f.extension.clone(), url: f.url.clone() }
            div {
                style: "display: flex; flex-direction: column; flex: 1; min-width: 0;",
                p {
                    style: "margin: 0; font-size: 14px; font-weight: 600; color: #333F4E; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                    "{f.name}"
                }
                FormattedDateTime { date: f.created_at.clone() }
            }
            ActionsDropdown { file }
        }
    }
}
