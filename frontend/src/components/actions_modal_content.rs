//! Bodies of the per-file dialogs: details and sharing.

use common::file_document::FileDocument;
use common::file_format::{convert_file_size, format_date_time};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::MdClose;

use crate::components::formatted_date_time::FormattedDateTime;
use crate::components::thumbnail::Thumbnail;
use crate::data_definitions::share_list::{ShareRow, parse_share_input};

#[component]
pub fn ImageThumbnail(file: ReadSignal<FileDocument>) -> Element {
    let f = file.read().clone();
    rsx! {
        div {
            style: "
                display: flex;
                align-items: center;
                gap: 12px;
                padding: 12px;
                border-radius: 16px;
                border: 1px solid rgba(163, 178, 199, 0.3);
                background: rgba(242, 244, 248, 0.6);
            ",
            Thumbnail { file_type: f.file_type, extension: f.extension.clone(), url: f.url.clone() }
            div {
                style: "display: flex; flex-direction: column; gap: 2px; min-width: 0;",
                p {
                    style: "margin: 0; font-size: 14px; font-weight: 600; color: #333F4E; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                    "{f.name}"
                }
                FormattedDateTime { date: f.created_at.clone() }
            }
        }
    }
}

#[component]
pub fn DetailRow(label: String, value: String) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: row; gap: 8px;",
            p {
                style: "margin: 0; width: 30%; font-size: 14px; color: #A3B2C7;",
                "{label}"
            }
            p {
                style: "margin: 0; flex: 1; font-size: 14px; font-weight: 600; color: #333F4E;",
                "{value}"
            }
        }
    }
}

#[component]
pub fn FileDetails(file: ReadSignal<FileDocument>) -> Element {
    let f = file.read().clone();
    rsx! {
        ImageThumbnail { file: f.clone() }
        div {
            style: "display: flex; flex-direction: column; gap: 10px; padding: 8px 4px;",
            DetailRow { label: "Format:", value: f.extension.clone() }
            DetailRow { label: "Size:", value: convert_file_size(f.size) }
            DetailRow { label: "Owner:", value: f.owner.full_name.clone() }
            DetailRow { label: "Last edit:", value: format_date_time(Some(f.updated_at.as_str())) }
        }
    }
}

/// Email entry plus the list of people the file is shared with.
#[component]
pub fn ShareInput(
    file: ReadSignal<FileDocument>,
    on_input_change: Callback<Vec<String>>,
    on_remove: Callback<String>,
) -> Element {
    let f = file.read().clone();
    let rows = ShareRow::rows(&f.users);
    rsx! {
        ImageThumbnail { file: f.clone() }
        div {
            style: "display: flex; flex-direction: column; gap: 10px;",
            p {
                style: "margin: 0; padding-left: 4px; font-size: 14px; color: #333F4E;",
                "Share file with other users"
            }
            input {
                r#type: "email",
                placeholder: "Enter email address",
                style: "
                    height: 48px;
                    padding: 0 16px;
                    border-radius: 9999px;
                    border: 1px solid rgba(163, 178, 199, 0.5);
                    font-size: 14px;
                    outline: none;
                ",
                oninput: move |event: Event<FormData>| {
                    on_input_change.call(parse_share_input(&event.value()));
                },
            }
            div {
                style: "display: flex; flex-direction: column; gap: 6px; padding-top: 8px;",
                div {
                    style: "display: flex; justify-content: space-between;",
                    p { style: "margin: 0; font-size: 14px; color: #333F4E;", "Shared with" }
                    p { style: "margin: 0; font-size: 14px; color: #A3B2C7;", "{rows.len()} users" }
                }
                ul {
                    style: "margin: 0; padding: 0; list-style: none; display: flex; flex-direction: column; gap: 4px;",
                    for row in rows {
                        ShareRowItem { key: "{row.email}", email: row.email.clone(), on_remove }
                    }
                }
            }
        }
    }
}

#[component]
fn ShareRowItem(email: String, on_remove: Callback<String>) -> Element {
    let row = ShareRow { email: email.clone() };
    rsx! {
        li {
            style: "display: flex; align-items: center; justify-content: space-between; gap: 8px;",
            p {
                style: "margin: 0; font-size: 14px; color: #333F4E; overflow: hidden; text-overflow: ellipsis;",
                "{email}"
            }
            button {
                title: "Remove",
                style: "border: none; background: none; cursor: pointer; color: #A3B2C7; display: flex;",
                onclick: move |_| row.click_remove(|email| on_remove.call(email)),
                Icon { icon: MdClose, style: "width: 20px; height: 20px;" }
            }
        }
    }
}
