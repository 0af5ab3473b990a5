use common::file_document::FileDocument;
use common::file_format::convert_file_size;
use dioxus::prelude::*;

use crate::components::actions_dropdown::ActionsDropdown;
use crate::components::formatted_date_time::FormattedDateTime;
use crate::components::thumbnail::Thumbnail;

/// One file in a listing: preview, size, name, date, owner and actions.
#[component]
pub fn FileCard(file: ReadSignal<FileDocument>) -> Element {
    let f = file.read().clone();
    rsx! {
        div {
            class: "storeit-hover-shadow-background",
            style: "
                display: flex;
                flex-direction: column;
                gap: 14px;
                padding: 18px;
                border-radius: 18px;
                background: white;
                box-shadow: 0 4px 20px 0 rgba(65, 89, 214, 0.06);
            ",
            div {
                style: "display: flex; justify-content: space-between; align-items: flex-start;",
                a {
                    href: "{f.url}",
                    target: "_blank",
                    Thumbnail { file_type: f.file_type, extension: f.extension.clone(), url: f.url.clone(), size: 80 }
                }
                div {
                    style: "display: flex; flex-direction: column; align-items: flex-end; gap: 24px;",
                    ActionsDropdown { file }
                    p {
                        style: "margin: 0; font-size: 14px; font-weight: 600; color: #333F4E;",
                        "{convert_file_size(f.size)}"
                    }
                }
            }
            div {
                style: "display: flex; flex-direction: column; gap: 4px;",
                p {
                    style: "margin: 0; font-size: 14px; font-weight: 600; color: #333F4E; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                    title: "{f.name}",
                    "{f.name}"
                }
                FormattedDateTime { date: f.created_at.clone() }
                p {
                    style: "margin: 0; font-size: 12px; color: #A3B2C7;",
                    "By: {f.owner.full_name}"
                }
            }
        }
    }
}
