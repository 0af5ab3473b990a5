//! Listing of one file category, filtered by the url query and sorted.

use common::file_document::FileCategory;
use common::file_format::convert_file_size;
use common::file_query::{GetFilesRequest, SortOrder};
use dioxus::prelude::*;

use crate::api::file_api::get_files;
use crate::components::actions_dropdown::FileListReload;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::file_card::FileCard;
use crate::components::sort_select::SortSelect;
use crate::components::suspend_boundary::LoadingIndicator;
use crate::routes::Route;

#[component]
pub fn FileCategoryPage(category: FileCategory, query: String, sort: SortOrder) -> Element {
    rsx! {
        Title { "StoreIt - {category.title()}" }
        FileCategoryRootComponent { category, query, sort }
    }
}

#[component]
fn FileCategoryRootComponent(
    category: ReadSignal<FileCategory>,
    query: ReadSignal<String>,
    sort: ReadSignal<SortOrder>,
) -> Element {
    // reading the params subscribes the resource, so navigation refetches once
    let mut files = use_resource(move || {
        get_files(GetFilesRequest::for_category(*category.read(), query.read().clone(), *sort.read()))
    });
    use_context_provider(move || FileListReload {
        reload: Callback::new(move |_: ()| files.restart()),
    });

    let set_sort = move |new_sort: SortOrder| {
        navigator().push(Route::FileCategoryPage {
            category: *category.read(),
            query: query.read().clone(),
            sort: new_sort,
        });
    };

    let files = files.read();
    let files = match files.as_ref() {
        Some(Err(e)) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Some(Ok(files)) => files.clone(),
        None => return rsx! { LoadingIndicator {} },
    };
    let total_size: u64 = files.iter().map(|f| f.size).sum();

    rsx! {
        div {
            id: "x-file-category-page",
            style: "display: flex; flex-direction: column; gap: 24px;",
            section {
                style: "display: flex; flex-direction: column; gap: 12px;",
                h1 {
                    style: "margin: 0; font-size: 32px; color: #333F4E; text-transform: capitalize;",
                    "{category.read().title()}"
                }
                div {
                    style: "display: flex; flex-wrap: wrap; justify-content: space-between; align-items: center; gap: 12px;",
                    p {
                        style: "margin: 0; font-size: 16px; color: #333F4E;",
                        "Total: "
                        span { style: "font-weight: 600;", "{convert_file_size(total_size)}" }
                    }
                    SortSelect { sort, on_change: set_sort }
                }
            }
            if files.is_empty() {
                p { style: "margin-top: 10px; text-align: center; color: #A3B2C7;", "No files uploaded" }
            } else {
                section {
                    style: "
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
                        gap: 20px;
                    ",
                    for file in files {
                        FileCard { key: "{file.id}", file }
                    }
                }
            }
        }
    }
}
