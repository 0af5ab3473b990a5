//! Header search box with a live results dropdown.

use common::file_document::FileDocument;
use common::file_query::GetFilesRequest;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdSearch;

use crate::api::file_api::get_files;
use crate::components::formatted_date_time::FormattedDateTime;
use crate::components::thumbnail::Thumbnail;
use crate::data_definitions::search_state::{SearchCommand, SearchState};
use crate::routes::Route;

#[component]
pub fn Search(current_route: ReadSignal<Route>) -> Element {
    let mut state = use_signal(SearchState::default);

    let run_command = move |command: SearchCommand| match command {
        SearchCommand::ClearUrlQuery => {
            if let Some(route) = current_route.read().without_query() {
                navigator().push(route);
            }
        }
        SearchCommand::Fetch { generation, search_text } => {
            spawn(async move {
                match get_files(GetFilesRequest::search(search_text)).await {
                    Ok(files) => {
                        if !state.write().apply_results(generation, files) {
                            dioxus::logger::tracing::debug!("Dropped stale search results for generation {generation}");
                        }
                    }
                    Err(e) => {
                        dioxus::logger::tracing::error!("Error searching files: {e:#?}");
                        state.write().apply_error(generation);
                    }
                }
            });
        }
    };

    // the url dropped its query (navigation, reload): empty the box too
    use_effect(move || {
        let url_query = current_route.read().url_query().to_string();
        let command = state.write().sync_url_query(&url_query);
        if let Some(command) = command {
            run_command(command);
        }
    });

    let search_oninput = move |event: Event<FormData>| {
        let command = state.write().set_query(event.value());
        run_command(command);
    };
    let on_select = move |file: FileDocument| {
        let route = state.write().select(&file);
        navigator().push(route);
    };

    rsx! {
        div {
            id: "x-search",
            style: "position: relative; width: 100%; max-width: 480px;",
            div {
                style: "
                    display: flex;
                    align-items: center;
                    gap: 10px;
                    height: 52px;
                    padding: 0 18px;
                    border-radius: 9999px;
                    background: white;
                    box-shadow: 0 8px 30px 0 rgba(65, 89, 214, 0.1);
                ",
                Icon { icon: MdSearch, style: "width: 22px; height: 22px; color: #A3B2C7;" }
                input {
                    r#type: "text",
                    placeholder: "Search...",
                    style: "
                        flex: 1;
                        border: none;
                        outline: none;
                        background: transparent;
                        color: #333F4E;
                        font-size: 14px;
                        font-family: Poppins, sans-serif;
                    ",
                    value: "{state.read().query}",
                    oninput: search_oninput,
                }
            }

            if state.read().open {
                ul {
                    id: "x-search-results",
                    style: "
                        position: absolute;
                        top: 60px;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        display: flex;
                        flex-direction: column;
                        gap: 8px;
                        margin: 0;
                        padding: 12px;
                        list-style: none;
                        border-radius: 20px;
                        background: white;
                        box-shadow: 0 8px 30px 0 rgba(65, 89, 214, 0.1);
                    ",
                    if state.read().results.is_empty() {
                        p {
                            style: "margin: 0; text-align: center; font-size: 14px; color: #A3B2C7;",
                            "No files found"
                        }
                    } else {
                        for file in state.read().results.clone() {
                            SearchResultRow { key: "{file.id}", file, onselect: on_select }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SearchResultRow(file: ReadSignal<FileDocument>, onselect: EventHandler<FileDocument>) -> Element {
    let f = file.read().clone();
    rsx! {
        li {
            class: "storeit-hover-shadow-background",
            style: "
                display: flex;
                align-items: center;
                justify-content: space-between;
                gap: 12px;
                padding: 6px;
                border-radius: 12px;
                cursor: pointer;
            ",
            onclick: move |_| onselect.call(file.read().clone()),
            div {
                style: "display: flex; align-items: center; gap: 12px; min-width: 0;",
                Thumbnail { file_type: f.file_type, extension: f.extension.clone(), url: f.url.clone(), size: 36 }
                p {
                    style: "margin: 0; font-size: 14px; font-weight: 600; color: #333F4E; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                    "{f.name}"
                }
            }
            FormattedDateTime { date: f.created_at.clone() }
        }
    }
}
