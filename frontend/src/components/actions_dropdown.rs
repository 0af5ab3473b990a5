//! Per-file "more" menu and the dialogs behind its actions.

use common::file_document::FileDocument;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::{MdDelete, MdInfo};
use dioxus_free_icons::icons::md_file_icons::MdFileDownload;
use dioxus_free_icons::icons::md_image_icons::MdEdit;
use dioxus_free_icons::icons::md_navigation_icons::MdMoreVert;
use dioxus_free_icons::icons::md_social_icons::MdShare;

use crate::api::file_api::{delete_file, rename_file, update_file_users};
use crate::components::actions_modal_content::{FileDetails, ShareInput};
use crate::data_definitions::file_action::{ActionsMenuState, FileAction, rename_input_value};
use crate::data_definitions::share_list::{merge_emails, without_email};

/// Provided by listing pages so a finished action can refresh them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FileListReload {
    pub reload: Callback<()>,
}

#[component]
pub fn ActionsDropdown(file: ReadSignal<FileDocument>) -> Element {
    let mut menu = use_signal(ActionsMenuState::default);
    let mut new_name = use_signal(String::new);
    let mut typed_emails = use_signal(Vec::<String>::new);
    let mut is_loading = use_signal(|| false);
    let list_reload = try_use_context::<FileListReload>();

    let notify_error = use_callback(move |(action, message): (FileAction, String)| {
        let toast_api = dioxus_primitives::toast::consume_toast();
        toast_api.error(
            format!("{} failed.", action.label()),
            dioxus_primitives::toast::ToastOptions::new()
                .description(message)
                .duration(std::time::Duration::from_secs(10))
                .permanent(false),
        );
    });
    let finish = use_callback(move |(action, result): (FileAction, Result<(), ServerFnError>)| {
        is_loading.set(false);
        match result {
            Ok(()) => {
                menu.write().close();
                if let Some(list_reload) = list_reload {
                    list_reload.reload.call(());
                }
            }
            Err(e) => {
                dioxus::logger::tracing::error!("Error running {:?} on file: {e:#?}", action);
                notify_error.call((action, e.to_string()));
            }
        }
    });

    let mut choose = move |action: FileAction| {
        let f = file.read().clone();
        new_name.set(rename_input_value(&f.name, &f.extension));
        typed_emails.set(vec![]);
        menu.write().choose(action);
    };

    let submit = move |_: ()| {
        let Some(action) = menu.read().modal else {
            return;
        };
        let f = file.read().clone();
        let name = new_name.read().clone();
        let typed = typed_emails.read().clone();
        is_loading.set(true);
        spawn(async move {
            let result = match action {
                FileAction::Rename => rename_file(f.id.clone(), name, f.extension.clone()).await.map(|_| ()),
                FileAction::Share => update_file_users(f.id.clone(), merge_emails(&f.users, &typed)).await.map(|_| ()),
                FileAction::Delete => delete_file(f.id.clone(), f.bucket_file_id.clone()).await,
                FileAction::Details | FileAction::Download => Ok(()),
            };
            finish.call((action, result));
        });
    };

    // removing someone is saved right away
    let on_remove = use_callback(move |email: String| {
        let f = file.read().clone();
        let remaining = without_email(&f.users, &email);
        is_loading.set(true);
        spawn(async move {
            let result = update_file_users(f.id.clone(), remaining).await.map(|_| ());
            finish.call((FileAction::Share, result));
        });
    });
    let on_input_change = use_callback(move |emails: Vec<String>| typed_emails.set(emails));

    rsx! {
        div {
            style: "position: relative;",
            button {
                class: "storeit-hover-shadow-background",
                style: "
                    width: 36px;
                    height: 36px;
                    border: none;
                    border-radius: 50%;
                    background: none;
                    color: #A3B2C7;
                    cursor: pointer;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                ",
                onclick: move |_e| {
                    _e.prevent_default();
                    _e.stop_propagation();
                    menu.write().toggle_dropdown();
                },
                Icon { icon: MdMoreVert, style: "width: 24px; height: 24px;" }
            }

            if menu.read().dropdown_open {
                // click-away layer
                div {
                    style: "
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.02);
                        z-index: 1000;
                    ",
                    onclick: move |_e| {
                        _e.stop_propagation();
                        menu.write().dropdown_open = false;
                    },
                }
                div {
                    style: "
                        position: absolute;
                        top: 40px;
                        right: 0;
                        width: 200px;
                        display: flex;
                        flex-direction: column;
                        gap: 2px;
                        padding: 8px;
                        border-radius: 12px;
                        background: white;
                        box-shadow: 0 8px 30px 0 rgba(65, 89, 214, 0.15);
                        z-index: 1001;
                    ",
                    p {
                        style: "margin: 0 0 6px 8px; font-size: 13px; font-weight: 600; color: #333F4E; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                        "{file.read().name}"
                    }
                    for action in FileAction::ALL {
                        if action.opens_modal() {
                            button {
                                key: "{action.label()}",
                                class: "storeit-hover-shadow-background",
                                style: "{MENU_ITEM_STYLE}",
                                onclick: move |_e| {
                                    _e.stop_propagation();
                                    choose(action);
                                },
                                ActionIcon { action }
                                "{action.label()}"
                            }
                        } else {
                            a {
                                key: "{action.label()}",
                                class: "storeit-hover-shadow-background",
                                style: "{MENU_ITEM_STYLE} text-decoration: none;",
                                href: "{file.read().url}",
                                download: "{file.read().name}",
                                target: "_blank",
                                onclick: move |_e| {
                                    menu.write().choose(action);
                                },
                                ActionIcon { action }
                                "{action.label()}"
                            }
                        }
                    }
                }
            }

            if let Some(action) = menu.read().modal {
                ActionModal {
                    action,
                    file: file.read().clone(),
                    new_name,
                    is_loading: is_loading(),
                    on_close: move |_: ()| menu.write().close(),
                    on_submit: submit,
                    on_input_change,
                    on_remove,
                }
            }
        }
    }
}

const MENU_ITEM_STYLE: &str = "
    display: flex;
    flex-direction: row;
    align-items: center;
    gap: 10px;
    padding: 8px;
    border: none;
    border-radius: 8px;
    background: none;
    color: #333F4E;
    font-size: 14px;
    cursor: pointer;
";

#[component]
fn ActionIcon(action: FileAction) -> Element {
    let style = "width: 20px; height: 20px; color: #FA7275;";
    match action {
        FileAction::Rename => rsx! { Icon { icon: MdEdit, style } },
        FileAction::Details => rsx! { Icon { icon: MdInfo, style } },
        FileAction::Share => rsx! { Icon { icon: MdShare, style } },
        FileAction::Download => rsx! { Icon { icon: MdFileDownload, style } },
        FileAction::Delete => rsx! { Icon { icon: MdDelete, style } },
    }
}

#[component]
fn ActionModal(
    action: FileAction,
    file: ReadSignal<FileDocument>,
    new_name: Signal<String>,
    is_loading: bool,
    on_close: EventHandler<()>,
    on_submit: EventHandler<()>,
    on_input_change: Callback<Vec<String>>,
    on_remove: Callback<String>,
) -> Element {
    let mut new_name = new_name;
    rsx! {
        div {
            style: "
                position: fixed;
                inset: 0;
                background: rgba(0, 0, 0, 0.3);
                z-index: 1100;
            ",
            onclick: move |_| on_close.call(()),
        }
        div {
            id: "x-action-modal",
            style: "
                position: fixed;
                top: 50%;
                left: 50%;
                transform: translate(-50%, -50%);
                width: min(420px, 90vw);
                display: flex;
                flex-direction: column;
                gap: 16px;
                padding: 24px;
                border-radius: 26px;
                background: white;
                z-index: 1101;
            ",
            h2 {
                style: "margin: 0; text-align: center; font-size: 20px; color: #333F4E;",
                "{action.label()}"
            }
            {
                match action {
                    FileAction::Rename => rsx! {
                        input {
                            r#type: "text",
                            style: "
                                height: 48px;
                                padding: 0 16px;
                                border-radius: 9999px;
                                border: 1px solid rgba(163, 178, 199, 0.5);
                                font-size: 14px;
                                outline: none;
                            ",
                            value: "{new_name}",
                            oninput: move |event: Event<FormData>| new_name.set(event.value()),
                        }
                    },
                    FileAction::Details => rsx! { FileDetails { file } },
                    FileAction::Share => rsx! { ShareInput { file, on_input_change, on_remove } },
                    FileAction::Delete => rsx! {
                        p {
                            style: "margin: 0; text-align: center; font-size: 14px; color: #A3B2C7;",
                            "Are you sure you want to delete "
                            span { style: "font-weight: 600; color: #FA7275;", "{file.read().name}" }
                            "?"
                        }
                    },
                    FileAction::Download => rsx! {},
                }
            }
            if let Some(submit_label) = action.submit_label() {
                div {
                    style: "display: flex; flex-direction: row; gap: 12px;",
                    button {
                        style: "{MODAL_BUTTON_STYLE} background: white; color: #333F4E;",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        style: "{MODAL_BUTTON_STYLE} background: #FA7275; color: white;",
                        disabled: is_loading,
                        onclick: move |_| on_submit.call(()),
                        if is_loading { "Working..." } else { "{submit_label}" }
                    }
                }
            }
        }
    }
}

const MODAL_BUTTON_STYLE: &str = "
    flex: 1;
    height: 48px;
    border: 1px solid rgba(163, 178, 199, 0.5);
    border-radius: 9999px;
    font-size: 14px;
    font-weight: 600;
    cursor: pointer;
";
