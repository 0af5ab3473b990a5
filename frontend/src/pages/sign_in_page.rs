//! Email one-time-code sign in. Both steps are plain form posts to the auth handlers.

use std::str::FromStr;

use common::sign_in_notice::SignInNotice;
use dioxus::prelude::*;

const LOGO: Asset = asset!("/assets/favicon.svg");

#[component]
pub fn SignInPage(user_id: String, email: String, error: String) -> Element {
    let notice = SignInNotice::from_str(&error).ok();
    let code_sent = !user_id.is_empty();
    rsx! {
        Title { "StoreIt - Sign in" }
        div {
            id: "x-sign-in-page",
            style: "
                display: flex;
                align-items: center;
                justify-content: center;
                width: 100%;
                min-height: 100vh;
                background: #F2F4F8;
            ",
            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 20px;
                    width: min(420px, 90vw);
                    padding: 32px;
                    border-radius: 26px;
                    background: white;
                    box-shadow: 0 8px 30px 0 rgba(65, 89, 214, 0.1);
                ",
                div {
                    style: "display: flex; align-items: center; gap: 10px;",
                    img { src: LOGO, style: "width: 48px; height: 48px;" }
                    span { style: "font-size: 26px; font-weight: 700; color: #FA7275;", "StoreIt" }
                }
                h1 { style: "margin: 0; font-size: 28px; color: #333F4E;", "Sign In" }
                if let Some(notice) = notice {
                    p {
                        style: "margin: 0; padding: 10px 14px; border-radius: 12px; background: rgba(250, 114, 117, 0.1); color: #B42318; font-size: 14px;",
                        "{notice.message()}"
                    }
                }
                if code_sent {
                    CodeForm { user_id, email }
                } else {
                    EmailForm { email }
                }
            }
        }
    }
}

#[component]
fn EmailForm(email: String) -> Element {
    rsx! {
        form {
            method: "post",
            action: "/_auth/email-token",
            style: "display: flex; flex-direction: column; gap: 14px;",
            label { style: LABEL_STYLE, r#for: "email", "Email" }
            input {
                id: "email",
                name: "email",
                r#type: "email",
                required: true,
                placeholder: "Enter your email",
                value: "{email}",
                style: INPUT_STYLE,
            }
            label { style: LABEL_STYLE, r#for: "full_name", "Full name (first sign in only)" }
            input {
                id: "full_name",
                name: "full_name",
                r#type: "text",
                placeholder: "Enter your full name",
                style: INPUT_STYLE,
            }
            button { r#type: "submit", style: BUTTON_STYLE, "Send code" }
        }
    }
}

#[component]
fn CodeForm(user_id: String, email: String) -> Element {
    rsx! {
        form {
            method: "post",
            action: "/_auth/session",
            style: "display: flex; flex-direction: column; gap: 14px;",
            p {
                style: "margin: 0; font-size: 14px; color: #A3B2C7;",
                "We sent a code to "
                span { style: "font-weight: 600; color: #FA7275;", "{email}" }
            }
            input { r#type: "hidden", name: "user_id", value: "{user_id}" }
            input { r#type: "hidden", name: "email", value: "{email}" }
            label { style: LABEL_STYLE, r#for: "secret", "Code" }
            input {
                id: "secret",
                name: "secret",
                r#type: "text",
                required: true,
                autocomplete: "one-time-code",
                placeholder: "6-digit code",
                style: INPUT_STYLE,
            }
            button { r#type: "submit", style: BUTTON_STYLE, "Verify" }
            a {
                href: "/sign-in",
                style: "text-align: center; font-size: 14px; color: #56B8FF;",
                "Use a different email"
            }
        }
    }
}

const LABEL_STYLE: &str = "font-size: 14px; color: #333F4E;";
const INPUT_STYLE: &str = "
    height: 48px;
    padding: 0 16px;
    border-radius: 12px;
    border: 1px solid rgba(163, 178, 199, 0.5);
    font-size: 14px;
    outline: none;
";
const BUTTON_STYLE: &str = "
    height: 52px;
    border: none;
    border-radius: 9999px;
    background: #FA7275;
    color: white;
    font-size: 15px;
    font-weight: 600;
    cursor: pointer;
";
