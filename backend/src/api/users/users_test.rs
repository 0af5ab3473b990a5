use super::*;
use axum::http::Method;

use crate::test_utils::{ISSUED_SESSION_SECRET, VALID_OTP, VALID_SESSION, spawn_mock_backend};

// =============================================================================
// get_current_user
// =============================================================================

#[tokio::test]
async fn no_session_is_signed_out_without_calling_backend() {
    let (config, mock) = spawn_mock_backend().await;
    let user = get_current_user(&config, None).await.unwrap();
    assert_eq!(user, None);
    assert!(mock.recorded().is_empty());
}

#[tokio::test]
async fn valid_session_resolves_user_document() {
    let (config, mock) = spawn_mock_backend().await;
    let user = get_current_user(&config, Some(VALID_SESSION.to_string())).await.unwrap().unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.account_id, "acc1");
    assert_eq!(user.full_name, "Ada Lovelace");

    let account_calls = mock.requests_to(Method::GET, "/v1/account");
    assert_eq!(account_calls.len(), 1);
    assert_eq!(account_calls[0].session.as_deref(), Some(VALID_SESSION));

    let lookups = mock.requests_to(Method::GET, "/v1/databases/db/collections/users/documents");
    assert_eq!(lookups.len(), 1);
    assert_eq!(lookups[0].api_key.as_deref(), Some("server-key"));
    assert!(lookups[0].queries[0].contains("\"accountId\""));
    assert!(lookups[0].queries[0].contains("\"acc1\""));
}

#[tokio::test]
async fn rejected_session_is_signed_out() {
    let (config, _mock) = spawn_mock_backend().await;
    let user = get_current_user(&config, Some("expired".to_string())).await.unwrap();
    assert_eq!(user, None);
}

#[tokio::test]
async fn account_without_user_document_is_signed_out() {
    let (config, mock) = spawn_mock_backend().await;
    *mock.has_user_document.lock().unwrap() = false;
    let user = get_current_user(&config, Some(VALID_SESSION.to_string())).await.unwrap();
    assert_eq!(user, None);
}

#[tokio::test]
async fn unreachable_backend_is_signed_out() {
    let (mut config, _mock) = spawn_mock_backend().await;
    config.endpoint = "http://127.0.0.1:9/v1".to_string();
    let user = get_current_user(&config, Some(VALID_SESSION.to_string())).await.unwrap();
    assert_eq!(user, None);
}

#[tokio::test]
async fn require_current_user_fails_when_signed_out() {
    let (config, _mock) = spawn_mock_backend().await;
    let err = require_current_user(&config, None).await.unwrap_err();
    assert_eq!(err.to_string(), "User not found");
}

// =============================================================================
// email sign in
// =============================================================================

#[tokio::test]
async fn send_email_otp_returns_account_id() {
    let (config, mock) = spawn_mock_backend().await;
    let account_id = send_email_otp(&config, " ada@example.com ", None).await.unwrap();
    assert_eq!(account_id, "acc-new");

    let tokens = mock.requests_to(Method::POST, "/v1/account/tokens/email");
    assert_eq!(tokens[0].body.as_ref().unwrap()["email"], "ada@example.com");
    // user document already exists
    assert!(mock.requests_to(Method::POST, "/v1/databases/db/collections/users/documents").is_empty());
}

#[tokio::test]
async fn first_sign_in_creates_user_document() {
    let (config, mock) = spawn_mock_backend().await;
    *mock.has_user_document.lock().unwrap() = false;
    send_email_otp(&config, "new@example.com", Some("New Person")).await.unwrap();

    let created = mock.requests_to(Method::POST, "/v1/databases/db/collections/users/documents");
    assert_eq!(created.len(), 1);
    let data = &created[0].body.as_ref().unwrap()["data"];
    assert_eq!(data["fullName"], "New Person");
    assert_eq!(data["accountId"], "acc-new");
}

#[tokio::test]
async fn send_email_otp_requires_email() {
    let (config, mock) = spawn_mock_backend().await;
    assert!(send_email_otp(&config, "  ", None).await.is_err());
    assert!(mock.recorded().is_empty());
}

#[tokio::test]
async fn create_session_returns_secret() {
    let (config, _mock) = spawn_mock_backend().await;
    let secret = create_session(&config, "acc1", VALID_OTP).await.unwrap();
    assert_eq!(secret, ISSUED_SESSION_SECRET);
}

#[tokio::test]
async fn create_session_rejects_wrong_code() {
    let (config, _mock) = spawn_mock_backend().await;
    let err = create_session(&config, "acc1", "000000").await.unwrap_err();
    assert!(err.to_string().contains("401"));
}

#[tokio::test]
async fn sign_out_deletes_current_session() {
    let (config, mock) = spawn_mock_backend().await;
    sign_out(&config, VALID_SESSION).await.unwrap();
    let deleted = mock.requests_to(Method::DELETE, "/v1/account/sessions/current");
    assert_eq!(deleted.len(), 1);
    assert_eq!(deleted[0].session.as_deref(), Some(VALID_SESSION));
}
