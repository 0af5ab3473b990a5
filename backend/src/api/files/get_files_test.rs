use super::*;
use axum::http::Method;
use common::file_document::FileType;

use crate::api::files::{delete_file, rename_file, update_file_users};
use crate::test_utils::{VALID_SESSION, spawn_mock_backend};

const FILES_PATH: &str = "/v1/databases/db/collections/files/documents";

fn session() -> Option<String> {
    Some(VALID_SESSION.to_string())
}

#[tokio::test]
async fn get_files_returns_converted_documents() {
    let (config, _mock) = spawn_mock_backend().await;
    let files = get_files(&config, session(), GetFilesRequest::search("re")).await.unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0].name, "report.pdf");
    assert_eq!(files[1].file_type, FileType::Video);
    assert_eq!(files[0].owner.email, "ada@example.com");
}

#[tokio::test]
async fn get_files_sends_scoped_queries() {
    let (config, mock) = spawn_mock_backend().await;
    get_files(&config, session(), GetFilesRequest::search("report")).await.unwrap();

    let listings = mock.requests_to(Method::GET, FILES_PATH);
    assert_eq!(listings.len(), 1);
    let queries = &listings[0].queries;
    assert_eq!(queries.len(), 3);
    assert!(queries[0].contains("\"or\""));
    assert!(queries[1].contains("\"report\""));
    assert!(queries[2].contains("orderDesc"));
}

#[tokio::test]
async fn get_files_without_session_fails() {
    let (config, mock) = spawn_mock_backend().await;
    let err = get_files(&config, None, GetFilesRequest::default()).await.unwrap_err();
    assert_eq!(err.to_string(), "User not found");
    assert!(mock.requests_to(Method::GET, FILES_PATH).is_empty());
}

#[tokio::test]
async fn rename_patches_name_with_extension() {
    let (config, mock) = spawn_mock_backend().await;
    let file = rename_file(&config, session(), "f1", "budget", "pdf").await.unwrap();
    assert_eq!(file.name, "budget.pdf");

    let patches = mock.requests_to(Method::PATCH, &format!("{FILES_PATH}/f1"));
    assert_eq!(patches[0].body.as_ref().unwrap()["data"]["name"], "budget.pdf");
}

#[tokio::test]
async fn rename_rejects_blank_name() {
    let (config, mock) = spawn_mock_backend().await;
    assert!(rename_file(&config, session(), "f1", "  ", "pdf").await.is_err());
    assert!(mock.requests_to(Method::PATCH, &format!("{FILES_PATH}/f1")).is_empty());
}

#[tokio::test]
async fn update_users_sends_normalized_list() {
    let (config, mock) = spawn_mock_backend().await;
    let emails = vec![" carol@example.com".to_string(), "".to_string(), "dan@example.com".to_string()];
    let file = update_file_users(&config, session(), "f1", &emails).await.unwrap();
    assert_eq!(file.users, vec!["carol@example.com".to_string(), "dan@example.com".to_string()]);

    let patches = mock.requests_to(Method::PATCH, &format!("{FILES_PATH}/f1"));
    assert_eq!(patches[0].body.as_ref().unwrap()["data"]["users"], serde_json::json!(["carol@example.com", "dan@example.com"]));
}

#[tokio::test]
async fn delete_removes_document_then_blob() {
    let (config, mock) = spawn_mock_backend().await;
    delete_file(&config, session(), "f1", "blob-f1").await.unwrap();

    let deletes = mock
        .recorded()
        .into_iter()
        .filter(|r| r.method == Method::DELETE)
        .map(|r| r.path)
        .collect::<Vec<_>>();
    assert_eq!(deletes, vec![format!("{FILES_PATH}/f1"), "/v1/storage/buckets/bucket/files/blob-f1".to_string()]);
}

// =============================================================================
// access to a single file
// =============================================================================

#[tokio::test]
async fn mutations_load_the_file_before_writing() {
    let (config, mock) = spawn_mock_backend().await;
    rename_file(&config, session(), "f1", "budget", "pdf").await.unwrap();

    let methods = mock.recorded().into_iter().filter(|r| r.path.starts_with(FILES_PATH)).map(|r| r.method).collect::<Vec<_>>();
    assert_eq!(methods, vec![Method::GET, Method::PATCH]);
}

#[tokio::test]
async fn shared_user_can_rename_and_reshare() {
    let (config, mock) = spawn_mock_backend().await;
    rename_file(&config, session(), "shared-f3", "notes", "txt").await.unwrap();
    update_file_users(&config, session(), "shared-f3", &["ada@example.com".to_string()]).await.unwrap();
    assert_eq!(mock.requests_to(Method::PATCH, &format!("{FILES_PATH}/shared-f3")).len(), 2);
}

#[tokio::test]
async fn shared_user_cannot_delete() {
    let (config, mock) = spawn_mock_backend().await;
    let err = delete_file(&config, session(), "shared-f3", "blob-shared-f3").await.unwrap_err();
    assert_eq!(err.to_string(), "You do not have access to this file");
    assert!(mock.recorded().iter().all(|r| r.method != Method::DELETE));
}

#[tokio::test]
async fn stranger_cannot_touch_a_file() {
    let (config, mock) = spawn_mock_backend().await;
    assert!(rename_file(&config, session(), "foreign-f4", "mine", "pdf").await.is_err());
    assert!(update_file_users(&config, session(), "foreign-f4", &["ada@example.com".to_string()]).await.is_err());
    assert!(delete_file(&config, session(), "foreign-f4", "blob-foreign-f4").await.is_err());

    let writes = mock.recorded().into_iter().filter(|r| r.method == Method::PATCH || r.method == Method::DELETE).count();
    assert_eq!(writes, 0);
}

#[tokio::test]
async fn missing_file_is_not_found() {
    let (config, _mock) = spawn_mock_backend().await;
    let err = rename_file(&config, session(), "missing-f5", "x", "pdf").await.unwrap_err();
    assert_eq!(err.to_string(), "File not found");
}
