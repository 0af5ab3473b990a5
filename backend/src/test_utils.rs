//! In-process mock of the storage backend's REST API.

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

use crate::config::AppwriteConfig;

pub const VALID_SESSION: &str = "valid-session";
pub const VALID_OTP: &str = "123456";
pub const ISSUED_SESSION_SECRET: &str = "issued-session-secret";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub queries: Vec<String>,
    pub session: Option<String>,
    pub api_key: Option<String>,
    pub body: Option<Value>,
}

#[derive(Debug, Default)]
pub struct MockBackend {
    pub requests: Mutex<Vec<RecordedRequest>>,
    /// When false, the users collection is empty.
    pub has_user_document: Mutex<bool>,
}

impl MockBackend {
    pub fn recorded(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, method: Method, path: &str) -> Vec<RecordedRequest> {
        self.recorded().into_iter().filter(|r| r.method == method && r.path == path).collect()
    }
}

pub fn user_document() -> Value {
    json!({"$id": "u1", "fullName": "Ada Lovelace", "email": "ada@example.com", "avatar": "", "accountId": "acc1"})
}

pub fn other_user_document() -> Value {
    json!({"$id": "u2", "fullName": "Eve", "email": "eve@example.com", "avatar": "", "accountId": "acc2"})
}

/// A single file as the mock stores it. Ids starting with `shared-` belong to another user
/// and are shared with ada, `foreign-` ones belong to another user only, `missing-` ones do not exist.
pub fn stored_file_document(id: &str) -> Option<Value> {
    if id.starts_with("missing-") {
        return None;
    }
    let mut file = file_document(id, "report.pdf", "pdf", "document");
    if id.starts_with("shared-") || id.starts_with("foreign-") {
        file["owner"] = other_user_document();
        file["accountId"] = json!("acc2");
    }
    if id.starts_with("shared-") {
        file["users"] = json!(["Ada@Example.com"]);
    }
    Some(file)
}

pub fn file_document(id: &str, name: &str, extension: &str, file_type: &str) -> Value {
    json!({
        "$id": id,
        "$createdAt": "2024-01-05T09:07:00.000+00:00",
        "$updatedAt": "2024-01-06T10:00:00.000+00:00",
        "name": name,
        "extension": extension,
        "type": file_type,
        "size": 4096,
        "owner": user_document(),
        "accountId": "acc1",
        "users": ["bob@example.com"],
        "url": format!("https://cdn.example.com/{id}"),
        "bucketFileId": format!("blob-{id}"),
    })
}

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_string)
}

fn queries_of(uri: &Uri) -> Vec<String> {
    let url = reqwest::Url::parse(&format!("http://mock{}", uri)).unwrap();
    url.query_pairs().filter(|(k, _)| k == "queries[]").map(|(_, v)| v.into_owned()).collect()
}

async fn handle(State(mock): State<Arc<MockBackend>>, method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Response {
    let request = RecordedRequest {
        method: method.clone(),
        path: uri.path().to_string(),
        queries: queries_of(&uri),
        session: header(&headers, "X-Appwrite-Session"),
        api_key: header(&headers, "X-Appwrite-Key"),
        body: serde_json::from_slice(&body).ok(),
    };
    mock.requests.lock().unwrap().push(request.clone());

    let path = request.path.as_str();
    match (method, path) {
        (Method::GET, "/v1/account") => {
            if request.session.as_deref() == Some(VALID_SESSION) {
                Json(json!({"$id": "acc1", "email": "ada@example.com", "name": "Ada"})).into_response()
            } else {
                (StatusCode::UNAUTHORIZED, Json(json!({"message": "missing scope", "code": 401}))).into_response()
            }
        }
        (Method::DELETE, "/v1/account/sessions/current") => StatusCode::NO_CONTENT.into_response(),
        (Method::POST, "/v1/account/tokens/email") => Json(json!({"$id": "t1", "userId": "acc-new"})).into_response(),
        (Method::POST, "/v1/account/sessions/token") => {
            let secret = request.body.as_ref().and_then(|b| b["secret"].as_str()).unwrap_or_default();
            if secret == VALID_OTP {
                Json(json!({"$id": "s1", "secret": ISSUED_SESSION_SECRET})).into_response()
            } else {
                (StatusCode::UNAUTHORIZED, Json(json!({"message": "invalid token", "code": 401}))).into_response()
            }
        }
        (Method::GET, "/v1/databases/db/collections/users/documents") => {
            let documents = if *mock.has_user_document.lock().unwrap() { vec![user_document()] } else { vec![] };
            Json(json!({"total": documents.len(), "documents": documents})).into_response()
        }
        (Method::POST, "/v1/databases/db/collections/users/documents") => {
            let data = request.body.as_ref().map(|b| b["data"].clone()).unwrap_or_default();
            let mut created = data.clone();
            created["$id"] = json!("u-new");
            Json(created).into_response()
        }
        (Method::GET, "/v1/databases/db/collections/files/documents") => Json(json!({
            "total": 2,
            "documents": [
                file_document("f1", "report.pdf", "pdf", "document"),
                file_document("f2", "holiday.mp4", "mp4", "video"),
            ],
        }))
        .into_response(),
        (Method::GET, p) if p.starts_with("/v1/databases/db/collections/files/documents/") => {
            let id = p.rsplit('/').next().unwrap_or_default();
            match stored_file_document(id) {
                Some(file) => Json(file).into_response(),
                None => (StatusCode::NOT_FOUND, Json(json!({"message": "document not found", "code": 404}))).into_response(),
            }
        }
        (Method::PATCH, p) if p.starts_with("/v1/databases/db/collections/files/documents/") => {
            let id = p.rsplit('/').next().unwrap_or_default();
            let mut file = file_document(id, "report.pdf", "pdf", "document");
            if let Some(Value::Object(data)) = request.body.as_ref().map(|b| b["data"].clone()) {
                for (key, value) in data {
                    file[key] = value;
                }
            }
            Json(file).into_response()
        }
        (Method::DELETE, p) if p.starts_with("/v1/databases/") || p.starts_with("/v1/storage/") => {
            StatusCode::NO_CONTENT.into_response()
        }
        _ => (StatusCode::NOT_FOUND, Json(json!({"message": "route not found", "code": 404}))).into_response(),
    }
}

/// Start the mock on an ephemeral port and return a config pointing at it.
pub async fn spawn_mock_backend() -> (AppwriteConfig, Arc<MockBackend>) {
    let mock = Arc::new(MockBackend { has_user_document: Mutex::new(true), ..Default::default() });
    let app = Router::new().fallback(handle).with_state(mock.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let config = AppwriteConfig {
        endpoint: format!("http://{addr}/v1"),
        project_id: "storeit".to_string(),
        api_key: "server-key".to_string(),
        database_id: "db".to_string(),
        users_collection_id: "users".to_string(),
        files_collection_id: "files".to_string(),
        bucket_id: "bucket".to_string(),
        cookie_secure: false,
    };
    (config, mock)
}
