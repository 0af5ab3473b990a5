//! Storage backend configuration read from the environment.

pub const DEFAULT_APPWRITE_ENDPOINT: &str = "http://localhost/v1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppwriteConfig {
    pub endpoint: String,
    pub project_id: String,
    pub api_key: String,
    pub database_id: String,
    pub users_collection_id: String,
    pub files_collection_id: String,
    pub bucket_id: String,
    /// Whether the session cookie carries the `Secure` attribute.
    pub cookie_secure: bool,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or(default.to_string())
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl AppwriteConfig {
    /// Read the config from `APPWRITE_*` variables, defaulting to a local development setup.
    pub fn from_env() -> Self {
        let endpoint = env_or("APPWRITE_ENDPOINT", DEFAULT_APPWRITE_ENDPOINT);
        let cookie_secure = std::env::var("SESSION_COOKIE_SECURE")
            .ok()
            .and_then(|raw| parse_bool(&raw))
            .unwrap_or(endpoint.starts_with("https://"));
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            project_id: env_or("APPWRITE_PROJECT", "storeit"),
            api_key: env_or("APPWRITE_KEY", ""),
            database_id: env_or("APPWRITE_DATABASE", "storeit"),
            users_collection_id: env_or("APPWRITE_USERS_COLLECTION", "users"),
            files_collection_id: env_or("APPWRITE_FILES_COLLECTION", "files"),
            bucket_id: env_or("APPWRITE_BUCKET", "files"),
            cookie_secure,
        }
    }

    pub fn users_documents_path(&self) -> String {
        format!("/databases/{}/collections/{}/documents", self.database_id, self.users_collection_id)
    }

    pub fn files_documents_path(&self) -> String {
        format!("/databases/{}/collections/{}/documents", self.database_id, self.files_collection_id)
    }

    pub fn bucket_file_path(&self, bucket_file_id: &str) -> String {
        format!("/storage/buckets/{}/files/{}", self.bucket_id, bucket_file_id)
    }

    /// Public view URL of a stored file.
    pub fn bucket_file_view_url(&self, bucket_file_id: &str) -> String {
        format!("{}{}/view?project={}", self.endpoint, self.bucket_file_path(bucket_file_id), self.project_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AppwriteConfig {
        AppwriteConfig {
            endpoint: "https://cloud.example.com/v1".to_string(),
            project_id: "proj".to_string(),
            api_key: "key".to_string(),
            database_id: "db".to_string(),
            users_collection_id: "users".to_string(),
            files_collection_id: "files".to_string(),
            bucket_id: "bucket".to_string(),
            cookie_secure: true,
        }
    }

    #[test]
    fn parse_bool_accepts_common_spellings() {
        assert_eq!(parse_bool("YES"), Some(true));
        assert_eq!(parse_bool(" off "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn collection_paths() {
        let config = config();
        assert_eq!(config.users_documents_path(), "/databases/db/collections/users/documents");
        assert_eq!(config.files_documents_path(), "/databases/db/collections/files/documents");
    }

    #[test]
    fn view_url_includes_project() {
        assert_eq!(
            config().bucket_file_view_url("f1"),
            "https://cloud.example.com/v1/storage/buckets/bucket/files/f1/view?project=proj"
        );
    }
}
