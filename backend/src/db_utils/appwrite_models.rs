//! Wire shapes returned by the storage backend, and their conversion into shared models.

use common::file_document::{FileDocument, FileType, UserProfile};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DocumentList<T> {
    pub total: u64,
    pub documents: Vec<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAccount {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawToken {
    #[serde(rename = "userId")]
    pub user_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSession {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(default)]
    pub secret: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawUserDocument {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(rename = "fullName", default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(rename = "accountId", default)]
    pub account_id: String,
}

impl From<RawUserDocument> for UserProfile {
    fn from(raw: RawUserDocument) -> Self {
        UserProfile {
            id: raw.id,
            account_id: raw.account_id,
            full_name: raw.full_name,
            email: raw.email,
            avatar: raw.avatar,
        }
    }
}

/// The owner relationship arrives expanded, or as a bare document id.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawOwner {
    Expanded(RawUserDocument),
    Id(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawFileDocument {
    #[serde(rename = "$id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub extension: String,
    #[serde(rename = "type", default)]
    pub file_type: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub owner: Option<RawOwner>,
    #[serde(rename = "accountId", default)]
    pub account_id: String,
    #[serde(rename = "$createdAt", default)]
    pub created_at: String,
    #[serde(rename = "$updatedAt", default)]
    pub updated_at: String,
    #[serde(default)]
    pub users: Vec<String>,
    #[serde(default)]
    pub url: String,
    #[serde(rename = "bucketFileId", default)]
    pub bucket_file_id: String,
}

impl From<RawFileDocument> for FileDocument {
    fn from(raw: RawFileDocument) -> Self {
        let file_type = raw
            .file_type
            .parse::<FileType>()
            .unwrap_or_else(|_| FileType::from_extension(&raw.extension));
        let owner = match raw.owner {
            Some(RawOwner::Expanded(user)) => user.into(),
            Some(RawOwner::Id(id)) => UserProfile { id, ..Default::default() },
            None => UserProfile::default(),
        };
        FileDocument {
            id: raw.id,
            name: raw.name,
            extension: raw.extension,
            file_type,
            size: raw.size,
            owner,
            account_id: raw.account_id,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
            users: raw.users,
            url: raw.url,
            bucket_file_id: raw.bucket_file_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn file_with_expanded_owner() {
        let raw: RawFileDocument = serde_json::from_value(json!({
            "$id": "f1",
            "$createdAt": "2024-01-05T09:07:00.000+00:00",
            "$updatedAt": "2024-01-06T09:07:00.000+00:00",
            "name": "report.pdf",
            "extension": "pdf",
            "type": "document",
            "size": 2048,
            "owner": {"$id": "u1", "fullName": "Ada", "email": "ada@example.com", "accountId": "acc1", "avatar": ""},
            "accountId": "acc1",
            "users": ["bob@example.com"],
            "url": "https://cdn/report.pdf",
            "bucketFileId": "b1"
        }))
        .unwrap();
        let file = FileDocument::from(raw);
        assert_eq!(file.file_type, FileType::Document);
        assert_eq!(file.owner.full_name, "Ada");
        assert_eq!(file.users, vec!["bob@example.com".to_string()]);
        assert_eq!(file.bucket_file_id, "b1");
    }

    #[test]
    fn file_with_owner_id_only() {
        let raw: RawFileDocument = serde_json::from_value(json!({
            "$id": "f2",
            "name": "clip.mov",
            "extension": "mov",
            "type": "video",
            "owner": "u9"
        }))
        .unwrap();
        let file = FileDocument::from(raw);
        assert_eq!(file.owner.id, "u9");
        assert_eq!(file.owner.full_name, "");
        assert!(file.users.is_empty());
    }

    #[test]
    fn unknown_type_falls_back_to_extension() {
        let raw: RawFileDocument = serde_json::from_value(json!({
            "$id": "f3",
            "name": "song.mp3",
            "extension": "mp3",
            "type": "music"
        }))
        .unwrap();
        assert_eq!(FileDocument::from(raw).file_type, FileType::Audio);
    }

    #[test]
    fn document_list_shape() {
        let list: DocumentList<RawUserDocument> = serde_json::from_value(json!({
            "total": 1,
            "documents": [{"$id": "u1", "fullName": "Ada", "email": "ada@example.com", "accountId": "acc1"}]
        }))
        .unwrap();
        assert_eq!(list.total, 1);
        assert_eq!(UserProfile::from(list.documents[0].clone()).account_id, "acc1");
    }
}
