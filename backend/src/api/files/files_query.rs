//! Query builders for file listings and file updates.

use common::{
    file_document::{FileDocument, UserProfile},
    file_query::GetFilesRequest,
};

use crate::db_utils::appwrite_query;

/// Files visible to `user` (owned, or shared with their email), filtered and ordered per `request`.
pub fn build_file_queries(user: &UserProfile, request: &GetFilesRequest) -> Vec<String> {
    let mut queries = vec![appwrite_query::or(vec![
        appwrite_query::equal("owner", [user.id.as_str()]),
        appwrite_query::contains("users", [user.email.as_str()]),
    ])];

    if !request.types.is_empty() {
        queries.push(appwrite_query::equal("type", request.types.iter().map(|t| t.as_str())));
    }

    let search_text = request.search_text.trim();
    if !search_text.is_empty() {
        queries.push(appwrite_query::contains("name", [search_text]));
    }

    if let Some(limit) = request.limit {
        queries.push(appwrite_query::limit(limit));
    }

    queries.push(appwrite_query::order(request.sort));

    queries.into_iter().map(|q| q.to_string()).collect()
}

/// Stored name for a rename: the new base name plus the unchanged extension.
pub fn renamed_file_name(name: &str, extension: &str) -> String {
    let name = name.trim();
    if extension.is_empty() {
        name.to_string()
    } else {
        format!("{name}.{extension}")
    }
}

/// Trim, drop blanks and duplicates, keeping first-seen order.
pub fn normalize_emails(emails: &[String]) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(emails.len());
    for email in emails {
        let email = email.trim();
        if email.is_empty() || normalized.iter().any(|e| e.eq_ignore_ascii_case(email)) {
            continue;
        }
        normalized.push(email.to_string());
    }
    normalized
}

/// Whether `user` owns `file`, matched by user document or by account.
pub fn is_file_owner(file: &FileDocument, user: &UserProfile) -> bool {
    (!file.owner.id.is_empty() && file.owner.id == user.id)
        || (!file.account_id.is_empty() && file.account_id == user.account_id)
}

pub fn is_shared_with(file: &FileDocument, user: &UserProfile) -> bool {
    let email = user.email.trim();
    !email.is_empty() && file.users.iter().any(|shared| shared.trim().eq_ignore_ascii_case(email))
}

#[cfg(test)]
#[path = "files_query_test.rs"]
mod tests;
