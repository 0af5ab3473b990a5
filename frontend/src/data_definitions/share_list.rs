//! Share dialog helpers: parsing typed emails and editing the shared-with list.

/// Split the share input the way the dialog reports it: trimmed, then split on commas.
pub fn parse_share_input(value: &str) -> Vec<String> {
    value.trim().split(',').map(str::to_string).collect()
}

/// One row of the "Shared with" list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRow {
    pub email: String,
}

impl ShareRow {
    pub fn rows(users: &[String]) -> Vec<ShareRow> {
        users.iter().map(|email| ShareRow { email: email.clone() }).collect()
    }

    /// Handle one click on the row's remove button.
    pub fn click_remove(&self, mut on_remove: impl FnMut(String)) {
        on_remove(self.email.clone());
    }
}

/// The list to persist after removing `email`.
pub fn without_email(users: &[String], email: &str) -> Vec<String> {
    users.iter().filter(|user| user.as_str() != email).cloned().collect()
}

/// Merge typed emails into the existing list, skipping blanks and duplicates.
pub fn merge_emails(users: &[String], typed: &[String]) -> Vec<String> {
    let mut merged = users.to_vec();
    for email in typed.iter().map(|e| e.trim()).filter(|e| !e.is_empty()) {
        if !merged.iter().any(|existing| existing.eq_ignore_ascii_case(email)) {
            merged.push(email.to_string());
        }
    }
    merged
}
