//! Decides whether the dashboard layout renders or sends the visitor to sign in.

use common::file_document::UserProfile;

use crate::routes::Route;

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutGate {
    Redirect(Route),
    Render(UserProfile),
}

impl LayoutGate {
    pub fn from_user(user: Option<UserProfile>) -> Self {
        match user {
            Some(user) => LayoutGate::Render(user),
            None => LayoutGate::Redirect(Route::sign_in()),
        }
    }
}
