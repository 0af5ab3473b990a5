//! What an error panel offers the user, decided from the error text.

use crate::routes::Route;

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorRecovery {
    /// The session is gone; retrying cannot help.
    SignInAgain,
    /// The file was deleted or unshared while the page was open.
    FileUnavailable,
    Retry,
}

impl ErrorRecovery {
    pub fn from_error_text(error_txt: &str) -> Self {
        if error_txt.contains("User not found") {
            ErrorRecovery::SignInAgain
        } else if error_txt.contains("File not found") || error_txt.contains("do not have access to this file") {
            ErrorRecovery::FileUnavailable
        } else {
            ErrorRecovery::Retry
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            ErrorRecovery::SignInAgain => "Your session has ended",
            ErrorRecovery::FileUnavailable => "This file is no longer available",
            ErrorRecovery::Retry => "Could not load your files",
        }
    }

    /// Where the recovery link goes, if the panel shows one.
    pub fn link(&self) -> Option<(Route, &'static str)> {
        match self {
            ErrorRecovery::SignInAgain => Some((Route::sign_in(), "Sign in again")),
            ErrorRecovery::FileUnavailable => Some((Route::DashboardPage {}, "Back to Dashboard")),
            ErrorRecovery::Retry => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lost_session_asks_to_sign_in() {
        let recovery = ErrorRecovery::from_error_text("ServerError { message: \"User not found\", code: 500 }");
        assert_eq!(recovery, ErrorRecovery::SignInAgain);
        assert_eq!(recovery.link().map(|(route, _)| route.to_string()), Some("/sign-in".to_string()));
    }

    #[test]
    fn denied_or_deleted_file_goes_back_to_dashboard() {
        assert_eq!(ErrorRecovery::from_error_text("File not found"), ErrorRecovery::FileUnavailable);
        assert_eq!(
            ErrorRecovery::from_error_text("You do not have access to this file"),
            ErrorRecovery::FileUnavailable
        );
        assert_eq!(ErrorRecovery::FileUnavailable.link().map(|(route, _)| route.to_string()), Some("/".to_string()));
    }

    #[test]
    fn anything_else_can_be_retried() {
        let recovery = ErrorRecovery::from_error_text("Error: 503 Service Unavailable");
        assert_eq!(recovery, ErrorRecovery::Retry);
        assert_eq!(recovery.link(), None);
    }
}
