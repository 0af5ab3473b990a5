//! User and session actions.

mod get_current_user;
pub use get_current_user::{find_user_by_account, find_user_by_email, get_current_user, require_current_user};

mod email_sign_in;
pub use email_sign_in::{create_session, send_email_otp};

mod sign_out;
pub use sign_out::sign_out;

#[cfg(test)]
#[path = "users_test.rs"]
mod tests;
