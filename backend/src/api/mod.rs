//! Server actions exposed to the frontend.

pub mod files;
pub mod users;
