//! Server-side actions for the storage dashboard.

pub mod api;
pub mod config;
pub mod db_utils;
pub mod server_extra;
pub mod session;

#[cfg(test)]
pub(crate) mod test_utils;
