//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod file_document;
pub mod file_query;
pub mod file_format;
pub mod file_summary;
pub mod thumbnail_icon;
pub mod sign_in_notice;
