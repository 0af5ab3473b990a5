//! Storage backend REST helpers.

pub mod appwrite_models;
pub mod appwrite_query;
pub mod appwrite_utils;
