//! Plain axum routes served next to the app.

pub mod auth_routes;
