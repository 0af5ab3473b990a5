//! StoreIt dashboard: routes, layout, pages and the server function wrappers.

// dioxus components are snake case
#![allow(non_snake_case)]

pub mod app;
pub(crate) mod api;
pub(crate) mod components;
pub(crate) mod data_definitions;
pub(crate) mod pages;
pub(crate) mod routes;
