use dioxus::prelude::*;

use common::file_document::{FileCategory, FileDocument};
use common::file_query::SortOrder;

use crate::components::layout::dashboard_layout::DashboardLayout;
use crate::pages::dashboard_page::DashboardPage;
use crate::pages::file_category_page::FileCategoryPage;
use crate::pages::not_found_page::NotFoundPage;
use crate::pages::sign_in_page::SignInPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/sign-in?:user_id&:email&:error")]
    SignInPage {
        user_id: String,
        email: String,
        error: String,
    },


    #[layout(DashboardLayout)]

        #[route("/")]
        DashboardPage {},


        #[route("/:category?:query&:sort")]
        FileCategoryPage {
            category: FileCategory,
            query: String,
            sort: SortOrder,
        },

    #[end_layout]


    #[route("/:..segments")]
    NotFoundPage { segments: Vec<String> },
}

impl Route {
    pub fn sign_in() -> Self {
        Self::SignInPage { user_id: String::new(), email: String::new(), error: String::new() }
    }

    pub fn category_page(category: FileCategory, query: impl Into<String>) -> Self {
        Self::FileCategoryPage { category, query: query.into(), sort: SortOrder::default() }
    }

    /// Listing page for the file's type, carrying the search query along.
    pub fn for_search_result(file: &FileDocument, query: impl Into<String>) -> Self {
        Self::category_page(file.category(), query)
    }

    /// The `query` URL parameter of the current page, empty when there is none.
    pub fn url_query(&self) -> &str {
        match self {
            Self::FileCategoryPage { query, .. } => query.as_str(),
            _ => "",
        }
    }

    /// The same page with the search query removed, if it had one.
    pub fn without_query(&self) -> Option<Self> {
        match self {
            Self::FileCategoryPage { category, query, sort } if !query.is_empty() => {
                Some(Self::FileCategoryPage { category: *category, query: String::new(), sort: *sort })
            }
            _ => None,
        }
    }

    pub fn current_category(&self) -> Option<FileCategory> {
        match self {
            Self::FileCategoryPage { category, .. } => Some(*category),
            _ => None,
        }
    }
}
