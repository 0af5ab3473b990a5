//! Shared file listing query models.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::file_document::{FileCategory, FileType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortField {
    CreatedAt,
    Name,
    Size,
}

impl SortField {
    /// Attribute name on the stored document.
    pub fn attribute(&self) -> &'static str {
        match self {
            SortField::CreatedAt => "$createdAt",
            SortField::Name => "name",
            SortField::Size => "size",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Listing order, written in the URL as `field-direction` (e.g. `name-asc`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrder {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortOrder {
    fn default() -> Self {
        Self { field: SortField::CreatedAt, direction: SortDirection::Desc }
    }
}

impl SortOrder {
    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Choices offered by the sort selector, with their labels.
    pub const OPTIONS: [(SortOrder, &'static str); 6] = [
        (SortOrder::new(SortField::CreatedAt, SortDirection::Desc), "Date created (newest)"),
        (SortOrder::new(SortField::CreatedAt, SortDirection::Asc), "Date created (oldest)"),
        (SortOrder::new(SortField::Name, SortDirection::Asc), "Name (A-Z)"),
        (SortOrder::new(SortField::Name, SortDirection::Desc), "Name (Z-A)"),
        (SortOrder::new(SortField::Size, SortDirection::Desc), "Size (Highest)"),
        (SortOrder::new(SortField::Size, SortDirection::Asc), "Size (Lowest)"),
    ];
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let direction = match self.direction {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        };
        write!(f, "{}-{}", self.field.attribute(), direction)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrderParseError(pub String);

impl Display for SortOrderParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid sort order: {:?}", self.0)
    }
}

impl FromStr for SortOrder {
    type Err = SortOrderParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || SortOrderParseError(s.to_string());
        let (field, direction) = s.rsplit_once('-').ok_or_else(err)?;
        let field = match field {
            "$createdAt" => SortField::CreatedAt,
            "name" => SortField::Name,
            "size" => SortField::Size,
            _ => return Err(err()),
        };
        let direction = match direction {
            "asc" => SortDirection::Asc,
            "desc" => SortDirection::Desc,
            _ => return Err(err()),
        };
        Ok(SortOrder { field, direction })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GetFilesRequest {
    pub search_text: String,
    pub types: Vec<FileType>,
    pub sort: SortOrder,
    pub limit: Option<u32>,
}

impl GetFilesRequest {
    pub fn search(search_text: impl Into<String>) -> Self {
        Self { search_text: search_text.into(), ..Default::default() }
    }

    /// The listing a category page shows for its url params. Every param feeds the request.
    pub fn for_category(category: FileCategory, search_text: impl Into<String>, sort: SortOrder) -> Self {
        Self { search_text: search_text.into(), types: category.file_types(), sort, limit: None }
    }
}

#[cfg(test)]
#[path = "file_query_test.rs"]
mod tests;
