//! Per-category usage totals for the dashboard.

use serde::{Deserialize, Serialize};

use crate::{file_document::{FileCategory, FileDocument}, file_format::parse_timestamp};

/// Storage quota shown on the dashboard.
pub const TOTAL_SPACE_BYTES: u64 = 2 * 1024 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: FileCategory,
    pub file_count: u64,
    pub size: u64,
    pub latest_update: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageSummary {
    pub categories: Vec<CategorySummary>,
    pub used: u64,
    pub total: u64,
}

impl UsageSummary {
    pub fn used_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.used as f64 / self.total as f64 * 100.0).min(100.0)
    }
}

pub fn summarize_usage(files: &[FileDocument]) -> UsageSummary {
    let mut categories = FileCategory::ALL
        .into_iter()
        .map(|category| CategorySummary { category, file_count: 0, size: 0, latest_update: None })
        .collect::<Vec<_>>();

    for file in files {
        let Some(summary) = categories.iter_mut().find(|s| s.category == file.category()) else {
            continue;
        };
        summary.file_count += 1;
        summary.size += file.size;

        let is_newer = match (&summary.latest_update, parse_timestamp(&file.updated_at)) {
            (_, None) => false,
            (None, Some(_)) => true,
            (Some(current), Some(candidate)) => parse_timestamp(current).is_none_or(|current| candidate > current),
        };
        if is_newer {
            summary.latest_update = Some(file.updated_at.clone());
        }
    }

    let used = categories.iter().map(|s| s.size).sum();
    UsageSummary { categories, used, total: TOTAL_SPACE_BYTES }
}

#[cfg(test)]
#[path = "file_summary_test.rs"]
mod tests;
