//! Shared file and user models.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

const DOCUMENT_EXTENSIONS: &[&str] = &[
    "pdf", "doc", "docx", "txt", "xls", "xlsx", "csv", "rtf", "ods", "ppt", "odp", "md", "html", "htm", "epub",
    "pages", "fig", "psd", "ai", "indd", "xd", "sketch", "afdesign", "afphoto",
];
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "svg", "webp"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mov", "mkv", "webm"];
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "ogg", "flac"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Image,
    Document,
    Video,
    Audio,
    #[default]
    Other,
}

impl FileType {
    pub const ALL: [FileType; 5] = [FileType::Image, FileType::Document, FileType::Video, FileType::Audio, FileType::Other];

    /// Classifies a file by its extension, ignoring case.
    pub fn from_extension(extension: &str) -> Self {
        let extension = extension.to_lowercase();
        let extension = extension.as_str();
        if DOCUMENT_EXTENSIONS.contains(&extension) {
            FileType::Document
        } else if IMAGE_EXTENSIONS.contains(&extension) {
            FileType::Image
        } else if VIDEO_EXTENSIONS.contains(&extension) {
            FileType::Video
        } else if AUDIO_EXTENSIONS.contains(&extension) {
            FileType::Audio
        } else {
            FileType::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Image => "image",
            FileType::Document => "document",
            FileType::Video => "video",
            FileType::Audio => "audio",
            FileType::Other => "other",
        }
    }
}

impl Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FileType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FileType::ALL
            .into_iter()
            .find(|file_type| file_type.as_str() == s)
            .ok_or_else(|| format!("unknown file type: {s}"))
    }
}

/// Splits a file name into its base name and lower-cased extension.
pub fn split_file_name(file_name: &str) -> (String, String) {
    match file_name.rsplit_once('.') {
        Some((base, extension)) if !base.is_empty() => (base.to_string(), extension.to_lowercase()),
        _ => (file_name.to_string(), String::new()),
    }
}

/// Listing page a file belongs to. Video and audio share the media page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    #[default]
    Documents,
    Images,
    Media,
    Others,
}

impl FileCategory {
    pub const ALL: [FileCategory; 4] = [FileCategory::Documents, FileCategory::Images, FileCategory::Media, FileCategory::Others];

    pub fn for_file_type(file_type: FileType) -> Self {
        match file_type {
            FileType::Video | FileType::Audio => FileCategory::Media,
            FileType::Image => FileCategory::Images,
            FileType::Document => FileCategory::Documents,
            FileType::Other => FileCategory::Others,
        }
    }

    pub fn file_types(&self) -> Vec<FileType> {
        match self {
            FileCategory::Documents => vec![FileType::Document],
            FileCategory::Images => vec![FileType::Image],
            FileCategory::Media => vec![FileType::Video, FileType::Audio],
            FileCategory::Others => vec![FileType::Other],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileCategory::Documents => "documents",
            FileCategory::Images => "images",
            FileCategory::Media => "media",
            FileCategory::Others => "others",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FileCategory::Documents => "Documents",
            FileCategory::Images => "Images",
            FileCategory::Media => "Media",
            FileCategory::Others => "Others",
        }
    }
}

impl Display for FileCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFileCategory(pub String);

impl Display for UnknownFileCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown file category: {}", self.0)
    }
}

impl FromStr for FileCategory {
    type Err = UnknownFileCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FileCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownFileCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UserProfile {
    pub id: String,
    pub account_id: String,
    pub full_name: String,
    pub email: String,
    pub avatar: String,
}

/// A stored file as seen by the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileDocument {
    pub id: String,
    pub name: String,
    pub extension: String,
    pub file_type: FileType,
    pub size: u64,
    pub owner: UserProfile,
    pub account_id: String,
    pub created_at: String,
    pub updated_at: String,
    /// Emails of users the file is shared with.
    pub users: Vec<String>,
    pub url: String,
    pub bucket_file_id: String,
}

impl FileDocument {
    pub fn category(&self) -> FileCategory {
        FileCategory::for_file_type(self.file_type)
    }
}

#[cfg(test)]
#[path = "file_document_test.rs"]
mod tests;
