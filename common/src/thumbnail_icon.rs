//! Picks what a file thumbnail shows: the image itself or an icon.

use crate::file_document::FileType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbnailIcon {
    Pdf,
    Doc,
    Csv,
    Txt,
    Spreadsheet,
    Svg,
    Video,
    Audio,
    Image,
    Document,
    Other,
}

impl ThumbnailIcon {
    pub fn for_extension(extension: &str, file_type: FileType) -> Self {
        match extension.to_lowercase().as_str() {
            "pdf" => ThumbnailIcon::Pdf,
            "doc" | "docx" => ThumbnailIcon::Doc,
            "csv" => ThumbnailIcon::Csv,
            "txt" => ThumbnailIcon::Txt,
            "xls" | "xlsx" => ThumbnailIcon::Spreadsheet,
            "svg" => ThumbnailIcon::Svg,
            "mkv" | "mov" | "avi" | "wmv" | "mp4" | "flv" | "webm" | "m4v" | "3gp" => ThumbnailIcon::Video,
            "mp3" | "mpeg" | "wav" | "aac" | "flac" | "ogg" | "wma" | "m4a" | "aiff" | "alac" => ThumbnailIcon::Audio,
            "avif" | "jpeg" | "jpg" | "png" | "gif" | "webp" => ThumbnailIcon::Image,
            _ => match file_type {
                FileType::Image => ThumbnailIcon::Image,
                FileType::Document => ThumbnailIcon::Document,
                FileType::Video => ThumbnailIcon::Video,
                FileType::Audio => ThumbnailIcon::Audio,
                FileType::Other => ThumbnailIcon::Other,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThumbnailSource {
    Url(String),
    Icon(ThumbnailIcon),
}

/// Raster images preview their own url; everything else gets an icon.
pub fn thumbnail_source(file_type: FileType, extension: &str, url: &str) -> ThumbnailSource {
    let is_image = file_type == FileType::Image && !extension.eq_ignore_ascii_case("svg");
    if is_image && !url.is_empty() {
        ThumbnailSource::Url(url.to_string())
    } else {
        ThumbnailSource::Icon(ThumbnailIcon::for_extension(extension, file_type))
    }
}
