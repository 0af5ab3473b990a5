use super::*;

// =============================================================================
// FileType
// =============================================================================

#[test]
fn from_extension_classifies_each_group() {
    assert_eq!(FileType::from_extension("pdf"), FileType::Document);
    assert_eq!(FileType::from_extension("afphoto"), FileType::Document);
    assert_eq!(FileType::from_extension("png"), FileType::Image);
    assert_eq!(FileType::from_extension("svg"), FileType::Image);
    assert_eq!(FileType::from_extension("mkv"), FileType::Video);
    assert_eq!(FileType::from_extension("flac"), FileType::Audio);
}

#[test]
fn from_extension_ignores_case() {
    assert_eq!(FileType::from_extension("JPG"), FileType::Image);
    assert_eq!(FileType::from_extension("Mp3"), FileType::Audio);
}

#[test]
fn from_extension_unknown_is_other() {
    assert_eq!(FileType::from_extension("zip"), FileType::Other);
    assert_eq!(FileType::from_extension(""), FileType::Other);
}

#[test]
fn file_type_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&FileType::Video).unwrap(), "\"video\"");
    let parsed: FileType = serde_json::from_str("\"document\"").unwrap();
    assert_eq!(parsed, FileType::Document);
}

#[test]
fn file_type_parses_only_exact_names() {
    assert_eq!("audio".parse::<FileType>(), Ok(FileType::Audio));
    assert_eq!("Audio".parse::<FileType>(), Err("unknown file type: Audio".to_string()));
}

// =============================================================================
// split_file_name
// =============================================================================

#[test]
fn split_file_name_lowercases_extension() {
    assert_eq!(split_file_name("Report.PDF"), ("Report".to_string(), "pdf".to_string()));
}

#[test]
fn split_file_name_keeps_inner_dots() {
    assert_eq!(split_file_name("archive.tar.gz"), ("archive.tar".to_string(), "gz".to_string()));
}

#[test]
fn split_file_name_without_extension() {
    assert_eq!(split_file_name("README"), ("README".to_string(), String::new()));
    assert_eq!(split_file_name(".env"), (".env".to_string(), String::new()));
}

// =============================================================================
// FileCategory
// =============================================================================

#[test]
fn video_and_audio_share_media() {
    assert_eq!(FileCategory::for_file_type(FileType::Video), FileCategory::Media);
    assert_eq!(FileCategory::for_file_type(FileType::Audio), FileCategory::Media);
}

#[test]
fn other_types_pluralize() {
    assert_eq!(FileCategory::for_file_type(FileType::Image).as_str(), "images");
    assert_eq!(FileCategory::for_file_type(FileType::Document).as_str(), "documents");
    assert_eq!(FileCategory::for_file_type(FileType::Other).as_str(), "others");
}

#[test]
fn media_lists_video_and_audio() {
    assert_eq!(FileCategory::Media.file_types(), vec![FileType::Video, FileType::Audio]);
}

#[test]
fn category_parses_its_own_display() {
    for category in FileCategory::ALL {
        assert_eq!(category.to_string().parse::<FileCategory>(), Ok(category));
    }
}

#[test]
fn category_rejects_unknown_segment() {
    assert_eq!("sign-in".parse::<FileCategory>(), Err(UnknownFileCategory("sign-in".to_string())));
}
