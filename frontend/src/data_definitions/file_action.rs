//! Per-file actions menu and the modal each action opens.

use common::file_document::split_file_name;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Rename,
    Details,
    Share,
    Download,
    Delete,
}

impl FileAction {
    pub const ALL: [FileAction; 5] = [FileAction::Rename, FileAction::Details, FileAction::Share, FileAction::Download, FileAction::Delete];

    pub fn label(&self) -> &'static str {
        match self {
            FileAction::Rename => "Rename",
            FileAction::Details => "Details",
            FileAction::Share => "Share",
            FileAction::Download => "Download",
            FileAction::Delete => "Delete",
        }
    }

    /// Download is a plain link; every other action needs a dialog.
    pub fn opens_modal(&self) -> bool {
        !matches!(self, FileAction::Download)
    }

    pub fn submit_label(&self) -> Option<&'static str> {
        match self {
            FileAction::Rename => Some("Rename"),
            FileAction::Share => Some("Share"),
            FileAction::Delete => Some("Delete"),
            FileAction::Details | FileAction::Download => None,
        }
    }
}

/// What the rename box starts with: the name without its own extension.
pub fn rename_input_value(file_name: &str, extension: &str) -> String {
    let (base, ext) = split_file_name(file_name);
    if !extension.is_empty() && ext.eq_ignore_ascii_case(extension) { base } else { file_name.to_string() }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionsMenuState {
    pub dropdown_open: bool,
    pub modal: Option<FileAction>,
}

impl ActionsMenuState {
    pub fn toggle_dropdown(&mut self) {
        self.dropdown_open = !self.dropdown_open;
    }

    pub fn choose(&mut self, action: FileAction) {
        self.dropdown_open = false;
        self.modal = action.opens_modal().then_some(action);
    }

    pub fn close(&mut self) {
        self.dropdown_open = false;
        self.modal = None;
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choosing_a_dialog_action_opens_modal_and_closes_dropdown() {
        let mut state = ActionsMenuState::default();
        state.toggle_dropdown();
        state.choose(FileAction::Share);
        assert!(!state.dropdown_open);
        assert_eq!(state.modal, Some(FileAction::Share));
    }

    #[test]
    fn download_does_not_open_modal() {
        let mut state = ActionsMenuState::default();
        state.toggle_dropdown();
        state.choose(FileAction::Download);
        assert!(!state.is_modal_open());
        assert!(!state.dropdown_open);
    }

    #[test]
    fn close_resets_everything() {
        let mut state = ActionsMenuState { dropdown_open: true, modal: Some(FileAction::Delete) };
        state.close();
        assert_eq!(state, ActionsMenuState::default());
    }

    #[test]
    fn details_has_no_submit_button() {
        assert_eq!(FileAction::Details.submit_label(), None);
        assert_eq!(FileAction::Rename.submit_label(), Some("Rename"));
    }

    #[test]
    fn rename_box_strips_matching_extension() {
        assert_eq!(rename_input_value("report.final.pdf", "pdf"), "report.final");
        assert_eq!(rename_input_value("Photo.JPG", "jpg"), "Photo");
    }

    #[test]
    fn rename_box_keeps_name_without_that_extension() {
        assert_eq!(rename_input_value("notes", "txt"), "notes");
        assert_eq!(rename_input_value("archive.tar", ""), "archive.tar");
    }
}
