//! UI components.

pub mod actions_dropdown;
pub mod actions_modal_content;
pub mod error_boundary;
pub mod file_card;
pub mod formatted_date_time;
pub mod layout;
pub mod search;
pub mod sort_select;
pub mod suspend_boundary;
pub mod thumbnail;
