//! UI state types kept free of rendering so they can be tested directly.

pub mod error_recovery;
pub mod file_action;
pub mod layout_gate;
pub mod search_state;
pub mod share_list;
