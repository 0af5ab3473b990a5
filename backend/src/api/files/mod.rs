//! File listing and file mutation actions.

mod get_files;
pub use get_files::get_files;

mod rename_file;
pub use rename_file::rename_file;

mod update_file_users;
pub use update_file_users::update_file_users;

mod delete_file;
pub use delete_file::delete_file;

pub mod files_query;

mod file_access;
pub use file_access::{FileAccess, require_file_access};
