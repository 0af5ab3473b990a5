pub mod dashboard_page;
pub mod file_category_page;
pub mod not_found_page;
pub mod sign_in_page;
