pub mod dashboard_layout;
pub mod header;
pub mod mobile_navigation;
pub mod nav_items;
pub mod sidebar;
