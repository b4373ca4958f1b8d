pub mod notification;
pub mod sidebar;
pub mod spinner;
pub mod status;
