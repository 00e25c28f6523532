pub mod board;
pub mod palette;
pub mod sidebar;
