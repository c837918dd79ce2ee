//! Sidebar module for navigation

mod draw;

pub use draw::draw_sidebar;

/// Sidebar width in columns
pub const SIDEBAR_WIDTH: u16 = 24;
