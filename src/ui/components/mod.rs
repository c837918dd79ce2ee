//! Reusable UI components

mod button;
mod sidebar_list;
mod toast;

pub use button::{render_button, render_submit_button, BUTTON_HEIGHT};
pub use sidebar_list::{render_sidebar_list, SidebarItem};
pub use toast::render_toast;
