//! Application state module

mod app_state;
mod forms;
mod navigation;
mod notification;
mod submission;

pub use app_state::*;
pub use forms::*;
pub use navigation::*;
pub use notification::*;
pub use submission::*;
