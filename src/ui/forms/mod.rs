//! Form components

mod call_form;
mod field_renderer;

pub use call_form::draw_call_form;
