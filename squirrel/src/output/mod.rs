//! Rendering of analysis results for the terminal and as JSON.

mod json;
mod terminal;

pub use json::render_json;
pub use terminal::{render_project_detail, render_terminal};
