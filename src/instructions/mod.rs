//! Turning raw instruction text into something fit to read.

pub mod cleaner;
pub mod formatter;

pub use cleaner::clean_instructions;
pub use formatter::{format_for_viewer, format_instructions, format_text, NO_INSTRUCTIONS};
