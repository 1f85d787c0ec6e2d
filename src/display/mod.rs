//! Plain-text formatting for terminal output

pub mod overview;

pub use overview::format_overview;
