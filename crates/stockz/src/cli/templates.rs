//! # CLI Templates
//!
//! Terminal output is rendered from minijinja templates kept as standalone
//! files under `templates/` and embedded here at compile time.
//!
//! Conventions:
//!
//! 1. Block tags sit on their own lines; the environment trims the newline after
//!    a block tag, so every output line break comes from a content line.
//! 2. Widths and padding are computed in Rust and passed in; templates only pick
//!    styles and decide what is shown.

pub const TABLE_TEMPLATE: &str = include_str!("templates/table.jinja");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.jinja");
pub const SUMMARY_TEMPLATE: &str = include_str!("templates/summary.jinja");
pub const HELP_TEMPLATE: &str = include_str!("templates/help.jinja");
