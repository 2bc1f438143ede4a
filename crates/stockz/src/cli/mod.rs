//! # CLI Behavior
//!
//! This is **one possible client** for stockz, not the application itself. It is
//! the only place that knows about terminal I/O, exit codes and output formatting.
//!
//! For the overall architecture, see the crate-level documentation in [`crate`].
//!
//! ## Sessions
//!
//! `stockz` starts an interactive session: every input line is one user action
//! on the stock page (`add Arroz 5`, `edit 1`, `search arr`...). `--script <file>`
//! replays a file of such lines instead of reading stdin.
//!
//! Questions the page asks (merge? delete? new quantity?) are answered on the
//! next input line, so a script carries its answers inline:
//!
//! ```text
//! add Arroz 5
//! add arroz 3
//! y
//! ```
//!
//! ## Module Structure
//!
//! - `commands`: session setup and the event loop
//! - `input`: reader thread and line parsing
//! - `prompter`: dialogs on the terminal
//! - `render`: output formatting (tables, messages, JSON)
//! - `setup`: argument parsing via clap
//! - `styles`: terminal styling
//! - `templates`: output templates

mod commands;
mod input;
mod prompter;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
