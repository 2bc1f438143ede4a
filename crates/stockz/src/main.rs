//! # Stockz CLI Architecture
//!
//! Stockz ships with an interactive terminal client, but the binary is
//! intentionally thin: the client lives in `src/cli/`, while this file only
//! invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/stockzapp/`: UI-agnostic library holding every stock rule
//! - `crates/stockz/`: this terminal client, depending on `stockzapp`
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/stockz/src/cli/)                         │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Input lines → page events (input.rs)                     │
//! │  - Event loop and timers (commands.rs)                      │
//! │  - Dialogs on the terminal (prompter.rs)                    │
//! │  - Rendering via minijinja templates (render.rs)            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Page + API (crates/stockzapp/src/page.rs, api.rs)          │
//! │  - Debounce, cooldown, selectors, structured `CmdResult`    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The terminal plays the part of the document: it owns input, shows dialogs,
//! and draws the table. It holds no stock state of its own.
//!
//! ## Testing Approach
//!
//! - **Library**: the bulk of the tests, in `crates/stockzapp`.
//! - **CLI**: line parsing and rendering are unit tested with canned data;
//!   `tests/` drives the real binary with scripted sessions.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
