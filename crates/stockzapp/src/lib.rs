//! # Stockz Architecture
//!
//! Stockz is a **UI-agnostic stock list library**: a form to add products with
//! quantities, edit/delete actions on every row, and a live search over an
//! in-memory table. The terminal client in the `stockz` crate is just one way
//! to drive it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client (the `stockz` binary, or any other front end)       │
//! │  - Owns input, dialogs on screen, rendering, exit codes     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │ PageEvent
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Page (page.rs)                                             │
//! │  - Markup contract, debounce, per-control cooldown, focus   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade, resolves row selectors (2, "arroz") to keys │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per action, returns CmdResult               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Stock Store (store.rs) + View (view/)                      │
//! │  - Normalized key → entry, one rendered row per entry       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! Nothing in this crate writes to stdout or stderr, sleeps, or reads the wall
//! clock directly:
//! - questions to the user go through an injected [`prompt::Prompter`];
//! - time comes from an injected [`clock::Clock`];
//! - output is returned as [`commands::CmdResult`] data.
//!
//! Diagnostics go through `tracing`; the client decides whether and where they
//! are printed.
//!
//! ## Testing Strategy
//!
//! 1. **Store and commands**: the bulk of the tests, against [`view::TableView`]
//!    with [`prompt::ScriptedPrompter`] answering dialogs.
//! 2. **Page**: event sequences driven by [`clock::ManualClock`], so debounce and
//!    cooldown windows are crossed deterministically.
//! 3. **Client**: the binary is exercised end to end with scripted input.
//!
//! ## Module Overview
//!
//! - [`page`]: Event dispatch, timers, focus and section state
//! - [`api`]: The API facade and row selectors
//! - [`commands`]: Business logic for each action
//! - [`store`]: The stock store and its consistency check
//! - [`view`]: Row rendering and the table body
//! - [`model`]: Core data types (`StockKey`, `StockEntry`, `RowHandle`)
//! - [`normalize`]: The canonical key function
//! - [`validation`]: Form validators and quantity parsing
//! - [`markup`]: Element identifiers the page is wired to
//! - [`prompt`]: Dialog collaborator
//! - [`clock`], [`debounce`], [`cooldown`]: Timing
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod clock;
pub mod commands;
pub mod config;
pub mod cooldown;
pub mod debounce;
pub mod error;
pub mod markup;
pub mod model;
pub mod normalize;
pub mod page;
pub mod prompt;
pub mod store;
pub mod validation;
pub mod view;
