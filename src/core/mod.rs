//! # Core Application Logic
//!
//! This module contains term-todo's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Driver (effects)     │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │   Store    │
//!           │  Adapter   │              │  (SQLite)  │
//!           │ (ratatui)  │              │            │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: `Action`, `Effect`, and the `update()` reducer
//! - [`driver`]: Performs effects against the store and loops completions back
//! - [`widgets`]: Text fields and the items list, one per tab
//! - [`key`]: UI-agnostic keyboard input
//! - [`config`]: Config file loading and resolution

pub mod action;
pub mod config;
pub mod driver;
pub mod key;
pub mod state;
pub mod widgets;
