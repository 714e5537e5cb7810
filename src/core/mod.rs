//! # Core Application Logic
//!
//! Todoer's business logic. It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Todo (record)        │
//!                    │  • Store (redb)         │
//!                    │  • App (state)          │
//!                    │  • update() (actions)   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`todo`]: The `Todo` record and its storage key
//! - [`store`]: The `Store`, one transaction per operation
//! - [`state`]: The `App` struct, owner of the store and its projection
//! - [`action`]: The `Action` enum and `update()`
//! - [`config`]: `~/.todoer/config.toml` loading and resolution

pub mod action;
pub mod config;
pub mod state;
pub mod store;
pub mod todo;
