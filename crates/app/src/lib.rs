//! # labdev-app
//!
//! Application layer — the interactive session and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **console port** that adapters must implement:
//!   - `Console` — read a line of input, write text
//! - Parse menu choices into typed options (`menu`)
//! - Drive the device container through the menu loop (`session`)
//!
//! ## Dependency rule
//! Depends on `labdev-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod error;
pub mod menu;
pub mod ports;
pub mod session;
