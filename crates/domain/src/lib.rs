//! # labdev-domain
//!
//! Pure domain model for the labdev measurement-device workbench.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, number formatting
//! - Define **Devices** (a base measurement device and its temperature variant)
//! - Define the **Container** (ordered ownership, current selection, search, sort)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or IO crates.
//! Console interaction is expressed as a trait in the `app` crate (port).

pub mod error;
pub mod number;

pub mod container;
pub mod device;
pub mod material;
pub mod temperature;
