//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`, `bitflags`).
//! Keep it lean: no I/O, no rendering, no lookup logic. Just the catalog, theme and flag
//! shapes that the kernel and the UI slice agree on.

pub mod card;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod theme;
