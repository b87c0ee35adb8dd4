//! Domain model for the project shell.
//!
//! # Responsibility
//! - Define the persisted project document and its comment records.
//! - Define the shell mode and the title field identities.
//!
//! # Invariants
//! - A persisted document always carries three non-blank titles.
//! - Comment text is trimmed and 1..=500 characters long.

pub mod mode;
pub mod project;
