//! Storage adapter contracts and implementations.
//!
//! # Responsibility
//! - Define the string key-value contract the project store persists through.
//! - Keep SQLite details behind that contract.
//!
//! # Invariants
//! - A `set` either fully replaces the value under a key or changes nothing.
//! - Reads of a missing key return `Ok(None)`, never an error.

pub mod kv_repo;
