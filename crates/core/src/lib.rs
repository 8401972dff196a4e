//! Domain logic for the sillage perfume catalog.
//!
//! This crate has no I/O: it holds the error taxonomy, shared type aliases,
//! and the pure query-shaping logic (filter predicates, page windows, text
//! search patterns) that the repository and API layers build on.

pub mod error;
pub mod filter;
pub mod page;
pub mod search;
pub mod types;
