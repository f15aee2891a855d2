//! snipbox-core
//!
//! Pure domain types and storage key conventions.
//! No I/O here, this is the shared vocabulary of the snipbox crates.

pub mod error;
pub mod models;
pub mod storage_keys;
