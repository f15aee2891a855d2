//! snipbox-storage
//!
//! Key-value backends and the snippet store built on top of them.

pub mod backend;
pub mod config;
pub mod error;
pub mod file;
pub mod memory;
pub mod snippets;
pub mod state;
