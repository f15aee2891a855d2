//! snipbox-board
//!
//! Headless view state for a snippet board: the cached collection, the
//! active category filter, the creation form and the derived reads a
//! renderer needs. Nothing here draws anything.

pub mod board;
pub mod empty_state;
pub mod error;
pub mod form;
pub mod format;
