//! Storage key conventions.
//!
//! Pure string constants. These name the slots the snippet store reads and
//! writes in whatever key-value backend it is given.

/// The single slot holding the serialized snippet collection.
pub const SNIPPETS: &str = "snippets_data";
