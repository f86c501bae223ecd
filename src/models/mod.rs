//! Data models module
//!
//! Defines the transient draft collected by the prompt sequence.
//! Includes EntryDraft and EntryType.

pub mod entry;

pub use entry::{EntryDraft, EntryType};
