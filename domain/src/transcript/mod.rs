//! Transcript entities and condensed-history rendering

pub mod condense;
pub mod document;
pub mod entry;
