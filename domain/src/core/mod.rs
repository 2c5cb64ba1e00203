//! Core domain concepts

pub mod error;
pub mod provider;
