//! Judge verdict types and response parsing

pub mod parsing;
pub mod verdict;
