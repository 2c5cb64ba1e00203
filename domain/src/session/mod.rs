//! Session-scoped state

pub mod context;
