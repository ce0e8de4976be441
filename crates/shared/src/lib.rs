//! Shared domain types and static content for the Whispi desktop app.

pub mod domain;
pub mod error;
