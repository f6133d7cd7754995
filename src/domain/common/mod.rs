//! Shared domain types and collaborators

pub mod clock;
pub mod domain_error;
