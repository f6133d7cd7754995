//! Placeholder login gate

pub mod dto;
pub mod service;
