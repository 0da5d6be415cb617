//! Shared utilities.

pub mod validation;
