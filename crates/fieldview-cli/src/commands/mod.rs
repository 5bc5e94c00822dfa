//! CLI command implementations.

pub mod trim;
pub mod validate;
pub mod views;
