//! Command implementations

pub mod clone;
pub mod detect;
pub mod install;
pub mod types;
