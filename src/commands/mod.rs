//! CLI command implementations

pub mod check;
pub mod clean;
pub mod generate;
pub mod list;
