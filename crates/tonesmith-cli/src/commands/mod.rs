//! CLI command implementations

pub mod generate;
pub mod generate_all;
pub mod list;
pub mod render;
