//! CLI library components for the BioShelf inventory tool.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod tables;
