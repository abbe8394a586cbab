//! CLI library components for the CARLOG converter.

pub mod cli;
pub mod commands;
pub mod logging;
