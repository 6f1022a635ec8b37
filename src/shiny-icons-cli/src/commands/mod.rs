//! Command handlers for the shiny-icons CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod build;
pub mod configure;
pub mod forms;
