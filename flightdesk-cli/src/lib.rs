//! Library exports for flightdesk-cli.
//!
//! The binary is a thin wrapper over these modules; exposing them lets the
//! command tree be reused for man pages and completions.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
