//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `init`: Create the data directory and reservations table
//! - `book`: Record a new reservation
//! - `list`: List every reservation
//! - `show`: Show one reservation
//! - `edit`: Change fields of a reservation
//! - `delete`: Remove reservations
//! - `check`: Check database integrity
//! - `show_data_dir`: Show resolved data directory path
//! - `completions`: Generate shell completion scripts

pub mod book;
pub mod check;
pub mod completions;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod show;
pub mod show_data_dir;

pub use book::BookCommand;
pub use check::CheckCommand;
pub use completions::CompletionsCommand;
pub use delete::DeleteCommand;
pub use edit::EditCommand;
pub use init::InitCommand;
pub use list::ListCommand;
pub use show::ShowCommand;
pub use show_data_dir::ShowDataDirCommand;
