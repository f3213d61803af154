//! CLI command handlers
//!
//! This module contains the interactive menu, its field prompts and the
//! non-interactive commands, bridging user input with the store and reports.

pub mod menu;
pub mod prompt;
pub mod transaction;

pub use menu::{run_menu, MenuChoice};
pub use prompt::{Prompter, DEFAULT_MAX_ATTEMPTS};
pub use transaction::{handle_add, handle_report, AddArgs, ReportArgs};
