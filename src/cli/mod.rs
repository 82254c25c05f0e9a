//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, TermsCommands};
pub use output::{format_application, format_notice, format_post_list, format_term_list};
