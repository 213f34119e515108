//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, ComposeAction};
pub use output::{
    format_composition_list, format_composition_view, format_page_list, format_page_list_json,
    format_tag_list,
};
