// src/cli/mod.rs
mod args;
mod mapping;

pub use args::CliArgs;
pub use mapping::{map_cli_to_options, USAGE_TEXT};
