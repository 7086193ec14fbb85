// src/cli/args.rs
use clap::Parser;
use std::path::PathBuf;

/// Search the file system using Apache Ant-style globs.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, disable_version_flag = true)]
pub struct CliArgs {
    /// The directory from which to start the search (defaults to the
    /// current working directory).
    pub directory: Option<PathBuf>,

    /// One or more Ant-like globs to include in the search. If not
    /// specified, every file is implied.
    #[arg(short = 'i', long = "include", num_args = 0..)]
    pub include: Vec<String>,

    /// One or more Ant-like globs to exclude from the search.
    #[arg(short = 'e', long = "exclude", num_args = 0..)]
    pub exclude: Vec<String>,

    /// Do not apply the standard default excludes.
    #[arg(long = "no-default-excludes")]
    pub no_default_excludes: bool,

    /// Do not follow symlinked directories, and skip symlinked files.
    #[arg(long = "no-symlinks")]
    pub no_symlinks: bool,

    /// Match case-insensitively (always insensitive on Windows-like
    /// systems regardless of this flag).
    #[arg(long = "insensitive")]
    pub insensitive: bool,

    /// Print file paths relative to the starting directory, as `./...`.
    #[arg(short = 'r', long = "relative")]
    pub relative: bool,

    /// Print additional help on glob syntax and exit.
    #[arg(long = "usage")]
    pub usage: bool,

    /// Print the version of antglob and exit.
    #[arg(long = "version")]
    pub version: bool,

    /// Print the license and exit.
    #[arg(long = "license", hide = true)]
    pub license: bool,

    /// Enable diagnostic logging (-v info, -vv debug).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}
