// src/main.rs

//! The `antglob` command-line application: search the file system using
//! Apache Ant-style globs and print matching paths, one per line.

use antglob::cli::{CliArgs, map_cli_to_options, USAGE_TEXT};
use antglob::{FileSet, FileSetOptions};

use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli_args = CliArgs::parse();

    init_tracing(cli_args.verbose);

    if cli_args.usage {
        println!("{USAGE_TEXT}");
        return ExitCode::SUCCESS;
    }
    if cli_args.version {
        println!("antglob {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }
    if cli_args.license {
        println!("See the project's license file for terms.");
        return ExitCode::SUCCESS;
    }

    run(cli_args)
}

fn run(cli_args: CliArgs) -> ExitCode {
    let relative = cli_args.relative;
    let start = match cli_args.directory.clone() {
        Some(dir) => dir,
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(err) => {
                eprintln!("antglob: {err}");
                return ExitCode::FAILURE;
            }
        },
    };

    let options: FileSetOptions = map_cli_to_options(&cli_args);

    let fileset = match FileSet::new(options) {
        Ok(fileset) => fileset,
        Err(err) => {
            eprintln!("antglob: {err}");
            return ExitCode::FAILURE;
        }
    };

    let entries = match fileset.files() {
        Ok(entries) => entries,
        Err(err) => {
            eprintln!("antglob: {err}");
            return ExitCode::FAILURE;
        }
    };

    for entry in entries {
        match entry {
            Ok((dir, name)) => print_match(&dir, &name, &start, relative),
            Err(err) => {
                eprintln!("antglob: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

/// `dir` is relative to `start`, as returned by `FileSet::files`.
fn print_match(dir: &std::path::Path, name: &str, start: &std::path::Path, relative: bool) {
    let relative_path = dir.join(name);
    if relative {
        println!(".{}{}", std::path::MAIN_SEPARATOR, relative_path.display());
    } else {
        println!("{}", start.join(&relative_path).display());
    }
}

fn init_tracing(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
