// src/cli/mapping.rs
use crate::cli::args::CliArgs;
use crate::core::config::FileSetOptions;

/// Builds the library's [`FileSetOptions`] from parsed command-line
/// arguments. `-i`/`--include` defaults to `*` when the flag is omitted
/// entirely, matching the bare CLI's "all files" default.
pub fn map_cli_to_options(cli: &CliArgs) -> FileSetOptions {
    let include = if cli.include.is_empty() {
        vec!["*".to_string()]
    } else {
        cli.include.clone()
    };

    let mut options = FileSetOptions::new(include)
        .exclude(cli.exclude.clone())
        .default_excludes(!cli.no_default_excludes)
        .symlinks(!cli.no_symlinks)
        .case_sensitive(!cli.insensitive);

    if let Some(directory) = &cli.directory {
        options = options.directory(directory.clone());
    }

    options
}

pub const USAGE_TEXT: &str = r#"Ant Globs
=========

Apache Ant fileset syntax is documented at the Apache Ant project:

* https://ant.apache.org/manual/dirtasks.html#patterns

Examples
--------

Ant globs are like simple file globs (they use ? and * in the same way), but
include powerful ways of selecting directories. The examples below use the
Ant glob naming, so a leading slash represents the top of the search, not the
root of the file system.

    *.py
            Selects every matching file anywhere in the whole tree.
            Matches /foo.py and /bar/foo.py, but not /foo.pyc.

    /*.py
            Selects every matching file in the root of the search only.
            Matches /foo.py but not /bar/foo.py.

    /myapp/**
            Matches all files under /myapp and below.

    /myapp/**/__init__.py
            Matches all __init__.py files under /myapp and below.

    dir1/__init__.py
            Selects every __init__.py in a directory named dir1, wherever
            dir1 sits in the tree.
            Matches /dir1/file.py and /dir3/dir1/file.py, but not
            /dir1/another/__init__.py.

    **/dir1/__init__.py
            Same as above.

    /**/dir1/__init__.py
            Same as above.

    /myapp/**/dir1/__init__.py
            Selects every __init__.py in a dir1 under /myapp.
            Matches /myapp/dir1/__init__.py and /myapp/dir2/dir1/__init__.py,
            but not /myapp/file.txt or /dir1/file.txt.

Default excludes
-----------------

antglob screens out version-control and editor noise by default - hidden
VCS directories, backup files, and similar clutter. Default excludes can be
switched off on the command line with --no-default-excludes, for example:

    $ antglob -i "*.py" -e "__init__.py" "**/*test*/" "test_*" --no-default-excludes
"#;
