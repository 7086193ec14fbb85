//! The standard version-control and editor noise excluded by default,
//! matching Apache Ant's `defaultexcludes` list.

use crate::core::error::AntGlobError;
use crate::core::pattern_set::PatternSet;

pub const DEFAULT_EXCLUDE_GLOBS: &[&str] = &[
    "**/__pycache__/**/*",
    "**/*~",
    "**/#*#",
    "**/.#*",
    "**/%*%",
    "**/._*",
    "**/CVS",
    "**/CVS/**/*",
    "**/.cvsignore",
    "**/SCCS",
    "**/SCCS/**/*",
    "**/vssver.scc",
    "**/.svn",
    "**/.svn/**/*",
    "**/.DS_Store",
    "**/.git",
    "**/.git/**/*",
    "**/.gitattributes",
    "**/.gitignore",
    "**/.gitmodules",
    "**/.hg",
    "**/.hg/**/*",
    "**/.hgignore",
    "**/.hgsub",
    "**/.hgsubstate",
    "**/.hgtags",
    "**/.bzr",
    "**/.bzr/**/*",
    "**/.bzrignore",
];

/// Compiles the default-exclude glob list into a fresh [`PatternSet`].
///
/// A fresh set is compiled per [`crate::core::fileset::FileSet`]
/// construction rather than shared as mutable global state: `Pattern`s are
/// immutable value types, so there is no correctness benefit to sharing one
/// instance, and compiling per-`FileSet` sidesteps any "mutating this while
/// another enumeration is in flight" hazard entirely.
pub fn compiled(case_sensitive: bool) -> Result<PatternSet, AntGlobError> {
    let mut set = PatternSet::new();
    for glob in DEFAULT_EXCLUDE_GLOBS {
        set.compile_and_append(glob, case_sensitive)?;
    }
    Ok(set)
}
