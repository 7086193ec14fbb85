// src/lib.rs

//! `antglob` is a library for finding files by Ant-style glob patterns: the
//! same `*`, `?`, and `**` syntax Apache Ant, Maven, and countless build
//! tools use for `<fileset>` inclusion and exclusion.
//!
//! # Key Features
//!
//! - Familiar glob syntax: `*` and `?` within a path component, `**` for
//!   zero or more intervening components, trailing `/` as shorthand for
//!   `/**`.
//! - Independent include and exclude pattern lists, each able to prune
//!   whole subtrees out of the walk once a directory can no longer match.
//! - A standard default-exclude list for version-control and editor noise.
//! - An injectable walker, so callers can glob over something other than
//!   the real filesystem (useful for tests, virtual trees, archives).
//!
//! # Example
//!
//! ```no_run
//! use antglob::{FileSet, FileSetOptions};
//!
//! fn main() -> Result<(), antglob::AntGlobError> {
//!     let fileset = FileSet::new(
//!         FileSetOptions::new(vec!["**/*.rs".to_string()])
//!             .exclude(vec!["target/**/*".to_string()]),
//!     )?;
//!
//!     for entry in fileset.files()? {
//!         let (dir, name) = entry?;
//!         println!("{}", dir.join(name).display());
//!     }
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod core;

pub use crate::core::config::FileSetOptions;
pub use crate::core::error::AntGlobError;
pub use crate::core::fileset::FileSet;
pub use crate::core::match_type::MatchType;
pub use crate::core::pattern::Pattern;
pub use crate::core::pattern_set::PatternSet;
pub use crate::core::walk::{DirWalker, FsWalker, ListWalker};
