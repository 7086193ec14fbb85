//! The traversal driver: walks a directory tree, threads include/exclude
//! pattern state through it, and yields the files that survive both.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::core::config::FileSetOptions;
use crate::core::default_excludes;
use crate::core::directory_state::{DirectoryState, StateLabel};
use crate::core::error::AntGlobError;
use crate::core::path;
use crate::core::pattern_set::PatternSet;
use crate::core::walk::{DirWalker, FsWalker};
use tracing::{debug, trace};

/// A reusable, restartable glob-driven file search.
///
/// Constructing a `FileSet` validates `include` but does no filesystem I/O;
/// each call to [`FileSet::files`] re-walks the directory tree from
/// scratch, so the same `FileSet` can be enumerated repeatedly, including
/// concurrently from separate threads provided each call stays on one
/// thread (this crate's types are not `Sync`; a `FileSetOptions::walker`
/// must itself be cheaply cloneable across calls if shared).
pub struct FileSet {
    options: FileSetOptions,
}

impl FileSet {
    /// Validates `options.include` is nonempty and returns a `FileSet`.
    /// Glob strings are not compiled until [`FileSet::files`] is called, so
    /// a malformed glob surfaces there, not here.
    pub fn new(options: FileSetOptions) -> Result<FileSet, AntGlobError> {
        if options.include.is_empty() {
            return Err(AntGlobError::EmptyIncludes);
        }
        Ok(FileSet { options })
    }

    /// Runs one full enumeration and returns every matching
    /// `(relative_directory, file_name)` pair that survived `include` minus
    /// `exclude`. `relative_directory` is relative to `options.directory`
    /// (or the process working directory, if unset) - empty for a match at
    /// the search root itself.
    ///
    /// I/O errors encountered partway through a directory read are appended
    /// as a trailing `Err` item rather than discarding the matches already
    /// found; everything collected before the failure is still returned.
    pub fn files(&self) -> Result<Vec<Result<(PathBuf, String), AntGlobError>>, AntGlobError> {
        debug!(include = ?self.options.include, exclude = ?self.options.exclude, "starting enumeration");
        let case_sensitive = path::effective_case_sensitive(self.options.case_sensitive);

        let mut include_set = PatternSet::new();
        for glob in &self.options.include {
            include_set.compile_and_append(glob, case_sensitive)?;
        }

        let mut exclude_set = PatternSet::new();
        for glob in &self.options.exclude {
            exclude_set.compile_and_append(glob, case_sensitive)?;
        }
        if self.options.default_excludes {
            exclude_set.extend(&default_excludes::compiled(case_sensitive)?);
        }

        let start = match &self.options.directory {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };

        let walker: Rc<dyn DirWalker> = match &self.options.walker {
            Some(walker) => Rc::clone(walker),
            None => Rc::new(FsWalker::new(self.options.symlinks)),
        };

        let mut results: Vec<Result<(PathBuf, String), AntGlobError>> = Vec::new();
        let mut include_state = DirectoryState::root(StateLabel::Include, &include_set);
        let mut exclude_state = DirectoryState::root(StateLabel::Exclude, &exclude_set);

        let walk_result = walker.walk(&start, &mut |dir, subdirs, files| {
            let path_elements = relative_components(&start, dir);
            let relative_dir: PathBuf = path_elements.iter().collect();

            include_state = DirectoryState::child(StateLabel::Include, path_elements.clone(), &include_state);
            exclude_state = DirectoryState::child(StateLabel::Exclude, path_elements, &exclude_state);

            if exclude_state.matches_all_files_all_subdirs() {
                trace!(dir = %dir.display(), "pruned: excluded wholesale");
                subdirs.clear();
                return Ok(());
            }
            if include_state.no_possible_matches_in_subdirs() {
                trace!(dir = %dir.display(), "no further include matches possible below here");
                subdirs.clear();
            }

            let file_names: std::collections::HashSet<String> = files.iter().cloned().collect();
            let included = include_state.match_files(&file_names);
            if included.is_empty() {
                return Ok(());
            }
            let excluded = exclude_state.match_files(&included);

            let mut matched: Vec<&String> = included.difference(&excluded).collect();
            matched.sort();
            for name in matched {
                results.push(Ok((relative_dir.clone(), name.clone())));
            }
            Ok(())
        });

        if let Err(err) = walk_result {
            results.push(Err(err));
        }

        Ok(results)
    }
}

fn relative_components(start: &Path, dir: &Path) -> Vec<String> {
    if dir == start {
        return Vec::new();
    }
    let relative = dir.strip_prefix(start).unwrap_or(dir);
    path::split(relative).1
}
