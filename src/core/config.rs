//! Configuration surface for [`crate::core::fileset::FileSet`].

use std::path::PathBuf;
use std::rc::Rc;

use crate::core::walk::DirWalker;

/// The knobs a [`crate::core::fileset::FileSet`] enumeration needs.
///
/// Unlike the teacher's per-concern config structs, this crate's surface is
/// small enough that one struct covers it; each field still documents which
/// concern it controls.
#[derive(Clone)]
pub struct FileSetOptions {
    /// Glob strings to compile and match against. Must be nonempty by the
    /// time a `FileSet` is constructed from these options.
    pub include: Vec<String>,
    /// Glob strings whose matches are subtracted from `include`'s.
    pub exclude: Vec<String>,
    /// Starting directory. `None` means the process working directory at
    /// enumeration time.
    pub directory: Option<PathBuf>,
    /// When true, the standard version-control/editor noise list is
    /// appended to `exclude`.
    pub default_excludes: bool,
    /// When false, symlinked files are skipped and symlinked directories
    /// are not descended into.
    pub symlinks: bool,
    /// Requested case sensitivity; reduced by platform (always
    /// case-insensitive on Windows-like systems regardless of this value).
    pub case_sensitive: bool,
    /// Injectable walker; `None` means the real filesystem walker.
    pub walker: Option<Rc<dyn DirWalker>>,
}

impl FileSetOptions {
    /// Starts a builder with the required `include` globs and every other
    /// field at its default (no excludes, current directory, default
    /// excludes on, symlinks followed, case sensitivity per-platform, real
    /// filesystem walker).
    pub fn new(include: Vec<String>) -> Self {
        FileSetOptions {
            include,
            exclude: Vec::new(),
            directory: None,
            default_excludes: true,
            symlinks: true,
            case_sensitive: true,
            walker: None,
        }
    }

    pub fn exclude(mut self, exclude: Vec<String>) -> Self {
        self.exclude = exclude;
        self
    }

    pub fn directory(mut self, directory: PathBuf) -> Self {
        self.directory = Some(directory);
        self
    }

    pub fn default_excludes(mut self, enabled: bool) -> Self {
        self.default_excludes = enabled;
        self
    }

    pub fn symlinks(mut self, enabled: bool) -> Self {
        self.symlinks = enabled;
        self
    }

    pub fn case_sensitive(mut self, requested: bool) -> Self {
        self.case_sensitive = requested;
        self
    }

    pub fn walker(mut self, walker: Rc<dyn DirWalker>) -> Self {
        self.walker = Some(walker);
        self
    }
}

impl std::fmt::Debug for FileSetOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSetOptions")
            .field("include", &self.include)
            .field("exclude", &self.exclude)
            .field("directory", &self.directory)
            .field("default_excludes", &self.default_excludes)
            .field("symlinks", &self.symlinks)
            .field("case_sensitive", &self.case_sensitive)
            .field("walker", &self.walker.as_ref().map(|_| "<injected>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sets_sensible_defaults() {
        let opts = FileSetOptions::new(vec!["*.rs".to_string()]);
        assert!(opts.default_excludes);
        assert!(opts.symlinks);
        assert!(opts.exclude.is_empty());
        assert!(opts.directory.is_none());
        assert!(opts.walker.is_none());
    }

    #[test]
    fn builder_methods_chain() {
        let opts = FileSetOptions::new(vec!["*".to_string()])
            .exclude(vec!["*.log".to_string()])
            .default_excludes(false)
            .symlinks(false)
            .case_sensitive(false);
        assert_eq!(opts.exclude, vec!["*.log".to_string()]);
        assert!(!opts.default_excludes);
        assert!(!opts.symlinks);
        assert!(!opts.case_sensitive);
    }
}
