//! A mutable ordered collection of [`Pattern`]s with bulk file matching.

use std::cell::Cell;
use std::collections::HashSet;

use crate::core::pattern::Pattern;

/// Ordered collection of patterns; caches whether any member matches every
/// file name so bulk matching can short-circuit. The cache uses interior
/// mutability so a `PatternSet` held behind a shared `Rc` (as
/// `DirectoryState` does) can still query it.
#[derive(Clone, Debug, Default)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
    all_files: Cell<Option<bool>>,
}

impl PatternSet {
    pub fn new() -> Self {
        PatternSet {
            patterns: Vec::new(),
            all_files: Cell::new(Some(false)),
        }
    }

    /// Compiles `glob` (possibly into two patterns, per the trailing-`**`
    /// expansion) and appends the result.
    pub fn compile_and_append(
        &mut self,
        glob: &str,
        case_sensitive: bool,
    ) -> Result<(), crate::core::error::AntGlobError> {
        for pattern in Pattern::compile(glob, case_sensitive)? {
            self.append(pattern);
        }
        Ok(())
    }

    pub fn append(&mut self, pattern: Pattern) {
        if let Some(cached) = self.all_files.get() {
            self.all_files.set(Some(cached || pattern.all_files()));
        }
        self.patterns.push(pattern);
    }

    /// Extends this set with another set's patterns, invalidating the
    /// `all_files` cache (recomputed lazily on next query).
    pub fn extend(&mut self, other: &PatternSet) {
        self.patterns.extend(other.patterns.iter().cloned());
        self.all_files.set(None);
    }

    pub fn remove_at(&mut self, index: usize) -> Pattern {
        self.all_files.set(None);
        self.patterns.remove(index)
    }

    pub fn all_files(&self) -> bool {
        if let Some(cached) = self.all_files.get() {
            return cached;
        }
        let computed = self.patterns.iter().any(Pattern::all_files);
        self.all_files.set(Some(computed));
        computed
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Snapshot iterator: safe against a caller mutating `self` based on
    /// what is yielded (mirrors the source's `list(self.patterns)` before
    /// iterating, since `DirectoryState` construction removes patterns from
    /// `unmatched` while iterating it).
    pub fn snapshot(&self) -> Vec<Pattern> {
        self.patterns.clone()
    }

    /// Applies every pattern in turn, moving accepted names from `unmatched`
    /// into `matched`, stopping early once `unmatched` is empty.
    pub fn match_files(&self, matched: &mut HashSet<String>, unmatched: &mut HashSet<String>) {
        for pattern in &self.patterns {
            pattern.match_files(matched, unmatched);
            if unmatched.is_empty() {
                break;
            }
        }
    }
}
