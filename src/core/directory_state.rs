//! Tracks, per directory visited during an enumeration, which patterns are
//! still live and how they partition into the directory's children.
//!
//! Each directory's state is derived from its parent's, not recomputed from
//! scratch, so a deep tree only pays for the patterns that are still
//! relevant by the time traversal reaches it.

use std::rc::Rc;

use crate::core::match_type::MatchType;
use crate::core::pattern::Pattern;
use crate::core::pattern_set::PatternSet;

/// Which of the two pattern lists (`include` or `exclude`) a [`DirectoryState`]
/// is tracking. Purely diagnostic; carried through so log messages can say
/// which list a pruning decision came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateLabel {
    Include,
    Exclude,
}

/// The classification of one pattern list against one directory.
///
/// A pattern starts in `unmatched` at the root and is reclassified at most
/// once, the first time a directory's path matches it: into
/// `matched_inherit` (matches here and every descendant), `matched_and_subdir`
/// (matches here and *some* descendants, re-tested going deeper), or
/// `matched_no_subdir` (matches here only). Patterns whose `match_directory`
/// comes back `NO_MATCH_NO_SUBDIRECTORIES` are dropped entirely: no
/// descendant of this directory can ever satisfy them.
pub struct DirectoryState {
    label: StateLabel,
    path_elements: Vec<String>,
    parent: Option<Rc<DirectoryState>>,
    matched_inherit: PatternSet,
    matched_and_subdir: PatternSet,
    matched_no_subdir: PatternSet,
    unmatched: PatternSet,
    parent_has_patterns: bool,
}

impl DirectoryState {
    /// Builds the root state: no parent, seeded directly from `seed_patterns`.
    pub fn root(label: StateLabel, seed_patterns: &PatternSet) -> Rc<DirectoryState> {
        Self::build(label, Vec::new(), None, Some(seed_patterns))
    }

    /// Builds the state for `path_elements` (components relative to the
    /// search root), descending from whichever ancestor of `previous`
    /// actually covers `path_elements` - not necessarily `previous` itself,
    /// since traversal can step from a deep directory back up into a
    /// sibling subtree.
    pub fn child(
        label: StateLabel,
        path_elements: Vec<String>,
        previous: &Rc<DirectoryState>,
    ) -> Rc<DirectoryState> {
        let parent = DirectoryState::find_parent(previous, &path_elements);
        Self::build(label, path_elements, Some(parent), None)
    }

    fn find_parent(state: &Rc<DirectoryState>, path_elements: &[String]) -> Rc<DirectoryState> {
        if state.path_elements.is_empty() {
            return Rc::clone(state);
        }
        let own_len = state.path_elements.len();
        if path_elements.len() >= own_len && state.path_elements == path_elements[..own_len] {
            return Rc::clone(state);
        }
        match &state.parent {
            Some(parent) => DirectoryState::find_parent(parent, path_elements),
            None => Rc::clone(state),
        }
    }

    fn build(
        label: StateLabel,
        path_elements: Vec<String>,
        parent: Option<Rc<DirectoryState>>,
        seed_patterns: Option<&PatternSet>,
    ) -> Rc<DirectoryState> {
        let mut unmatched = PatternSet::new();
        let mut matched_inherit = PatternSet::new();
        let parent_has_patterns;

        match &parent {
            Some(parent) => {
                unmatched.extend(&parent.matched_and_subdir);
                unmatched.extend(&parent.unmatched);
                // Once a pattern matches a directory and every descendant
                // unconditionally, it never needs reclassifying - just carry
                // it forward so file matching still sees it this deep.
                matched_inherit.extend(&parent.matched_inherit);
                parent_has_patterns =
                    parent.parent_has_patterns || !parent.matched_inherit.is_empty();
            }
            None => {
                parent_has_patterns = false;
                if let Some(seed) = seed_patterns {
                    unmatched.extend(seed);
                }
            }
        }

        let mut matched_and_subdir = PatternSet::new();
        let mut matched_no_subdir = PatternSet::new();
        let mut still_unmatched = PatternSet::new();

        for pattern in unmatched.snapshot() {
            let classification = classify(&pattern, &path_elements);
            match classification {
                Classification::Inherit => matched_inherit.append(pattern),
                Classification::AndSubdir => matched_and_subdir.append(pattern),
                Classification::NoSubdir => matched_no_subdir.append(pattern),
                Classification::Dead => {}
                Classification::StillUnmatched => still_unmatched.append(pattern),
            }
        }

        Rc::new(DirectoryState {
            label,
            path_elements,
            parent,
            matched_inherit,
            matched_and_subdir,
            matched_no_subdir,
            unmatched: still_unmatched,
            parent_has_patterns,
        })
    }

    pub fn label(&self) -> StateLabel {
        self.label
    }

    /// Classifies every name in `files` against every pattern this directory
    /// still has live (`matched_inherit` unconditionally matches everything;
    /// `matched_and_subdir` and `matched_no_subdir` are tried in order,
    /// stopping once every name is accounted for). `unmatched` never
    /// contributes here: its directory portion hasn't matched this
    /// directory at all, so its file matcher has nothing to say about these
    /// files either.
    pub fn match_files(&self, files: &std::collections::HashSet<String>) -> std::collections::HashSet<String> {
        if files.is_empty() || self.matched_inherit.all_files() {
            return files.clone();
        }

        let mut matched = std::collections::HashSet::new();
        let mut unmatched = files.clone();

        self.matched_inherit.match_files(&mut matched, &mut unmatched);
        if unmatched.is_empty() {
            return matched;
        }
        self.matched_and_subdir.match_files(&mut matched, &mut unmatched);
        if unmatched.is_empty() {
            return matched;
        }
        self.matched_no_subdir.match_files(&mut matched, &mut unmatched);

        matched
    }

    /// True iff every file in this directory, and every file in every
    /// descendant, is guaranteed to match - so the caller never needs to
    /// test another name against this pattern list again for this subtree.
    pub fn matches_all_files_all_subdirs(&self) -> bool {
        self.matched_inherit.all_files()
    }

    /// True iff no file anywhere under this directory can possibly match:
    /// nothing is still live (`unmatched`, `matched_and_subdir`,
    /// `matched_no_subdir` are all empty) and the same held for every
    /// ancestor, so there is nothing left that could start matching again
    /// deeper in the tree.
    pub fn no_possible_matches_in_subdirs(&self) -> bool {
        self.matched_inherit.is_empty()
            && self.matched_and_subdir.is_empty()
            && !self.parent_has_patterns
            && self.unmatched.is_empty()
    }
}

enum Classification {
    Inherit,
    AndSubdir,
    NoSubdir,
    Dead,
    StillUnmatched,
}

fn classify(pattern: &Pattern, path_elements: &[String]) -> Classification {
    let result = pattern.match_directory(path_elements);
    if result.is_match() {
        if result.is_all_subdirectories() {
            Classification::Inherit
        } else if result.is_no_subdirectories() {
            Classification::NoSubdir
        } else {
            Classification::AndSubdir
        }
    } else if result.is_no_subdirectories() {
        Classification::Dead
    } else {
        Classification::StillUnmatched
    }
}
