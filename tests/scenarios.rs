// tests/scenarios.rs
//
// Integration tests against `FileSet`, covering the lettered scenarios and
// quantified invariants exercised through the public API.

mod common;

use antglob::{AntGlobError, DirWalker, FileSet, FileSetOptions, ListWalker};
use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

fn matches(options: FileSetOptions) -> Vec<(PathBuf, String)> {
    let fileset = FileSet::new(options).unwrap();
    fileset.files().unwrap().into_iter().map(|r| r.unwrap()).collect()
}

/// Wraps a `DirWalker`, counting how many directories were visited.
struct CountingWalker {
    inner: Rc<dyn DirWalker>,
    visits: Rc<Cell<usize>>,
}

impl DirWalker for CountingWalker {
    fn walk(
        &self,
        root: &Path,
        visit: &mut dyn FnMut(&Path, &mut Vec<String>, &[String]) -> Result<(), AntGlobError>,
    ) -> Result<(), AntGlobError> {
        let visits = Rc::clone(&self.visits);
        self.inner.walk(root, &mut |dir, subdirs, files| {
            visits.set(visits.get() + 1);
            visit(dir, subdirs, files)
        })
    }
}

#[test]
fn scenario_a_default_excludes_drop_cvs() {
    let walker = Rc::new(ListWalker::from_paths([
        "CVS/error.py",
        "silly/silly1.txt",
        "1/2/3.py",
        "silly/silly3.txt",
        "1/2/4.py",
    ]));
    let options = FileSetOptions::new(vec!["*.py".to_string()])
        .directory(PathBuf::from("/root"))
        .walker(walker);

    let mut found = matches(options);
    found.sort();
    assert_eq!(
        found,
        vec![
            (PathBuf::from("1/2"), "3.py".to_string()),
            (PathBuf::from("1/2"), "4.py".to_string()),
        ]
    );
}

#[test]
fn scenario_b_trailing_slash_matches_directory_and_contents() {
    let walker = Rc::new(ListWalker::from_paths([
        "in/test/1.py",
        "in/a/b/test/2.py",
        "in/a/b/test",
        "out/a/3.py",
        "out/a/test.py",
    ]));
    let options = FileSetOptions::new(vec!["in/**/test/".to_string()])
        .default_excludes(false)
        .directory(PathBuf::from("/root"))
        .walker(walker);

    let mut found = matches(options);
    found.sort();
    assert_eq!(
        found,
        vec![
            (PathBuf::from("in/a/b"), "test".to_string()),
            (PathBuf::from("in/a/b/test"), "2.py".to_string()),
            (PathBuf::from("in/test"), "1.py".to_string()),
        ]
    );
}

#[test]
fn scenario_c_anchored_single_slot_visits_fewer_directories_than_wildcard_slot() {
    let tree = [
        "test/lower/lower.txt",
        "other/lower/lower.txt",
        "another/lower/lower.txt",
    ];

    let anchored_visits = Rc::new(Cell::new(0));
    let anchored_walker = Rc::new(CountingWalker {
        inner: Rc::new(ListWalker::from_paths(tree)),
        visits: Rc::clone(&anchored_visits),
    });
    let anchored = FileSetOptions::new(vec!["/test/lower/lower.txt".to_string()])
        .default_excludes(false)
        .directory(PathBuf::from("/root"))
        .walker(anchored_walker);
    let anchored_found = matches(anchored);
    assert_eq!(anchored_found.len(), 1);

    let wildcard_visits = Rc::new(Cell::new(0));
    let wildcard_walker = Rc::new(CountingWalker {
        inner: Rc::new(ListWalker::from_paths(tree)),
        visits: Rc::clone(&wildcard_visits),
    });
    let wildcard = FileSetOptions::new(vec!["/*/lower/lower.txt".to_string()])
        .default_excludes(false)
        .directory(PathBuf::from("/root"))
        .walker(wildcard_walker);
    let wildcard_found = matches(wildcard);
    assert!(!wildcard_found.is_empty());

    assert!(anchored_visits.get() < wildcard_visits.get());
}

#[test]
fn scenario_d_case_insensitive_exclude_subtracts_regardless_of_case() {
    let walker = Rc::new(ListWalker::from_paths(["lower.txt", "upper.txt"]));
    let options = FileSetOptions::new(vec!["*".to_string()])
        .exclude(vec!["LOWER.TXT".to_string()])
        .case_sensitive(false)
        .default_excludes(false)
        .directory(PathBuf::from("/root"))
        .walker(walker);

    let found = matches(options);
    assert_eq!(found, vec![(PathBuf::new(), "upper.txt".to_string())]);
}

#[test]
fn scenario_f_mixed_case_glob_matches_any_case_file_when_insensitive() {
    let walker = Rc::new(ListWalker::from_paths(["File.TXT"]));
    let options = FileSetOptions::new(vec!["file.txt".to_string()])
        .case_sensitive(false)
        .default_excludes(false)
        .directory(PathBuf::from("/root"))
        .walker(walker);

    let found = matches(options);
    assert_eq!(found, vec![(PathBuf::new(), "File.TXT".to_string())]);
}

#[test]
fn invariant_include_emptiness() {
    let err = FileSet::new(FileSetOptions::new(Vec::new())).unwrap_err();
    assert!(matches!(err, AntGlobError::EmptyIncludes));

    let walker = Rc::new(ListWalker::from_paths(["a.txt", "sub/b.txt"]));
    let options = FileSetOptions::new(vec!["*".to_string()])
        .default_excludes(false)
        .directory(PathBuf::from("/root"))
        .walker(walker);
    let found = matches(options);
    assert_eq!(found.len(), 2);
}

#[test]
fn invariant_reentrant_iteration_is_stable() {
    let walker = Rc::new(ListWalker::from_paths(["a.py", "sub/b.py", "sub/c.txt"]));
    let options = FileSetOptions::new(vec!["*.py".to_string()])
        .default_excludes(false)
        .directory(PathBuf::from("/root"))
        .walker(walker);

    let fileset = FileSet::new(options).unwrap();
    let first: Vec<_> = fileset.files().unwrap().into_iter().map(|r| r.unwrap()).collect();
    let second: Vec<_> = fileset.files().unwrap().into_iter().map(|r| r.unwrap()).collect();
    assert_eq!(first, second);
}

#[test]
fn real_filesystem_symlinks_are_skipped_when_disabled() {
    let dir = common::setup_test_directory().unwrap();

    let options = FileSetOptions::new(vec!["**/*".to_string()])
        .default_excludes(false)
        .symlinks(false)
        .directory(dir.path().to_path_buf());

    let found = matches(options);
    let names: Vec<String> = found.into_iter().map(|(_, name)| name).collect();

    assert!(names.contains(&"keep.txt".to_string()));
    assert!(names.contains(&"nested.txt".to_string()));

    if cfg!(unix) {
        assert!(!names.contains(&"keep_link.txt".to_string()));
    }
}

#[test]
fn invalid_glob_is_rejected_at_enumeration_time() {
    let options = FileSetOptions::new(vec!["a/../b".to_string()]);
    let fileset = FileSet::new(options).unwrap();
    let err = fileset.files().unwrap_err();
    assert!(matches!(err, AntGlobError::InvalidGlob { .. }));
}
