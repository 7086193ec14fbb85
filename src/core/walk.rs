//! The injectable directory-walking contract `FileSet` drives, plus two
//! implementations: a real filesystem walker and an in-memory one for tests
//! that don't need an actual directory tree on disk.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::AntGlobError;

/// Visits one directory at a time, depth-first pre-order. `subdirs` is
/// yielded mutably: removing a name before returning from `visit` prunes
/// that subtree for the remainder of this walk.
pub trait DirWalker {
    fn walk(
        &self,
        root: &Path,
        visit: &mut dyn FnMut(&Path, &mut Vec<String>, &[String]) -> Result<(), AntGlobError>,
    ) -> Result<(), AntGlobError>;
}

/// Walks the real filesystem with `std::fs::read_dir`.
///
/// `follow_symlinks` implements the whole of the `symlinks` policy here,
/// rather than splitting it between the walker (descent) and `FileSet`
/// (per-file filtering): only a real filesystem walker can tell a symlink
/// from a regular entry, and an injected test walker has no filesystem to
/// ask, so `FileSet` itself stays walker-agnostic. When false, a symlinked
/// directory is excluded from `subdirs` (not descended into) and a
/// symlinked file is excluded from `files` (skipped) entirely.
pub struct FsWalker {
    follow_symlinks: bool,
}

impl FsWalker {
    pub fn new(follow_symlinks: bool) -> Self {
        FsWalker { follow_symlinks }
    }
}

impl DirWalker for FsWalker {
    fn walk(
        &self,
        root: &Path,
        visit: &mut dyn FnMut(&Path, &mut Vec<String>, &[String]) -> Result<(), AntGlobError>,
    ) -> Result<(), AntGlobError> {
        let mut stack = vec![root.to_path_buf()];

        while let Some(dir) = stack.pop() {
            let mut subdirs = Vec::new();
            let mut files = Vec::new();

            let entries = match fs::read_dir(&dir) {
                Ok(entries) => entries,
                Err(err) => return Err(AntGlobError::Io(err)),
            };

            for entry in entries {
                let entry = entry?;
                let name = entry.file_name().to_string_lossy().into_owned();
                let file_type = entry.file_type()?;

                if file_type.is_symlink() {
                    if !self.follow_symlinks {
                        continue;
                    }
                    match fs::metadata(entry.path()) {
                        Ok(target) if target.is_dir() => subdirs.push(name),
                        // A broken symlink still metadata-errors with
                        // follow_symlinks true; treat it as a file entry
                        // since there is nothing to descend into.
                        _ => files.push(name),
                    }
                } else if file_type.is_dir() {
                    subdirs.push(name);
                } else {
                    files.push(name);
                }
            }

            subdirs.sort();
            files.sort();

            visit(&dir, &mut subdirs, &files)?;

            for name in subdirs.into_iter().rev() {
                stack.push(dir.join(name));
            }
        }

        Ok(())
    }
}

#[derive(Default)]
struct ListNode {
    dirs: BTreeMap<String, ListNode>,
    files: Vec<String>,
}

/// An in-memory walker built from a flat list of relative file paths, for
/// tests that want fixed, deterministic directory contents without touching
/// a real filesystem.
pub struct ListWalker {
    root: ListNode,
}

impl ListWalker {
    pub fn from_paths<I, S>(paths: I) -> ListWalker
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut root = ListNode::default();
        for path in paths {
            let mut node = &mut root;
            let components: Vec<&str> = path.as_ref().split('/').filter(|c| !c.is_empty()).collect();
            if components.is_empty() {
                continue;
            }
            let (file_name, dirs) = components.split_last().expect("checked nonempty above");
            for dir in dirs {
                node = node.dirs.entry(dir.to_string()).or_default();
            }
            node.files.push(file_name.to_string());
        }
        ListWalker { root }
    }

    fn walk_node(
        &self,
        dir: &Path,
        node: &ListNode,
        visit: &mut dyn FnMut(&Path, &mut Vec<String>, &[String]) -> Result<(), AntGlobError>,
    ) -> Result<(), AntGlobError> {
        let mut subdirs: Vec<String> = node.dirs.keys().cloned().collect();
        let files = node.files.clone();

        visit(dir, &mut subdirs, &files)?;

        for name in subdirs {
            if let Some(child) = node.dirs.get(&name) {
                self.walk_node(&dir.join(&name), child, visit)?;
            }
        }
        Ok(())
    }
}

impl DirWalker for ListWalker {
    fn walk(
        &self,
        root: &Path,
        visit: &mut dyn FnMut(&Path, &mut Vec<String>, &[String]) -> Result<(), AntGlobError>,
    ) -> Result<(), AntGlobError> {
        self.walk_node(root, &self.root, visit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_walker_visits_every_directory() {
        let walker = ListWalker::from_paths(["a/b/c.txt", "a/d.txt", "e.txt"]);
        let mut visited = Vec::new();
        walker
            .walk(Path::new("/root"), &mut |dir, _subdirs, files| {
                visited.push((dir.to_path_buf(), files.to_vec()));
                Ok(())
            })
            .unwrap();

        assert_eq!(visited.len(), 3);
        assert_eq!(visited[0].0, Path::new("/root"));
        assert_eq!(visited[0].1, vec!["e.txt".to_string()]);
    }

    #[test]
    fn pruning_subdirs_stops_descent() {
        let walker = ListWalker::from_paths(["a/b/c.txt", "skip/d.txt"]);
        let mut visited_dirs = Vec::new();
        walker
            .walk(Path::new("/root"), &mut |dir, subdirs, _files| {
                visited_dirs.push(dir.to_path_buf());
                subdirs.retain(|name| name != "skip");
                Ok(())
            })
            .unwrap();

        assert!(!visited_dirs.iter().any(|d| d.ends_with("skip")));
    }

    #[test]
    fn fs_walker_reads_a_real_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), b"").unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("sub").join("b.txt"), b"").unwrap();

        let walker = FsWalker::new(false);
        let mut seen_files = Vec::new();
        walker
            .walk(dir.path(), &mut |_dir, _subdirs, files| {
                seen_files.extend(files.iter().cloned());
                Ok(())
            })
            .unwrap();

        seen_files.sort();
        assert_eq!(seen_files, vec!["a.txt".to_string(), "b.txt".to_string()]);
    }
}
