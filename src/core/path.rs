//! Splitting a starting directory into `(volume, components)` and back, and
//! deciding the effective case sensitivity for the current platform.

use std::path::{Path, PathBuf};

/// Splits `path` into an optional volume/drive prefix and an ordered list of
/// path components, dropping empty segments produced by repeated
/// separators.
pub fn split(path: &Path) -> (String, Vec<String>) {
    let path_str = path.to_string_lossy();
    let (volume, rest) = split_volume(&path_str);

    let components = rest
        .split(['/', '\\'])
        .filter(|c| !c.is_empty())
        .map(|c| c.to_string())
        .collect();

    (volume, components)
}

#[cfg(windows)]
fn split_volume(path: &str) -> (String, &str) {
    // UNC prefix, e.g. \\server\share\rest
    if let Some(rest) = path.strip_prefix(r"\\") {
        if let Some(idx) = rest.find(['/', '\\']) {
            if let Some(idx2) = rest[idx + 1..].find(['/', '\\']) {
                let end = idx + 1 + idx2;
                return (format!(r"\\{}", &rest[..end]), &rest[end..]);
            }
        }
        return (format!(r"\\{}", rest), "");
    }
    // Drive letter, e.g. C:\rest
    let bytes = path.as_bytes();
    if bytes.len() >= 2 && bytes[1] == b':' {
        let drive = &path[..2];
        return (drive.to_string(), &path[2..]);
    }
    (String::new(), path)
}

#[cfg(not(windows))]
fn split_volume(path: &str) -> (String, &str) {
    (String::new(), path)
}

/// Inverse of [`split`]. The result terminates with a path separator only
/// when it names the root directory.
pub fn join(volume: &str, components: &[String]) -> PathBuf {
    let sep = std::path::MAIN_SEPARATOR;
    if components.is_empty() {
        return PathBuf::from(format!("{volume}{sep}"));
    }
    let mut s = format!("{volume}{sep}");
    s.push_str(&components.join(&sep.to_string()));
    PathBuf::from(s)
}

/// True iff `components` (as returned by [`split`]) names the root directory.
pub fn is_root(components: &[String]) -> bool {
    components.is_empty()
}

/// `request` on POSIX-like systems; always `false` on Windows-like systems,
/// where the filesystem is case-insensitive regardless of what the caller
/// asked for.
pub fn effective_case_sensitive(request: bool) -> bool {
    if cfg!(windows) { false } else { request }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_posix_path() {
        let (volume, components) = split(Path::new("/a/b/c"));
        assert_eq!(volume, "");
        assert_eq!(components, vec!["a", "b", "c"]);
    }

    #[test]
    fn split_collapses_repeated_separators() {
        let (_, components) = split(Path::new("/a//b///c"));
        assert_eq!(components, vec!["a", "b", "c"]);
    }

    #[test]
    fn is_root_for_empty_components() {
        assert!(is_root(&[]));
        assert!(!is_root(&["a".to_string()]));
    }

    #[test]
    fn join_is_inverse_of_split() {
        let components = vec!["a".to_string(), "b".to_string()];
        let joined = join("", &components);
        let (_, back) = split(&joined);
        assert_eq!(back, components);
    }

    #[test]
    fn effective_case_sensitive_honors_request_on_posix() {
        if cfg!(not(windows)) {
            assert!(effective_case_sensitive(true));
            assert!(!effective_case_sensitive(false));
        }
    }
}
