// tests/common.rs
use anyhow::Result;
use std::fs::{self, File};
use std::io::Write;
use tempfile::{tempdir, TempDir};

#[allow(dead_code)]
pub fn create_file_with_content(dir_path: &std::path::Path, file_name: &str, content: &str) -> Result<()> {
    let mut file = File::create(dir_path.join(file_name))?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

/// A small tree with a regular file, a backup-style default-exclude
/// candidate, a subdirectory, and (on Unix) a symlink to the subdirectory.
#[allow(dead_code)]
pub fn setup_test_directory() -> Result<TempDir> {
    let dir = tempdir()?;
    let base = dir.path();

    create_file_with_content(base, "keep.txt", "hello")?;
    create_file_with_content(base, "keep.txt~", "backup")?;
    fs::create_dir(base.join("sub"))?;
    create_file_with_content(&base.join("sub"), "nested.txt", "world")?;

    #[cfg(unix)]
    {
        std::os::unix::fs::symlink(base.join("sub"), base.join("sub_link"))?;
        std::os::unix::fs::symlink(base.join("keep.txt"), base.join("keep_link.txt"))?;
    }

    Ok(dir)
}
