//! UTF-8 file access for catalog, feedback and report files.
//!
//! Paths are `camino` UTF-8 paths. Every operation resolves an ambient
//! directory for the path's parent through `cap-std` and then works relative
//! to that directory handle.
#![forbid(unsafe_code)]

use std::io::{self, Read, Write};
use std::path::Component;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};

/// Open an existing file for reading.
///
/// # Errors
/// Propagates the IO error from opening the file.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Read a whole UTF-8 text file.
///
/// # Errors
/// Returns an error when the file cannot be opened or is not valid UTF-8.
pub fn read_utf8_file(path: &Utf8Path) -> io::Result<String> {
    let mut contents = String::new();
    open_utf8_file(path)?.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Report whether `path` names an existing regular file.
///
/// # Errors
/// Returns `NotFound` when the path or its parent directory is missing.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = parent_dir_and_name(path)?;
    dir.metadata(name).map(|meta| meta.is_file())
}

/// Create (or truncate) `path` and write `contents`, creating missing
/// parent directories first.
///
/// # Errors
/// Propagates IO errors from directory creation, opening or writing.
pub fn write_utf8_file(path: &Utf8Path, contents: &str) -> io::Result<()> {
    ensure_parent_dir(path)?;
    let (dir, name) = parent_dir_and_name(path)?;
    let mut file = dir.create(name)?;
    file.write_all(contents.as_bytes())?;
    file.flush()
}

/// Create every missing directory above `path`.
///
/// # Errors
/// Propagates IO errors from opening the base directory or creating the
/// missing components.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_str().is_empty() {
        return Ok(());
    }
    let (base, relative) = split_base(parent)?;
    if relative.as_str().is_empty() {
        return Ok(());
    }
    base.create_dir_all(&relative)
}

fn parent_dir_and_name(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, &str)> {
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"))?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, name))
}

/// Split `parent` into an ambient directory for its root (or the current
/// directory when relative) and the remaining relative components.
fn split_base(parent: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let mut root = Utf8PathBuf::new();
    let mut relative = Utf8PathBuf::new();
    for component in parent.as_std_path().components() {
        match component {
            Component::Prefix(prefix) => {
                let prefix = prefix
                    .as_os_str()
                    .to_str()
                    .ok_or_else(|| io::Error::other("non-UTF-8 path prefix"))?;
                root.push(prefix);
            }
            Component::RootDir => root.push(std::path::MAIN_SEPARATOR_STR),
            other => {
                let part = other
                    .as_os_str()
                    .to_str()
                    .ok_or_else(|| io::Error::other("non-UTF-8 path component"))?;
                relative.push(part);
            }
        }
    }
    if root.as_str().is_empty() {
        root.push(".");
    }
    let dir = fs_utf8::Dir::open_ambient_dir(&root, ambient_authority())?;
    Ok((dir, relative))
}
