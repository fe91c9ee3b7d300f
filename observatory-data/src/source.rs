//! Capability-based access to dataset files on UTF-8 paths.

use std::io;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};

/// Open a dataset file for reading.
///
/// # Errors
/// Propagates the IO error when the file cannot be opened.
pub fn open_dataset(path: &Utf8Path) -> io::Result<std::fs::File> {
    fs_utf8::File::open_ambient(path, ambient_authority()).map(fs_utf8::File::into_std)
}

/// Report whether `path` exists and is a regular file.
///
/// # Errors
/// Returns the IO error raised while resolving the parent directory or
/// reading metadata, including `NotFound` for a missing file.
pub fn dataset_is_file(path: &Utf8Path) -> io::Result<bool> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other("dataset path should include a file name"))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.metadata(file_name).map(|meta| meta.is_file())
}
