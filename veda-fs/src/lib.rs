//! Filesystem helpers for reading reference-data sources, built on `cap-std`
//! and `camino`.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use std::io;

/// What a configured source path points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceProbe {
    /// A regular file that can be handed to a loader.
    File,
    /// Something other than a regular file, such as a directory.
    NotAFile,
    /// Nothing exists at the path.
    Missing,
}

/// Open a UTF-8 file path for reading using ambient authority.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Classify `path` without opening it.
///
/// A missing parent directory reports [`SourceProbe::Missing`]; other I/O
/// failures (for example permission errors) are returned unchanged.
pub fn probe_source(path: &Utf8Path) -> io::Result<SourceProbe> {
    let (dir, name) = match open_parent_and_name(path) {
        Ok(found) => found,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(SourceProbe::Missing),
        Err(err) => return Err(err),
    };
    match dir.metadata(name) {
        Ok(meta) if meta.is_file() => Ok(SourceProbe::File),
        Ok(_) => Ok(SourceProbe::NotAFile),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(SourceProbe::Missing),
        Err(err) => Err(err),
    }
}

fn open_parent_and_name(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, &str)> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("{path} does not name a file")))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, name))
}
