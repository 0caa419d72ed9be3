//! Collision-free note filenames
//!
//! Given a directory and a proposed name such as `20240115.md`, pick the
//! first name in the sequence `20240115.md`, `20240115_1.md`,
//! `20240115_2.md`, ... that is not taken. The check is not atomic; callers
//! that care should create the file with `create_new`.

use std::fs;
use std::io;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::SUFFIX_SEPARATOR;

/// Matches names produced by this tool: YYYYMMDD.md or YYYYMMDD_<n>.md
static DATED_NOTE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{8})(?:_([1-9]\d*))?\.md$").unwrap());

/// Split `name` into stem and extension (extension keeps its dot)
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(pos) if pos > 0 => name.split_at(pos),
        _ => (name, ""),
    }
}

/// First name derived from `base_name` that has no entry in `dir`
pub fn unique_name(dir: &Path, base_name: &str) -> String {
    let (stem, ext) = split_extension(base_name);
    let mut counter = 0u32;
    let mut candidate = base_name.to_string();

    while entry_exists(&dir.join(&candidate)) {
        counter += 1;
        candidate = format!("{}{}{}{}", stem, SUFFIX_SEPARATOR, counter, ext);
    }

    candidate
}

/// Any entry counts, including dangling symlinks
fn entry_exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Whether `name` looks like a note created by this tool
pub fn is_dated_note(name: &str) -> bool {
    DATED_NOTE_RE.is_match(name)
}

/// Sort key for a dated note: (date stem, suffix counter)
fn dated_note_key(name: &str) -> Option<(String, u64)> {
    let caps = DATED_NOTE_RE.captures(name)?;
    let date = caps.get(1)?.as_str().to_string();
    let counter = caps
        .get(2)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0);
    Some((date, counter))
}

/// Dated notes directly inside `dir`, oldest first
pub fn list_dated_notes(dir: &Path) -> io::Result<Vec<String>> {
    let mut notes: Vec<((String, u64), String)> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter_map(|name| dated_note_key(&name).map(|key| (key, name)))
        .collect();

    notes.sort();
    Ok(notes.into_iter().map(|(_, name)| name).collect())
}
