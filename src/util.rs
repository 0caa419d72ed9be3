//! Small helpers shared by the library and the binary

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Display a path with forward slashes (cross-platform standard)
/// Converts Windows backslashes to forward slashes for consistent output
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Split an OS path list (`:` on Unix, `;` on Windows), dropping empty entries
pub fn split_path_list(raw: &OsStr) -> Vec<PathBuf> {
    std::env::split_paths(raw)
        .filter(|p| !p.as_os_str().is_empty())
        .collect()
}

/// Split an editor command line such as `code --reuse-window` into program
/// and arguments. Double quotes group words; there is no escaping.
pub fn split_command(command: &str) -> Option<(String, Vec<String>)> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_word = false;

    for c in command.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_word = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_word {
                    words.push(std::mem::take(&mut current));
                    has_word = false;
                }
            }
            c => {
                current.push(c);
                has_word = true;
            }
        }
    }
    if has_word {
        words.push(current);
    }

    let mut words = words.into_iter();
    let program = words.next()?;
    Some((program, words.collect()))
}
