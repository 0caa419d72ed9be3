//! Note creation
//!
//! Control flow of one invocation: resolve the directory, name the note
//! after today's date, disambiguate, then create an empty file.

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Serialize;

use crate::clock::{self, Clock};
use crate::error::{Error, Result};
use crate::naming::unique_name;
use crate::resolve::ResolveContext;
use crate::util::display_path;

/// Where a note goes (or went)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedNote {
    /// Resolved directory
    pub directory: PathBuf,
    /// Filename inside `directory`
    pub file_name: String,
    /// Full path of the note
    pub path: PathBuf,
}

impl CreatedNote {
    /// Success message shown to the user
    pub fn notification(&self) -> String {
        format!("Created file: {}", self.file_name)
    }

    /// Forward-slash form of `path` for output
    pub fn display(&self) -> String {
        display_path(&self.path)
    }
}

/// Work out the note path without touching the filesystem
pub fn plan_note(
    ctx: &ResolveContext,
    target: Option<&Path>,
    clock: &dyn Clock,
) -> Result<CreatedNote> {
    let directory = ctx.resolve_directory(target)?;
    let base_name = clock::today(clock);
    let file_name = unique_name(&directory, &base_name);
    let path = directory.join(&file_name);

    debug!("planned {} in {}", file_name, directory.display());

    Ok(CreatedNote {
        directory,
        file_name,
        path,
    })
}

/// Create today's empty note for `target`
pub fn create_note(
    ctx: &ResolveContext,
    target: Option<&Path>,
    clock: &dyn Clock,
) -> Result<CreatedNote> {
    let note = plan_note(ctx, target, clock)?;
    create_empty_file(&note.path)?;
    info!("created {}", note.display());
    Ok(note)
}

/// Exclusive create: an entry that appeared since the name check is a
/// write error, not an overwrite
fn create_empty_file(path: &Path) -> Result<()> {
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map(|_| ())
        .map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })
}

/// Used by callers that want to know whether a failure came from the
/// filesystem race rather than permissions
pub fn is_name_taken(err: &Error) -> bool {
    matches!(err, Error::Write { source, .. } if source.kind() == io::ErrorKind::AlreadyExists)
}
