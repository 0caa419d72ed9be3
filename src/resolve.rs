//! Target directory resolution
//!
//! Decides where a new note goes. In priority order:
//! - An explicit target (file → its parent, directory → itself)
//! - The first entry of the explorer selection
//! - The document open in the active editor, if it is a real file
//! - The first open workspace root
//!
//! A target that cannot be statted is an error. It never falls through to
//! the active document or the workspace.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use url::Url;

use crate::error::{Error, Result};

/// A document reference as reported by the editor host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentRef {
    /// Backed by a file on disk
    File(PathBuf),
    /// Some other scheme (untitled:, git:, vscode-remote:, ...) or a file
    /// URI on a host that has no local path
    Virtual(String),
}

impl DocumentRef {
    /// Classify a raw reference: plain path, file:// URI, or other URI.
    /// Single-letter schemes are Windows drive letters, not URIs.
    pub fn parse(raw: &str) -> Self {
        let url = match Url::parse(raw) {
            Ok(url) if url.scheme().len() > 1 => url,
            _ => return DocumentRef::File(PathBuf::from(raw)),
        };

        if url.scheme() != "file" {
            return DocumentRef::Virtual(raw.to_string());
        }

        match url.to_file_path() {
            Ok(path) => DocumentRef::File(path),
            Err(()) => DocumentRef::Virtual(raw.to_string()),
        }
    }

    /// The on-disk path, if any
    pub fn file_path(&self) -> Option<&Path> {
        match self {
            DocumentRef::File(path) => Some(path),
            DocumentRef::Virtual(_) => None,
        }
    }
}

/// Host session state consulted when no target is given
#[derive(Debug, Clone, Default)]
pub struct ResolveContext {
    /// Document in the active editor, if any
    pub active_document: Option<DocumentRef>,
    /// Open workspace roots, first one wins
    pub workspace_roots: Vec<PathBuf>,
}

impl ResolveContext {
    /// Create a new resolve context
    pub fn new(active_document: Option<&str>, workspace_roots: Vec<PathBuf>) -> Self {
        // Treat empty strings as None
        let active_document = active_document
            .filter(|s| !s.is_empty())
            .map(DocumentRef::parse);

        Self {
            active_document,
            workspace_roots,
        }
    }

    /// Directory in which a note for `target` should be created
    pub fn resolve_directory(&self, target: Option<&Path>) -> Result<PathBuf> {
        if let Some(target) = target {
            debug!("resolving from target {}", target.display());
            return directory_of(target);
        }

        match &self.active_document {
            Some(DocumentRef::File(path)) => {
                debug!("resolving from active document {}", path.display());
                return directory_of(path);
            }
            Some(DocumentRef::Virtual(raw)) => {
                info!("active document '{}' is not a local file, ignoring it", raw);
            }
            None => {}
        }

        match self.workspace_roots.first() {
            Some(root) => {
                debug!("resolving from workspace root {}", root.display());
                workspace_root(root)
            }
            None => Err(Error::NoWorkspace),
        }
    }
}

/// Explicit target first, then the first selected explorer entry
pub fn pick_target(target: Option<PathBuf>, selection: &[PathBuf]) -> Option<PathBuf> {
    target.or_else(|| selection.first().cloned())
}

/// The directory itself, or the parent of a file
fn directory_of(path: &Path) -> Result<PathBuf> {
    let metadata = fs::metadata(path).map_err(|source| metadata_error(path, source))?;

    let dir = if metadata.is_dir() {
        path
    } else {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    };

    absolute_dir(dir)
}

fn workspace_root(root: &Path) -> Result<PathBuf> {
    let metadata = fs::metadata(root).map_err(|source| metadata_error(root, source))?;
    if !metadata.is_dir() {
        return Err(metadata_error(
            root,
            io::Error::new(io::ErrorKind::InvalidInput, "workspace root is not a directory"),
        ));
    }
    absolute_dir(root)
}

/// Absolute form of `dir` as given; symlinks are kept, not followed
fn absolute_dir(dir: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(dir).map_err(|source| metadata_error(dir, source))?;
    Ok(dunce::simplified(&absolute).to_path_buf())
}

fn metadata_error(path: &Path, source: io::Error) -> Error {
    Error::MetadataQuery {
        path: path.to_path_buf(),
        source,
    }
}
