//! Handing the new note to an editor

use std::path::Path;
use std::process::{Command, Stdio};

use clap::ValueEnum;
use log::{debug, info};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::util::split_command;

/// Whether opening the note takes focus away from the caller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusMode {
    /// Run the editor in the foreground and wait for it (default)
    #[default]
    Take,
    /// Launch the editor in the background and return immediately
    Preserve,
}

/// Shows a freshly created note to the user
pub trait Presenter {
    fn present(&self, path: &Path) -> Result<()>;
}

/// Opens notes with an external editor command
#[derive(Debug, Clone)]
pub struct EditorPresenter {
    /// Editor command line, e.g. `vim` or `code --reuse-window`
    pub command: String,
    pub focus: FocusMode,
}

impl EditorPresenter {
    pub fn new(command: impl Into<String>, focus: FocusMode) -> Self {
        Self {
            command: command.into(),
            focus,
        }
    }

    /// First non-empty of: explicit command, $VISUAL, $EDITOR
    pub fn from_env(explicit: Option<&str>, focus: FocusMode) -> Option<Self> {
        explicit
            .map(str::to_string)
            .or_else(|| std::env::var("VISUAL").ok())
            .or_else(|| std::env::var("EDITOR").ok())
            .filter(|s| !s.trim().is_empty())
            .map(|command| Self::new(command, focus))
    }

    fn build(&self, path: &Path) -> Result<Command> {
        let (program, args) = split_command(&self.command).ok_or_else(|| Error::Editor {
            command: self.command.clone(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty editor command"),
        })?;

        let mut cmd = Command::new(program);
        cmd.args(args).arg(path);
        Ok(cmd)
    }

    fn launch_error(&self, source: std::io::Error) -> Error {
        Error::Editor {
            command: self.command.clone(),
            source,
        }
    }
}

impl Presenter for EditorPresenter {
    fn present(&self, path: &Path) -> Result<()> {
        let mut cmd = self.build(path)?;
        debug!("opening {} with '{}' ({:?})", path.display(), self.command, self.focus);

        match self.focus {
            FocusMode::Take => {
                let status = cmd
                    .stdin(Stdio::inherit())
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::inherit())
                    .status()
                    .map_err(|e| self.launch_error(e))?;
                if !status.success() {
                    return Err(Error::EditorStatus {
                        command: self.command.clone(),
                        code: status.code().unwrap_or(-1),
                    });
                }
            }
            FocusMode::Preserve => {
                let child = cmd
                    .stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .spawn()
                    .map_err(|e| self.launch_error(e))?;
                info!("editor running in background (pid {})", child.id());
            }
        }

        Ok(())
    }
}
