use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::constants::ENV_ACTIVE_DOCUMENT;
use crate::present::FocusMode;

/// date-md - create today's markdown note where you are working
///
/// # Quick Reference
///
/// ```bash
/// date-md                          # Note in the active document's folder or first workspace
/// date-md new docs/                # Note inside docs/
/// date-md new docs/plan.md         # Note next to docs/plan.md
/// date-md resolve docs/            # Print where the note would go
/// date-md list docs/               # List dated notes in docs/
/// ```
///
/// Notes are named `YYYYMMDD.md`. If that name is taken the next free
/// `YYYYMMDD_1.md`, `YYYYMMDD_2.md`, ... is used.
///
/// ## Editor Integration
///
/// ```bash
/// date-md --selection a/ --selection b/   # Explorer selection; first entry is used
/// date-md --active file:///w/readme.md    # Document in the active editor
/// date-md --workspace /w1 --workspace /w2 # Open workspace roots
/// date-md --focus preserve                # Open in the background
/// date-md --no-open                       # Only create the file
/// ```
///
/// ## Environment Variables
///
/// - `DATE_MD_ACTIVE`: Active document (path or URI)
/// - `DATE_MD_WORKSPACES`: Workspace roots as an OS path list
/// - `DATE_MD_CONFIG`: Config file path
/// - `VISUAL` / `EDITOR`: Editor command when none is configured
/// - `RUST_LOG`: Log filter (e.g. `debug`)
///
#[derive(Parser, Debug)]
#[command(name = "date-md")]
#[command(version)]
#[command(about = "Create date-stamped markdown notes")]
pub struct Cli {
    /// Explorer selection (first entry is the target when none is given)
    #[arg(long, global = true, value_name = "PATH")]
    pub selection: Vec<PathBuf>,

    /// Document open in the active editor (path or URI)
    #[arg(long, global = true, env = ENV_ACTIVE_DOCUMENT, value_name = "DOC")]
    pub active: Option<String>,

    /// Open workspace root (repeatable; first one wins)
    #[arg(short = 'w', long = "workspace", global = true, value_name = "DIR")]
    pub workspaces: Vec<PathBuf>,

    /// Editor command used to open the note
    #[arg(short, long, global = true, value_name = "CMD")]
    pub editor: Option<String>,

    /// Take focus (wait for the editor) or preserve it (open in background)
    #[arg(long, global = true, value_enum)]
    pub focus: Option<FocusMode>,

    /// Create the note without opening it
    #[arg(short = 'n', long, global = true)]
    pub no_open: bool,

    /// Output in JSON format (for scripting)
    #[arg(short = 'j', long, global = true)]
    pub json: bool,

    /// Config file (default: ~/.config/date-md/config.yaml or $DATE_MD_CONFIG)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create today's note and open it (default)
    New {
        /// File or folder the note belongs to
        target: Option<PathBuf>,
    },

    /// Print the directory and filename a new note would get
    #[command(alias = "rv")]
    Resolve {
        /// File or folder the note belongs to
        target: Option<PathBuf>,
    },

    /// List dated notes in the resolved directory
    #[command(alias = "ls")]
    List {
        /// File or folder whose directory to list
        target: Option<PathBuf>,
    },
}

impl Cli {
    /// The subcommand, with a bare invocation meaning `new`
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::New { target: None })
    }
}
