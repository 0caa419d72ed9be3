pub mod cli;
pub mod clock;
pub mod config;
pub mod constants;
pub mod create;
pub mod error;
pub mod naming;
pub mod present;
pub mod resolve;
pub mod util;

pub use cli::{Cli, Command};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use create::{create_note, plan_note, CreatedNote};
pub use error::{Error, Result};
pub use naming::unique_name;
pub use present::{EditorPresenter, FocusMode, Presenter};
pub use resolve::{pick_target, DocumentRef, ResolveContext};
