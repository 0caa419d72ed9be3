//! Create today's note and open it

use std::path::Path;

use date_md::{create_note, Presenter, ResolveContext, Result, SystemClock};
use log::info;

pub fn run(
    ctx: &ResolveContext,
    target: Option<&Path>,
    presenter: Option<&dyn Presenter>,
    json: bool,
) -> Result<()> {
    let note = create_note(ctx, target, &SystemClock)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&note)?);
    } else {
        println!("{}", note.notification());
        // Full path on its own line for shell pipelines
        println!("{}", note.display());
    }

    match presenter {
        Some(presenter) => presenter.present(&note.path)?,
        None => info!("not opening {}", note.display()),
    }

    Ok(())
}
