use std::path::Path;

use date_md::naming::list_dated_notes;
use date_md::{util, ResolveContext, Result};

pub fn run(ctx: &ResolveContext, target: Option<&Path>, json: bool) -> Result<()> {
    let dir = ctx.resolve_directory(target)?;
    let notes = list_dated_notes(&dir)?;

    if json {
        println!("{}", serde_json::to_string(&notes)?);
        return Ok(());
    }

    println!("Dated notes in {}:", util::display_path(&dir));
    if notes.is_empty() {
        println!("  (none)");
    } else {
        for note in notes {
            println!("  - {}", note);
        }
    }

    Ok(())
}
