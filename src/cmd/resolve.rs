//! Show where a new note would go, without creating it

use std::path::Path;

use date_md::{plan_note, util, ResolveContext, Result, SystemClock};

pub fn run(ctx: &ResolveContext, target: Option<&Path>, json: bool) -> Result<()> {
    let note = plan_note(ctx, target, &SystemClock)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&note)?);
    } else {
        println!("Directory: {}", util::display_path(&note.directory));
        println!("File: {}", note.file_name);
    }

    Ok(())
}
