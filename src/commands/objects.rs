//! Objects command implementation

use crate::cli::{GlobalArgs, ObjectsArgs};
use crate::commands::helpers::Context;
use crate::error::Result;
use crate::ui::display;

/// Run objects command
pub fn run(global: &GlobalArgs, args: &ObjectsArgs) -> Result<()> {
    let ctx = Context::open(global)?;
    let objects = ctx.kg.objects(&args.category);
    display::display_entities(&format!("Objects of '{}':", args.category), &objects);
    Ok(())
}
