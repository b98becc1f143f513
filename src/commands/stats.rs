//! Stats command implementation

use crate::cli::GlobalArgs;
use crate::commands::helpers::Context;
use crate::error::Result;
use crate::loader;
use crate::ui::display;

/// Run stats command
pub fn run(global: &GlobalArgs) -> Result<()> {
    let ctx = Context::open(global)?;
    let fingerprint = loader::fingerprint(&ctx.data_dir)?;
    display::display_stats(&ctx.data_dir, ctx.kg.stats(), &fingerprint);
    Ok(())
}
