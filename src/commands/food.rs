//! Food command implementation

use crate::cli::{FoodArgs, GlobalArgs};
use crate::commands::helpers::Context;
use crate::error::Result;
use crate::ui::display;

/// Run food command
pub fn run(global: &GlobalArgs, args: &FoodArgs) -> Result<()> {
    let session = Context::open(global)?.into_session();
    let doshas: Vec<&str> = args.doshas.iter().map(String::as_str).collect();
    let food = session.food_for_doshas(&doshas);
    display::display_entities(&format!("Food pacifying {}:", doshas.join(" + ")), &food);
    Ok(())
}
