//! Diagnose command implementation
//!
//! With `--symptom` the given ratings are used as-is. Otherwise the user is
//! prompted for a body position and a rating per shown symptom.

use console::Style;

use crate::ayurveda::{PromptCollector, Symptom};
use crate::cli::{DiagnoseArgs, GlobalArgs};
use crate::commands::helpers::Context;
use crate::error::Result;
use crate::ui::display;

/// Run diagnose command
pub fn run(global: &GlobalArgs, args: DiagnoseArgs) -> Result<()> {
    // Parse before loading so a typo fails fast
    let symptoms = args
        .symptoms
        .iter()
        .map(|s| s.parse::<Symptom>())
        .collect::<Result<Vec<_>>>()?;

    let mut session = Context::open(global)?.into_session();

    if symptoms.is_empty() {
        let mut collector = PromptCollector::new().with_preset_selection(args.position);
        let recorded = session.update_symptoms(&mut collector, &mut rand::rng())?;
        if recorded == 0 {
            println!("No symptoms to rate.");
            return Ok(());
        }
        println!();
    } else {
        for symptom in symptoms {
            session.add_symptom(symptom);
        }
    }

    if global.verbose {
        println!("{}", Style::new().bold().apply_to("Symptoms:"));
        for symptom in session.symptoms() {
            println!("  {:<24} {}", symptom.description, symptom.score);
        }
        println!();
    }

    session.diagnose()?;
    let food = session.suggest_food();
    display::display_diagnosis(session.diagnosis(), &food, global.verbose);

    Ok(())
}
