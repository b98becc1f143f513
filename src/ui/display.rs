//! Display functions for facts, entity sets and diagnoses

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use console::Style;

use crate::ayurveda::Diagnosis;
use crate::graph::{Entity, Fact, GraphStats};

/// "1 fact", "2 facts"
pub fn count_label(n: usize, singular: &str, plural: &str) -> String {
    format!("{n} {}", if n == 1 { singular } else { plural })
}

/// One styled fact line
pub fn fact_line(fact: &Fact) -> String {
    format!(
        "{} {} {} {} {}",
        Style::new().bold().apply_to(&fact.head),
        Style::new().dim().apply_to("--"),
        Style::new().cyan().apply_to(&fact.relation),
        Style::new().dim().apply_to("-->"),
        Style::new().bold().apply_to(&fact.tail),
    )
}

/// Print facts, one per line
pub fn display_facts<'a>(facts: impl IntoIterator<Item = &'a Fact>) {
    let facts: Vec<&Fact> = facts.into_iter().collect();
    if facts.is_empty() {
        println!("No matching facts.");
        return;
    }

    println!(
        "{}",
        Style::new()
            .bold()
            .apply_to(format!("Found {}:", count_label(facts.len(), "fact", "facts")))
    );
    for fact in facts {
        println!("  {}", fact_line(fact));
    }
}

/// Print a titled list of entities
pub fn display_entities(title: &str, entities: &BTreeSet<Entity>) {
    if entities.is_empty() {
        println!("{} {}", Style::new().bold().apply_to(title), Style::new().dim().apply_to("None"));
        return;
    }

    println!(
        "{} ({})",
        Style::new().bold().apply_to(title),
        entities.len()
    );
    for entity in entities {
        println!("  - {}", Style::new().yellow().apply_to(entity));
    }
}

/// One aligned "dosha  value" row; padding is applied before styling
fn score_line(dosha: &Entity, value: f64, precision: usize) -> String {
    let name = format!("{:<12}", dosha.name());
    format!("  {} {value:.precision$}", Style::new().yellow().apply_to(name))
}

fn display_scores(title: &str, scores: &BTreeMap<Entity, f64>, precision: usize) {
    println!("{}", Style::new().bold().apply_to(title));
    for (dosha, value) in scores {
        println!("{}", score_line(dosha, *value, precision));
    }
}

/// Print a diagnosis and the food suggested for it
pub fn display_diagnosis(diagnosis: &Diagnosis, food: &BTreeSet<Entity>, verbose: bool) {
    if diagnosis.scores.is_empty() {
        println!("No symptom hints at any dosha.");
        return;
    }

    if verbose {
        display_scores("Scores:", &diagnosis.scores, 1);
        println!();
    }

    if diagnosis.elevated.is_empty() {
        println!(
            "{}",
            Style::new().green().apply_to("No dosha stands out as elevated.")
        );
        return;
    }

    display_scores("Elevated doshas:", &diagnosis.elevated, 2);
    println!();
    display_entities("Suggested food:", food);
}

/// Print graph counts and the data fingerprint
pub fn display_stats(data_dir: &Path, stats: GraphStats, fingerprint: &str) {
    let label = |s: &str| Style::new().bold().apply_to(s.to_string());
    println!("{} {}", label("Data directory:"), data_dir.display());
    println!("{} {}", label("Entities:"), stats.entities);
    println!("{} {}", label("Relations:"), stats.relations);
    println!("{} {}", label("Facts:"), stats.facts);
    println!("{} {}", label("Fingerprint:"), Style::new().dim().apply_to(fingerprint));
}
