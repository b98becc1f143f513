//! Symptom collection
//!
//! The diagnosis flow asks two things of its user: which body position to
//! look at, and how strongly each shown symptom is present. [`DataCollector`]
//! is the seam between that flow and whatever answers it.

use inquire::validator::Validation;
use inquire::{CustomType, CustomUserError, Select};

use crate::error::Result;

/// Highest score offered by the interactive prompt
pub const MAX_RATING: f64 = 10.0;

/// Score recorded when a rating prompt is left with ESC
pub const SKIPPED_RATING: f64 = 0.0;

fn validate_rating(value: &f64) -> std::result::Result<Validation, CustomUserError> {
    if (0.0..=MAX_RATING).contains(value) {
        Ok(Validation::Valid)
    } else {
        Ok(Validation::Invalid(
            format!("Rating must be between 0 and {MAX_RATING}").into(),
        ))
    }
}

/// Source of answers for the diagnosis flow
pub trait DataCollector {
    /// Pick one of `items`, or `None` to skip
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<Option<String>>;

    /// Score every item, in order
    fn rate(&mut self, items: &[String]) -> Result<Vec<f64>>;
}

/// Terminal prompts via inquire
#[derive(Debug, Default)]
pub struct PromptCollector {
    /// Answer to give for the position question instead of prompting
    preset: Option<String>,
}

impl PromptCollector {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_preset_selection(mut self, selection: Option<String>) -> Self {
        self.preset = selection;
        self
    }
}

impl DataCollector for PromptCollector {
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<Option<String>> {
        if let Some(preset) = self.preset.take() {
            return Ok(Some(preset));
        }
        if items.is_empty() {
            return Ok(None);
        }

        let selection = Select::new(prompt, items.to_vec())
            .with_starting_cursor(0)
            .with_page_size(10)
            .with_help_message("↑↓ to move, ENTER to select, ESC to look at all symptoms")
            .prompt_skippable()?;

        Ok(selection)
    }

    fn rate(&mut self, items: &[String]) -> Result<Vec<f64>> {
        let mut scores = Vec::with_capacity(items.len());
        for item in items {
            let score = CustomType::<f64>::new(&format!("How strongly do you notice \"{item}\"?"))
                .with_default(SKIPPED_RATING)
                .with_help_message("0 = not at all, 10 = very strongly, ESC = 0")
                .with_error_message("Please type a number")
                .with_validator(validate_rating)
                .prompt_skippable()?;
            scores.push(score.unwrap_or(SKIPPED_RATING));
        }
        Ok(scores)
    }
}

/// Canned answers, for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedCollector {
    pub selection: Option<String>,
    pub ratings: std::collections::BTreeMap<String, f64>,
    /// Asked for a selection with these items
    pub offered: Vec<String>,
    /// Asked to rate these items
    pub rated: Vec<String>,
}

#[cfg(test)]
impl DataCollector for ScriptedCollector {
    fn select(&mut self, _prompt: &str, items: &[String]) -> Result<Option<String>> {
        self.offered = items.to_vec();
        Ok(self.selection.clone())
    }

    fn rate(&mut self, items: &[String]) -> Result<Vec<f64>> {
        self.rated.extend(items.iter().cloned());
        Ok(items
            .iter()
            .map(|item| self.ratings.get(item).copied().unwrap_or(0.0))
            .collect())
    }
}
