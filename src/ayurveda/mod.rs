//! Dosha diagnosis on top of the knowledge graph
//!
//! The flow:
//!
//! 1. [`Ayurveda::update_symptoms`] asks a [`DataCollector`] to pick a body
//!    position and rate a sample of the symptoms filed under it (or under
//!    the whole diagnosis tree when no position is picked).
//! 2. [`Ayurveda::diagnose`] adds each symptom's score to every dosha the
//!    symptom hints at, then keeps the doshas whose smoothed share of the
//!    total stands out (see [`stats::anomalies`]).
//! 3. [`Ayurveda::suggest_food`] returns the food that pacifies every
//!    elevated dosha.

pub mod collector;
pub mod stats;

pub use collector::{DataCollector, PromptCollector};

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::str::FromStr;

use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::debug;

use crate::config::{Config, DiagnosisSettings, Vocabulary};
use crate::error::{AvkgError, Result};
use crate::graph::{Entity, FactPattern, KnowledgeGraph};
use crate::loader;
use crate::ui::SilentReporter;

/// Highest score a single symptom may carry.
///
/// Keeps per-dosha sums finite however many symptoms are recorded.
pub const MAX_SCORE: f64 = 1_000_000.0;

/// An observed symptom and how strongly it is present
#[derive(Debug, Clone, PartialEq)]
pub struct Symptom {
    pub description: String,
    pub score: f64,
    pub position: Option<String>,
}

impl Symptom {
    /// Create a symptom; the score must lie in `0..=MAX_SCORE`
    pub fn new(description: impl Into<String>, score: f64) -> Result<Self> {
        let description = description.into();
        if !(0.0..=MAX_SCORE).contains(&score) {
            return Err(AvkgError::InvalidScore {
                item: description,
                score,
            });
        }
        Ok(Self {
            description,
            score,
            position: None,
        })
    }

    #[must_use]
    pub fn at(mut self, position: Option<String>) -> Self {
        self.position = position;
        self
    }
}

impl FromStr for Symptom {
    type Err = AvkgError;

    /// Parse `"description=score"`
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || AvkgError::InvalidSymptom {
            input: s.to_string(),
        };

        let (description, score) = s.rsplit_once('=').ok_or_else(invalid)?;
        let description = description.trim();
        if description.is_empty() {
            return Err(invalid());
        }
        let score: f64 = score.trim().parse().map_err(|_| invalid())?;
        Symptom::new(description, score)
    }
}

/// Outcome of [`Ayurveda::diagnose`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnosis {
    /// Accumulated symptom score per dosha
    pub scores: BTreeMap<Entity, f64>,
    /// Elevated doshas with their smoothed share of the total score
    pub elevated: BTreeMap<Entity, f64>,
}

/// Diagnosis session over one knowledge graph
#[derive(Debug, Clone)]
pub struct Ayurveda {
    kg: KnowledgeGraph,
    settings: DiagnosisSettings,
    vocabulary: Vocabulary,
    symptoms: Vec<Symptom>,
    diagnosis: Diagnosis,
}

impl Ayurveda {
    /// Start a session over `kg`.
    ///
    /// Categories are walked with the graph's own subcategory relation;
    /// `vocabulary.subcategory` only matters when a graph is loaded for a
    /// session (see [`Ayurveda::load`]).
    pub fn new(kg: KnowledgeGraph, settings: DiagnosisSettings, vocabulary: Vocabulary) -> Self {
        Self {
            kg,
            settings,
            vocabulary,
            symptoms: Vec::new(),
            diagnosis: Diagnosis::default(),
        }
    }

    /// Build a session from an already loaded graph and a config
    pub fn from_config(kg: KnowledgeGraph, config: &Config) -> Self {
        Self::new(kg, config.diagnosis.clone(), config.vocabulary.clone())
    }

    /// Load the graph under `data_dir` and start a session
    pub fn load(data_dir: &Path, config: &Config) -> Result<Self> {
        let mut kg = KnowledgeGraph::with_subcategory_relation(config.vocabulary.subcategory.as_str());
        loader::load_dir_into(&mut kg, data_dir, &mut SilentReporter)?;
        Ok(Self::from_config(kg, config))
    }

    pub fn knowledge_graph(&self) -> &KnowledgeGraph {
        &self.kg
    }

    pub fn symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    pub fn clear_symptoms(&mut self) {
        self.symptoms.clear();
    }

    pub fn add_symptom(&mut self, symptom: Symptom) {
        self.symptoms.push(symptom);
    }

    /// Body positions: the direct subcategories of the diagnosis category
    pub fn positions(&self) -> Vec<String> {
        self.kg
            .subcategories(&self.vocabulary.diagnosis)
            .into_iter()
            .map(|position| position.name().to_string())
            .collect()
    }

    /// Symptoms filed under `category` (all symptoms when `None`)
    pub fn candidate_symptoms(&self, category: Option<&str>) -> Vec<String> {
        let category = category.unwrap_or(self.vocabulary.diagnosis.as_str());
        // A category with no entries is not a symptom of itself
        if self.kg.subcategories(category).is_empty() {
            return Vec::new();
        }
        self.kg
            .objects(category)
            .into_iter()
            .map(|e| e.name().to_string())
            .collect()
    }

    /// Run one collection round; returns how many symptoms were recorded
    pub fn update_symptoms<R>(&mut self, collector: &mut dyn DataCollector, rng: &mut R) -> Result<usize>
    where
        R: Rng + ?Sized,
    {
        let positions = self.positions();
        let position = if positions.is_empty() {
            None
        } else {
            collector.select("Where do you notice symptoms?", &positions)?
        };
        if let Some(position) = position
            .as_deref()
            .filter(|selected| !positions.iter().any(|p| p == selected))
        {
            return Err(AvkgError::UnknownPosition {
                position: position.to_string(),
                available: positions.join(", "),
            });
        }

        let candidates = self.candidate_symptoms(position.as_deref());
        let num_show = candidates.len().min(self.settings.max_symptoms);
        let shown: Vec<String> = candidates.choose_multiple(rng, num_show).cloned().collect();
        debug!(
            position = position.as_deref().unwrap_or("*"),
            candidates = candidates.len(),
            shown = shown.len(),
            "collecting symptom ratings"
        );
        if shown.is_empty() {
            return Ok(0);
        }

        let scores = collector.rate(&shown)?;
        if scores.len() != shown.len() {
            return Err(AvkgError::CollectorMismatch {
                expected: shown.len(),
                actual: scores.len(),
            });
        }

        let rated = shown
            .into_iter()
            .zip(scores)
            .map(|(description, score)| {
                Symptom::new(description, score).map(|s| s.at(position.clone()))
            })
            .collect::<Result<Vec<_>>>()?;

        let count = rated.len();
        self.symptoms.extend(rated);
        Ok(count)
    }

    /// Score doshas from the recorded symptoms and pick the elevated ones
    pub fn diagnose(&mut self) -> Result<&Diagnosis> {
        let mut scores: BTreeMap<Entity, f64> = BTreeMap::new();
        for symptom in &self.symptoms {
            let pattern = FactPattern::new()
                .head(symptom.description.as_str())
                .relation(self.vocabulary.hints_for_elevation.as_str());
            for fact in self.kg.fuzzy_search(&pattern) {
                *scores.entry(fact.tail.clone()).or_default() += symptom.score;
            }
        }

        let elevated = stats::anomalies(&scores, self.settings.anomaly_threshold)?;
        debug!(
            symptoms = self.symptoms.len(),
            doshas = scores.len(),
            elevated = elevated.len(),
            "diagnosed"
        );

        self.diagnosis = Diagnosis { scores, elevated };
        Ok(&self.diagnosis)
    }

    pub fn diagnosis(&self) -> &Diagnosis {
        &self.diagnosis
    }

    pub fn elevated_doshas(&self) -> BTreeSet<Entity> {
        self.diagnosis.elevated.keys().cloned().collect()
    }

    /// Food pacifying every elevated dosha; empty when nothing is elevated
    pub fn suggest_food(&self) -> BTreeSet<Entity> {
        let doshas: Vec<&str> = self.diagnosis.elevated.keys().map(Entity::name).collect();
        self.food_for_doshas(&doshas)
    }

    /// Food pacifying every one of `doshas`; empty when `doshas` is empty
    pub fn food_for_doshas(&self, doshas: &[&str]) -> BTreeSet<Entity> {
        stats::intersect(doshas.iter().map(|dosha| self.food_for_dosha(dosha)))
    }

    /// Items of the food category that pacify `dosha`
    pub fn food_for_dosha(&self, dosha: &str) -> BTreeSet<Entity> {
        let all_food = self.kg.objects(&self.vocabulary.food);
        let pattern = FactPattern::new()
            .relation(self.vocabulary.pacifies.as_str())
            .tail(dosha);
        self.kg
            .fuzzy_search(&pattern)
            .into_iter()
            .filter(|fact| all_food.contains(&fact.head))
            .map(|fact| fact.head.clone())
            .collect()
    }
}

#[cfg(test)]
pub(crate) fn sample_session() -> Ayurveda {
    use crate::graph::{Fact, SUBCATEGORY_RELATION};

    let kg: KnowledgeGraph = [
        // diagnosis tree
        Fact::new("skin", SUBCATEGORY_RELATION, "diagnosis"),
        Fact::new("tongue", SUBCATEGORY_RELATION, "diagnosis"),
        Fact::new("dry skin", SUBCATEGORY_RELATION, "skin"),
        Fact::new("oily skin", SUBCATEGORY_RELATION, "skin"),
        Fact::new("coated tongue", SUBCATEGORY_RELATION, "tongue"),
        Fact::new("dry skin", "hints for elevation", "vata"),
        Fact::new("oily skin", "hints for elevation", "kapha"),
        Fact::new("oily skin", "hints for elevation", "pitta"),
        Fact::new("coated tongue", "hints for elevation", "kapha"),
        // food tree
        Fact::new("dairy", SUBCATEGORY_RELATION, "food"),
        Fact::new("grain", SUBCATEGORY_RELATION, "food"),
        Fact::new("ghee", SUBCATEGORY_RELATION, "dairy"),
        Fact::new("milk", SUBCATEGORY_RELATION, "dairy"),
        Fact::new("barley", SUBCATEGORY_RELATION, "grain"),
        Fact::new("ghee", "pacifies", "vata"),
        Fact::new("ghee", "pacifies", "pitta"),
        Fact::new("milk", "pacifies", "vata"),
        Fact::new("barley", "pacifies", "kapha"),
        Fact::new("barley", "pacifies", "pitta"),
        // not food, must never be suggested
        Fact::new("massage", "pacifies", "vata"),
    ]
    .into_iter()
    .collect();

    Ayurveda::new(kg, DiagnosisSettings::default(), Vocabulary::default())
}

#[cfg(test)]
mod tests {
    use super::collector::ScriptedCollector;
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn names(set: &BTreeSet<Entity>) -> Vec<&str> {
        set.iter().map(Entity::name).collect()
    }

    #[test]
    fn test_symptom_from_str() {
        let symptom: Symptom = "dry skin = 7.5".parse().unwrap();
        assert_eq!(symptom.description, "dry skin");
        assert_eq!(symptom.score, 7.5);
        assert_eq!(symptom.position, None);
    }

    #[test]
    fn test_symptom_from_str_keeps_equals_in_description() {
        let symptom: Symptom = "a=b=2".parse().unwrap();
        assert_eq!(symptom.description, "a=b");
    }

    #[test]
    fn test_symptom_from_str_rejects_bad_input() {
        assert!(matches!(
            "dry skin".parse::<Symptom>(),
            Err(AvkgError::InvalidSymptom { .. })
        ));
        assert!(matches!(
            "=3".parse::<Symptom>(),
            Err(AvkgError::InvalidSymptom { .. })
        ));
        assert!(matches!(
            "dry skin=lots".parse::<Symptom>(),
            Err(AvkgError::InvalidSymptom { .. })
        ));
        assert!(matches!(
            "dry skin=-2".parse::<Symptom>(),
            Err(AvkgError::InvalidScore { .. })
        ));
    }

    #[test]
    fn test_symptom_score_bounds() {
        assert!(Symptom::new("dry skin", MAX_SCORE).is_ok());
        assert!(matches!(
            Symptom::new("dry skin", 1e308),
            Err(AvkgError::InvalidScore { .. })
        ));
        assert!(matches!(
            Symptom::new("dry skin", f64::NAN),
            Err(AvkgError::InvalidScore { .. })
        ));
        match "bloating=1e308".parse::<Symptom>() {
            Err(AvkgError::InvalidScore { item, .. }) => assert_eq!(item, "bloating"),
            other => panic!("Expected InvalidScore, got {other:?}"),
        }
    }

    #[test]
    fn test_positions() {
        let session = sample_session();
        assert_eq!(session.positions(), vec!["skin", "tongue"]);
    }

    #[test]
    fn test_positions_follow_graph_relation() {
        use crate::graph::Fact;

        let mut kg = KnowledgeGraph::with_subcategory_relation("kind of");
        kg.add(Fact::new("skin", "kind of", "diagnosis"));
        kg.add(Fact::new("dry skin", "kind of", "skin"));
        kg.add(Fact::new("dry skin", "hints for elevation", "vata"));
        let session = Ayurveda::new(kg, DiagnosisSettings::default(), Vocabulary::default());

        assert_eq!(session.positions(), vec!["skin"]);
        assert_eq!(session.candidate_symptoms(Some("skin")), vec!["dry skin"]);
    }

    #[test]
    fn test_candidate_symptoms() {
        let session = sample_session();
        assert_eq!(
            session.candidate_symptoms(Some("skin")),
            vec!["dry skin", "oily skin"]
        );
        assert_eq!(session.candidate_symptoms(None).len(), 3);
        assert!(session.candidate_symptoms(Some("elbow")).is_empty());
    }

    #[test]
    fn test_update_symptoms_with_position() {
        let mut session = sample_session();
        let mut collector = ScriptedCollector {
            selection: Some("skin".to_string()),
            ratings: [("dry skin".to_string(), 8.0)].into(),
            ..ScriptedCollector::default()
        };
        let mut rng = StdRng::seed_from_u64(7);

        let count = session.update_symptoms(&mut collector, &mut rng).unwrap();

        assert_eq!(count, 2);
        assert_eq!(collector.offered, vec!["skin", "tongue"]);
        let mut rated = collector.rated.clone();
        rated.sort();
        assert_eq!(rated, vec!["dry skin", "oily skin"]);
        assert!(
            session
                .symptoms()
                .iter()
                .all(|s| s.position.as_deref() == Some("skin"))
        );
    }

    #[test]
    fn test_update_symptoms_unknown_position() {
        let mut session = sample_session();
        let mut collector = ScriptedCollector {
            selection: Some("elbow".to_string()),
            ..ScriptedCollector::default()
        };
        let mut rng = StdRng::seed_from_u64(7);

        match session.update_symptoms(&mut collector, &mut rng) {
            Err(AvkgError::UnknownPosition {
                position,
                available,
            }) => {
                assert_eq!(position, "elbow");
                assert_eq!(available, "skin, tongue");
            }
            other => panic!("Expected UnknownPosition, got {other:?}"),
        }
        assert!(collector.rated.is_empty());
        assert!(session.symptoms().is_empty());
    }

    #[test]
    fn test_update_symptoms_skipped_position_uses_all() {
        let mut session = sample_session();
        let mut collector = ScriptedCollector::default();
        let mut rng = StdRng::seed_from_u64(7);

        let count = session.update_symptoms(&mut collector, &mut rng).unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn test_update_symptoms_respects_max_symptoms() {
        let mut session = sample_session();
        session.settings.max_symptoms = 2;
        let mut collector = ScriptedCollector::default();
        let mut rng = StdRng::seed_from_u64(11);

        let count = session.update_symptoms(&mut collector, &mut rng).unwrap();

        assert_eq!(count, 2);
        let mut rated = collector.rated.clone();
        rated.dedup();
        assert_eq!(rated.len(), 2);
    }

    #[test]
    fn test_update_symptoms_rejects_mismatched_scores() {
        struct ShortCollector;
        impl DataCollector for ShortCollector {
            fn select(&mut self, _prompt: &str, _items: &[String]) -> Result<Option<String>> {
                Ok(None)
            }
            fn rate(&mut self, _items: &[String]) -> Result<Vec<f64>> {
                Ok(vec![1.0])
            }
        }

        let mut session = sample_session();
        let mut rng = StdRng::seed_from_u64(1);
        let result = session.update_symptoms(&mut ShortCollector, &mut rng);
        assert!(matches!(
            result,
            Err(AvkgError::CollectorMismatch {
                expected: 3,
                actual: 1
            })
        ));
        assert!(session.symptoms().is_empty());
    }

    #[test]
    fn test_clear_symptoms() {
        let mut session = sample_session();
        session.add_symptom(Symptom::new("dry skin", 4.0).unwrap());
        session.clear_symptoms();
        assert!(session.symptoms().is_empty());
    }

    #[test]
    fn test_diagnose_single_dosha() {
        let mut session = sample_session();
        session.add_symptom(Symptom::new("dry skin", 6.0).unwrap());

        let diagnosis = session.diagnose().unwrap();

        assert_eq!(diagnosis.scores.len(), 1);
        assert!((diagnosis.elevated[&Entity::new("vata")] - 1.0).abs() < 1e-12);
        assert_eq!(names(&session.elevated_doshas()), vec!["vata"]);
    }

    #[test]
    fn test_diagnose_accumulates_scores() {
        let mut session = sample_session();
        session.add_symptom(Symptom::new("oily skin", 3.0).unwrap());
        session.add_symptom(Symptom::new("coated tongue", 5.0).unwrap());
        session.add_symptom(Symptom::new("dry skin", 0.0).unwrap());

        let diagnosis = session.diagnose().unwrap();

        assert_eq!(diagnosis.scores[&Entity::new("kapha")], 8.0);
        assert_eq!(diagnosis.scores[&Entity::new("pitta")], 3.0);
        assert_eq!(diagnosis.scores[&Entity::new("vata")], 0.0);
        // kapha: 8.1 / (8.1 + 3.1 + 0.1)
        assert_eq!(names(&session.elevated_doshas()), vec!["kapha"]);
    }

    #[test]
    fn test_diagnose_largest_scores_stay_finite() {
        let mut session = sample_session();
        session.add_symptom(Symptom::new("dry skin", MAX_SCORE).unwrap());
        session.add_symptom(Symptom::new("dry skin", MAX_SCORE).unwrap());
        session.add_symptom(Symptom::new("coated tongue", 1.0).unwrap());

        let diagnosis = session.diagnose().unwrap();

        assert!(diagnosis.scores.values().all(|s| s.is_finite()));
        assert_eq!(names(&session.elevated_doshas()), vec!["vata"]);
    }

    #[test]
    fn test_diagnose_without_symptoms() {
        let mut session = sample_session();
        assert!(session.diagnose().unwrap().elevated.is_empty());
        assert!(session.suggest_food().is_empty());
    }

    #[test]
    fn test_diagnose_unknown_symptom_scores_nothing() {
        let mut session = sample_session();
        session.add_symptom(Symptom::new("itchy elbow", 9.0).unwrap());
        assert!(session.diagnose().unwrap().scores.is_empty());
    }

    #[test]
    fn test_food_for_dosha_only_returns_food() {
        let session = sample_session();
        assert_eq!(names(&session.food_for_dosha("vata")), vec!["ghee", "milk"]);
    }

    #[test]
    fn test_food_for_doshas_intersects() {
        let session = sample_session();
        assert_eq!(names(&session.food_for_doshas(&["vata", "pitta"])), vec!["ghee"]);
        assert_eq!(names(&session.food_for_doshas(&["kapha", "pitta"])), vec!["barley"]);
        assert!(session.food_for_doshas(&["vata", "kapha"]).is_empty());
        assert!(session.food_for_doshas(&[]).is_empty());
    }

    #[test]
    fn test_suggest_food_after_diagnosis() {
        let mut session = sample_session();
        session.add_symptom(Symptom::new("dry skin", 9.0).unwrap());
        session.diagnose().unwrap();

        assert_eq!(names(&session.suggest_food()), vec!["ghee", "milk"]);
    }

    #[test]
    fn test_load_from_data_dir() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("diagnosis")).unwrap();
        std::fs::write(
            temp.path().join("diagnosis/skin.json"),
            r#"{ "dry skin": { "hints for elevation": "vata" } }"#,
        )
        .unwrap();

        let session = Ayurveda::load(temp.path(), &Config::default()).unwrap();
        assert_eq!(session.positions(), vec!["skin"]);
    }
}
