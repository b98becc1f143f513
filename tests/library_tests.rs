//! Library-level tests against the bundled fixture data

mod common;

use std::collections::BTreeSet;

use avkg::ayurveda::{Ayurveda, Symptom};
use avkg::config::Config;
use avkg::graph::{Entity, Fact, FactPattern};
use avkg::loader;
use common::{TestDataDir, fixture_data_dir};

fn names(entities: &BTreeSet<Entity>) -> Vec<&str> {
    entities.iter().map(Entity::name).collect()
}

#[test]
fn test_fixture_loads_hierarchy() {
    let kg = loader::load_dir(&fixture_data_dir()).unwrap();

    assert!(kg.contains(&Fact::new("dairy", "is of", "food")));
    assert!(kg.contains(&Fact::new("spice", "is of", "food")));
    assert!(kg.contains(&Fact::new("warming", "is of", "spice")));
    assert!(kg.contains(&Fact::new("ginger", "is of", "warming")));
    assert!(kg.contains(&Fact::new("oats", "pacifies", "vata")));

    assert_eq!(
        names(&kg.objects("food")),
        vec!["barley", "black pepper", "ghee", "ginger", "milk", "oats", "rice", "yogurt"]
    );
    assert_eq!(names(&kg.objects("spice")), vec!["black pepper", "ginger"]);
}

#[test]
fn test_exact_and_fuzzy_search_agree() {
    let kg = loader::load_dir(&fixture_data_dir()).unwrap();
    let pattern = FactPattern::new().relation("pacifies").tail("kapha");

    let exact = kg.exact_search(&pattern);
    assert_eq!(exact, kg.fuzzy_search(&pattern));

    let heads: Vec<&str> = exact.iter().map(|f| f.head.name()).collect();
    assert_eq!(heads, vec!["barley", "black pepper", "ginger"]);
}

#[test]
fn test_session_positions_and_food() {
    let session = Ayurveda::load(&fixture_data_dir(), &Config::default()).unwrap();

    assert_eq!(session.positions(), vec!["digestion", "skin"]);
    assert_eq!(
        names(&session.food_for_doshas(&["vata", "pitta"])),
        vec!["ghee", "milk", "rice"]
    );
    assert!(session.food_for_doshas(&[]).is_empty());
}

#[test]
fn test_session_diagnosis_suggests_food() {
    let mut session = Ayurveda::load(&fixture_data_dir(), &Config::default()).unwrap();
    session.add_symptom("heartburn=9".parse::<Symptom>().unwrap());
    session.add_symptom("rashes=7".parse::<Symptom>().unwrap());
    session.add_symptom(Symptom::new("bloating", 1.0).unwrap());

    let diagnosis = session.diagnose().unwrap();
    assert_eq!(diagnosis.scores.len(), 2);
    assert!(diagnosis.elevated.contains_key(&Entity::new("pitta")));
    assert!(!diagnosis.elevated.contains_key(&Entity::new("vata")));

    assert_eq!(
        names(&session.suggest_food()),
        vec!["barley", "ghee", "milk", "rice"]
    );

    session.clear_symptoms();
    session.diagnose().unwrap();
    assert!(session.elevated_doshas().is_empty());
    assert!(session.suggest_food().is_empty());
}

#[test]
fn test_configured_vocabulary_narrows_food() {
    let config = Config::from_yaml("vocabulary:\n  food: dairy\n").unwrap();
    let session = Ayurveda::load(&fixture_data_dir(), &config).unwrap();

    assert_eq!(names(&session.food_for_dosha("vata")), vec!["ghee", "milk", "yogurt"]);
}

#[test]
fn test_fingerprint_tracks_data_changes() {
    let data = TestDataDir::from_fixture();
    let before = loader::fingerprint(&data.path).unwrap();
    assert_eq!(before, loader::fingerprint(&fixture_data_dir()).unwrap());

    data.write_file("avkg.yaml", "diagnosis:\n  max_symptoms: 3\n");
    assert_eq!(loader::fingerprint(&data.path).unwrap(), before);

    data.write_file("food/fruit.json", r#"{ "mango": { "pacifies": "vata" } }"#);
    let after = loader::fingerprint(&data.path).unwrap();
    assert_ne!(after, before);
    assert!(after.starts_with("blake3:"));
}
