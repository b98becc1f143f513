//! Configuration (avkg.yaml) data structures
//!
//! Every field is optional in the file; missing fields take their defaults.
//!
//! ```yaml
//! data_dir: ./data
//! diagnosis:
//!   max_symptoms: 10
//!   anomaly_threshold: 0.4
//! vocabulary:
//!   subcategory: is of
//!   hints_for_elevation: hints for elevation
//!   pacifies: pacifies
//!   diagnosis: diagnosis
//!   food: food
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{AvkgError, Result};
use crate::graph::SUBCATEGORY_RELATION;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Data directory; relative paths are resolved against the config file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    pub diagnosis: DiagnosisSettings,

    pub vocabulary: Vocabulary,
}

/// Tuning for the diagnosis flow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosisSettings {
    /// How many symptoms one rating round shows at most
    pub max_symptoms: usize,

    /// Probability above which a dosha counts as elevated
    pub anomaly_threshold: f64,
}

impl Default for DiagnosisSettings {
    fn default() -> Self {
        Self {
            max_symptoms: 10,
            anomaly_threshold: 0.4,
        }
    }
}

/// Names of the entities and relations the diagnosis flow relies on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    pub subcategory: String,
    pub hints_for_elevation: String,
    pub pacifies: String,
    pub diagnosis: String,
    pub food: String,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            subcategory: SUBCATEGORY_RELATION.to_string(),
            hints_for_elevation: "hints for elevation".to_string(),
            pacifies: "pacifies".to_string(),
            diagnosis: "diagnosis".to_string(),
            food: "food".to_string(),
        }
    }
}

impl Config {
    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file is a valid, all-defaults config
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.diagnosis.max_symptoms == 0 {
            return Err(AvkgError::ConfigInvalid {
                message: "diagnosis.max_symptoms must be at least 1".to_string(),
            });
        }

        let threshold = self.diagnosis.anomaly_threshold;
        if !(0.0..1.0).contains(&threshold) {
            return Err(AvkgError::ConfigInvalid {
                message: format!(
                    "diagnosis.anomaly_threshold must be in [0, 1), got {threshold}"
                ),
            });
        }

        let v = &self.vocabulary;
        for (field, value) in [
            ("subcategory", &v.subcategory),
            ("hints_for_elevation", &v.hints_for_elevation),
            ("pacifies", &v.pacifies),
            ("diagnosis", &v.diagnosis),
            ("food", &v.food),
        ] {
            if value.trim().is_empty() {
                return Err(AvkgError::ConfigInvalid {
                    message: format!("vocabulary.{field} must not be empty"),
                });
            }
        }

        Ok(())
    }
}
