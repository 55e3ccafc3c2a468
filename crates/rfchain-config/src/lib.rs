//! YAML configuration loading for the architecture search and verifier.
//!
//! Two document shapes are understood:
//!
//! - a search configuration: gain target, noise ceiling, compression floor,
//!   and the component list (see [`Config`]);
//! - a fixed architecture for the verifier: a single `architecture:` list
//!   of components in chain order (see [`ArchitectureFile`]).
//!
//! ```yaml
//! gain_total_target_dB: 35.0
//! nf_max_dB: 4.0
//! p1db_min_dBm: 10.0
//! components:
//!   - name: "Filt1"
//!     type: "filter"
//!     insertion_loss_dB: 2.0
//!     locked_with_next: true
//!   - name: "LNA1"
//!     type: "amplifier"
//!     gain_dB: 15.0
//!     nf_dB: 1.8
//!     p1db_dBm: 18.0
//!   - name: "Att1"
//!     type: "attenuator"
//!     gain_dB_options: [0.0, -5.0, -10.0]
//! ```

pub mod error;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use rfchain_core::{Component, Stage};

pub use error::{Error, Result};

/// Root search configuration document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Target total chain gain in dB.
    #[serde(rename = "gain_total_target_dB")]
    pub gain_target_db: f64,
    /// Worst-case noise figure ceiling in dB.
    #[serde(rename = "nf_max_dB")]
    pub nf_max_db: f64,
    /// Worst-case output compression floor in dBm.
    #[serde(rename = "p1db_min_dBm")]
    pub p1db_min_dbm: f64,
    /// Ordered component descriptions.
    pub components: Vec<Component>,
}

/// Components split by their role in the search.
#[derive(Debug, Clone, Default)]
pub struct Classified {
    /// Position-locked components, in original order. Includes fixed
    /// attenuators.
    pub fixed: Vec<Component>,
    /// Amplifiers whose placement is explored.
    pub movable: Vec<Component>,
    /// Attenuators whose placement and setting are explored.
    pub attenuators: Vec<Component>,
}

impl Config {
    /// Load and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parse and validate a configuration document.
    pub fn parse(text: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Fail fast on anything the search would choke on later: duplicate
    /// names and components missing a field mandatory for their kind.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for component in &self.components {
            if !seen.insert(component.name.as_str()) {
                return Err(Error::DuplicateName(component.name.clone()));
            }
            // Normalization applies the full per-kind field policy.
            Stage::from_component(component)?;
        }
        Ok(())
    }

    /// Split components into fixed / movable / attenuator lists.
    pub fn classify(&self) -> Classified {
        let mut split = Classified::default();
        for component in &self.components {
            if component.is_movable_amplifier() {
                split.movable.push(component.clone());
            } else if component.is_variable_attenuator() {
                split.attenuators.push(component.clone());
            } else {
                split.fixed.push(component.clone());
            }
        }
        split
    }
}

/// A fixed architecture document for the single-chain verifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchitectureFile {
    /// Components in chain order, input to output.
    pub architecture: Vec<Component>,
}

impl ArchitectureFile {
    /// Load and validate an architecture file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parse and validate an architecture document.
    pub fn parse(text: &str) -> Result<Self> {
        let doc: ArchitectureFile = serde_yaml::from_str(text)?;
        for component in &doc.architecture {
            Stage::from_component(component)?;
        }
        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SEARCH_DOC: &str = "\
gain_total_target_dB: 35.0
nf_max_dB: 4.0
p1db_min_dBm: 10.0
components:
  - name: \"Filt1\"
    type: \"filter\"
    insertion_loss_dB: 2.0
    locked_with_next: true
  - name: \"LNA0\"
    type: \"lna\"
    gain_dB: 15.0
    nf_dB: 1.8
    fixed: true
  - name: \"LNA1\"
    type: \"amplifier\"
    gain_dB: 12.0
    nf_dB: 1.5
    p1db_dBm: 18.0
  - name: \"Att1\"
    type: \"atten\"
    gain_dB_options: [0.0, -5.0, -10.0]
";

    #[test]
    fn test_parse_and_classify() {
        let config = Config::parse(SEARCH_DOC).unwrap();
        assert_eq!(config.gain_target_db, 35.0);
        assert_eq!(config.components.len(), 4);

        let split = config.classify();
        assert_eq!(split.fixed.len(), 2);
        assert_eq!(split.movable.len(), 1);
        assert_eq!(split.movable[0].name, "LNA1");
        assert_eq!(split.attenuators.len(), 1);
    }

    #[test]
    fn test_fixed_attenuator_stays_fixed() {
        let doc = SEARCH_DOC.replace(
            "    gain_dB_options: [0.0, -5.0, -10.0]",
            "    gain_dB: -3.0\n    fixed: true",
        );
        let split = Config::parse(&doc).unwrap().classify();
        assert_eq!(split.attenuators.len(), 0);
        assert_eq!(split.fixed.len(), 3);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let doc = SEARCH_DOC.replace("\"Att1\"", "\"LNA1\"");
        let err = Config::parse(&doc).unwrap_err();
        assert!(matches!(err, Error::DuplicateName(name) if name == "LNA1"));
    }

    #[test]
    fn test_missing_mandatory_field_rejected() {
        let doc = SEARCH_DOC.replace("    insertion_loss_dB: 2.0\n", "");
        let err = Config::parse(&doc).unwrap_err();
        assert!(err.to_string().contains("insertion_loss_dB"));
        assert!(err.to_string().contains("Filt1"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SEARCH_DOC.as_bytes()).unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.nf_max_db, 4.0);
    }

    #[test]
    fn test_architecture_file() {
        let doc = "\
architecture:
  - name: \"LNA1\"
    type: \"ampli\"
    gain_dB: 15.0
    gain_dB_max: 17.0
    nf_dB: 2.0
    op1db_dBm: 5.0
  - name: \"Filt1\"
    type: \"filter\"
    insertion_loss_dB: 2.5
";
        let arch = ArchitectureFile::parse(doc).unwrap();
        assert_eq!(arch.architecture.len(), 2);
        assert_eq!(arch.architecture[0].p1db_dbm, Some(5.0));
    }
}
