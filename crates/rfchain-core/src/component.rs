//! Raw component descriptions as they arrive from configuration.
//!
//! A [`Component`] carries decibel-domain fields exactly as spelled in the
//! input document. Normalization into the linear domain happens in
//! [`crate::stage`]; nothing here is converted.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Kind of a chain component.
///
/// Accepts the historical spellings `lna`/`ampli` for amplifiers and
/// `atten` for attenuators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    #[serde(alias = "lna", alias = "ampli")]
    Amplifier,
    Filter,
    Switch,
    #[serde(alias = "atten")]
    Attenuator,
    Mixer,
    #[serde(rename = "other-passive", alias = "passive")]
    OtherPassive,
}

impl ComponentKind {
    /// Components described by a single insertion-loss value rather than a
    /// gain. Their gain is `-|loss|` and their noise figure is `|loss|`.
    pub fn uses_insertion_loss(self) -> bool {
        matches!(self, ComponentKind::Filter | ComponentKind::Switch)
    }
}

/// One component as described in the input document.
///
/// All level fields are decibel-domain: gains and losses in dB, compression
/// in dBm. `p1db_dBm` accepts the alternate spelling `op1db_dBm`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Component {
    /// Unique name within a chain.
    pub name: String,
    /// Component kind.
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    /// Nominal gain in dB (negative for lossy elements).
    #[serde(rename = "gain_dB", default)]
    pub gain_db: Option<f64>,
    /// Maximum gain in dB, when it differs from nominal.
    #[serde(rename = "gain_dB_max", default)]
    pub gain_db_max: Option<f64>,
    /// Insertion loss in dB (positive) for filters and switches.
    #[serde(rename = "insertion_loss_dB", default)]
    pub insertion_loss_db: Option<f64>,
    /// Noise figure in dB.
    #[serde(rename = "nf_dB", default)]
    pub nf_db: Option<f64>,
    /// Output 1 dB compression point in dBm. Absent means non-limiting.
    #[serde(rename = "p1db_dBm", alias = "op1db_dBm", default)]
    pub p1db_dbm: Option<f64>,
    /// Discrete selectable gain settings in dB. Presence marks a variable
    /// attenuator.
    #[serde(rename = "gain_dB_options", default)]
    pub gain_db_options: Option<Vec<f64>>,
    /// Amplifiers only: pinned to its listed position.
    #[serde(default)]
    pub fixed: bool,
    /// Fixed components only: must stay adjacent to the next component.
    #[serde(default)]
    pub locked_with_next: bool,
}

impl Component {
    /// An amplifier whose position is a free variable of the search.
    pub fn is_movable_amplifier(&self) -> bool {
        self.kind == ComponentKind::Amplifier && !self.fixed
    }

    /// An attenuator whose position (and possibly setting) is a free
    /// variable of the search. Fixed attenuators stay in the fixed list.
    pub fn is_variable_attenuator(&self) -> bool {
        self.kind == ComponentKind::Attenuator && !self.fixed
    }

    /// The discrete gain settings of this component: the option list when
    /// present, otherwise the single nominal gain.
    pub fn gain_settings(&self) -> Result<Vec<f64>> {
        match &self.gain_db_options {
            Some(options) if options.is_empty() => Err(Error::EmptySettings {
                component: self.name.clone(),
            }),
            Some(options) => Ok(options.clone()),
            None => {
                let gain = self.gain_db.ok_or_else(|| Error::MissingField {
                    component: self.name.clone(),
                    field: "gain_dB",
                })?;
                Ok(vec![gain])
            }
        }
    }

    /// Minimum and maximum gain setting in dB. Equal for a fixed-value
    /// component.
    pub fn gain_span_db(&self) -> Result<(f64, f64)> {
        let settings = self.gain_settings()?;
        let mut min = settings[0];
        let mut max = settings[0];
        for &s in &settings[1..] {
            min = min.min(s);
            max = max.max(s);
        }
        Ok((min, max))
    }
}
