//! Canonical linear-domain stages and the normalization policy.
//!
//! A [`Stage`] is the only representation the cascade calculus ever sees.
//! Normalization rules:
//!
//! - filters and switches are described by a positive insertion loss `L`:
//!   gain is `-|L|` dB and noise figure is `|L|` dB (modeling assumption);
//! - every other kind must carry `gain_dB`; a missing `nf_dB` defaults to
//!   `|gain_dB|` as a conservative estimate;
//! - a missing compression point is kept as `None`, never as a large
//!   numeric placeholder, so it can be skipped exactly in the cascade.

use crate::component::{Component, ComponentKind};
use crate::error::{Error, Result};
use crate::units::db_to_lin;

/// Which gain variant of a component to normalize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GainMode {
    /// Use `gain_dB` (and the first entry of `gain_dB_options`).
    #[default]
    Nominal,
    /// Prefer `gain_dB_max` where present, falling back to `gain_dB`.
    Maximum,
}

/// One canonical stage of a signal chain, all fields linear-domain.
#[derive(Debug, Clone, PartialEq)]
pub struct Stage {
    /// Originating component name (or joined names for a collapsed block).
    pub name: String,
    /// Originating component kind.
    pub kind: ComponentKind,
    /// Linear gain factor, always > 0.
    pub gain: f64,
    /// Linear noise factor, always >= 1.
    pub noise: f64,
    /// Linear output compression power in mW. `None` means the stage does
    /// not limit the chain.
    pub compression: Option<f64>,
}

impl Stage {
    /// Normalize a component at its nominal gain.
    pub fn from_component(component: &Component) -> Result<Self> {
        Self::from_component_with(component, GainMode::Nominal)
    }

    /// Normalize a component, selecting nominal or maximum gain.
    pub fn from_component_with(component: &Component, mode: GainMode) -> Result<Self> {
        let (gain_db, nf_db) = if component.kind.uses_insertion_loss() {
            let loss = component
                .insertion_loss_db
                .ok_or_else(|| Error::MissingField {
                    component: component.name.clone(),
                    field: "insertion_loss_dB",
                })?;
            (-loss.abs(), loss.abs())
        } else {
            let nominal = match &component.gain_db_options {
                Some(options) => *options.first().ok_or_else(|| Error::EmptySettings {
                    component: component.name.clone(),
                })?,
                None => component.gain_db.ok_or_else(|| Error::MissingField {
                    component: component.name.clone(),
                    field: "gain_dB",
                })?,
            };
            let gain_db = match mode {
                GainMode::Nominal => nominal,
                GainMode::Maximum => component.gain_db_max.unwrap_or(nominal),
            };
            let nf_db = component.nf_db.unwrap_or(gain_db.abs());
            (gain_db, nf_db)
        };

        Ok(Stage {
            name: component.name.clone(),
            kind: component.kind,
            gain: db_to_lin(gain_db),
            noise: db_to_lin(nf_db),
            compression: component.p1db_dbm.map(db_to_lin),
        })
    }

    /// Normalize an attenuator pinned at one particular setting.
    pub fn attenuator_at(component: &Component, gain_db: f64) -> Self {
        Stage {
            name: component.name.clone(),
            kind: component.kind,
            gain: db_to_lin(gain_db),
            noise: db_to_lin(gain_db.abs()),
            compression: component.p1db_dbm.map(db_to_lin),
        }
    }
}
