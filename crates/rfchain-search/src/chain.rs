//! Candidate chains produced by the generator.

use rfchain_core::units::db_to_lin;
use rfchain_core::Stage;

/// One placed element of a candidate chain.
///
/// Attenuators carry their full setting span so the envelope computation
/// can rebuild the chain at either extreme; everything else is placed
/// as-is.
#[derive(Debug, Clone)]
pub struct Placed {
    /// The stage at its chosen setting.
    pub stage: Stage,
    /// `(min, max)` gain setting in dB for attenuators, `None` otherwise.
    pub span_db: Option<(f64, f64)>,
}

impl Placed {
    /// Place a stage with no variable setting.
    pub fn fixed(stage: Stage) -> Self {
        Placed {
            stage,
            span_db: None,
        }
    }
}

/// One fully specified, placeable architecture. Built by the generator,
/// consumed by the scorer, never mutated in between.
#[derive(Debug, Clone)]
pub struct CandidateChain {
    /// Ordered placed elements, input to output.
    pub stages: Vec<Placed>,
}

impl CandidateChain {
    /// Stage names, input to output.
    pub fn names(&self) -> Vec<String> {
        self.stages.iter().map(|p| p.stage.name.clone()).collect()
    }

    /// The chain with every attenuator pinned at its minimum gain setting.
    pub fn at_min_settings(&self) -> Vec<Stage> {
        self.at_settings(|(min, _)| min)
    }

    /// The chain with every attenuator pinned at its maximum gain setting.
    pub fn at_max_settings(&self) -> Vec<Stage> {
        self.at_settings(|(_, max)| max)
    }

    fn at_settings(&self, pick: impl Fn((f64, f64)) -> f64) -> Vec<Stage> {
        self.stages
            .iter()
            .map(|placed| match placed.span_db {
                Some(span) => {
                    let gain_db = pick(span);
                    Stage {
                        gain: db_to_lin(gain_db),
                        noise: db_to_lin(gain_db.abs()),
                        ..placed.stage.clone()
                    }
                }
                None => placed.stage.clone(),
            })
            .collect()
    }
}
