//! Grouping of fixed components into inseparable blocks.
//!
//! A block is a maximal run of fixed components terminated by one whose
//! `locked_with_next` flag is false. Each block collapses to a single
//! synthetic stage: gain is the dB sum of member gains, while noise figure
//! and compression come from the full cascade over the members. Summing
//! noise figures in dB instead would ignore how later stages' noise is
//! divided by the gain ahead of them.

use crate::cascade::{cascaded_noise_figure_db, cascaded_output_p1db_dbm};
use crate::component::{Component, ComponentKind};
use crate::error::Result;
use crate::stage::Stage;
use crate::units::{db_to_lin, lin_to_db};

/// An ordered, non-empty run of fixed components treated as inseparable.
#[derive(Debug, Clone)]
pub struct Block {
    /// Member components in their original relative order.
    pub members: Vec<Component>,
}

impl Block {
    /// Joined member names, e.g. `"Filt1 + LNA0"`.
    pub fn label(&self) -> String {
        self.members
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(" + ")
    }

    /// Collapse the block into one canonical stage by cascading its
    /// internal stage sequence.
    pub fn collapse(&self) -> Result<Stage> {
        let subchain = self
            .members
            .iter()
            .map(Stage::from_component)
            .collect::<Result<Vec<_>>>()?;

        let gain_db: f64 = subchain.iter().map(|s| lin_to_db(s.gain)).sum();
        let nf_db = cascaded_noise_figure_db(&subchain);
        let p1db_dbm = cascaded_output_p1db_dbm(&subchain);

        Ok(Stage {
            name: self.label(),
            kind: ComponentKind::OtherPassive,
            gain: db_to_lin(gain_db),
            noise: db_to_lin(nf_db),
            // A block with no limiting member stays non-limiting.
            compression: p1db_dbm.is_finite().then(|| db_to_lin(p1db_dbm)),
        })
    }

    /// dB sum of member maximum gains, falling back to nominal gain for
    /// members without a `gain_dB_max`. Reported alongside results, not
    /// used by the search itself.
    pub fn gain_max_db(&self) -> Result<f64> {
        let mut total = 0.0;
        for member in &self.members {
            match member.gain_db_max {
                Some(max) => total += max,
                None => total += lin_to_db(Stage::from_component(member)?.gain),
            }
        }
        Ok(total)
    }
}

/// Partition an ordered list of fixed components into blocks.
///
/// A component with `locked_with_next` set always lands in the same block
/// as its successor, transitively. A trailing locked component simply ends
/// the last block.
pub fn group_locked(fixed: &[Component]) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();
    for component in fixed {
        current.push(component.clone());
        if !component.locked_with_next {
            blocks.push(Block { members: std::mem::take(&mut current) });
        }
    }
    if !current.is_empty() {
        blocks.push(Block { members: current });
    }
    blocks
}
