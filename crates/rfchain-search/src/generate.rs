//! Lazy enumeration of every architecturally distinct chain.
//!
//! Nesting, outermost to innermost: non-empty subset of movable
//! amplifiers, insertion gaps for the subset among the fixed blocks,
//! orderings of the subset, attenuator gaps in the resulting sequence,
//! and the cross-product of attenuator settings. Candidates are produced
//! on demand; nothing is materialized up front and nothing is filtered
//! out — validity is judged by the scorer, not the generator.

use itertools::Itertools;

use rfchain_core::{Block, Component, Result, Stage};

use crate::chain::{CandidateChain, Placed};

/// An attenuator expanded to one stage per selectable setting.
#[derive(Debug, Clone)]
struct AttenuatorChoices {
    options: Vec<Stage>,
    span_db: (f64, f64),
}

/// The normalized inputs of one search run: collapsed fixed blocks, movable
/// amplifier stages, and expanded attenuators.
#[derive(Debug, Clone)]
pub struct SearchSpace {
    blocks: Vec<Stage>,
    movable: Vec<Stage>,
    attenuators: Vec<AttenuatorChoices>,
}

impl SearchSpace {
    /// Normalize all inputs up front so enumeration itself cannot fail.
    /// Any component missing a mandatory field is rejected here.
    pub fn new(
        blocks: &[Block],
        movable: &[Component],
        attenuators: &[Component],
    ) -> Result<Self> {
        let blocks = blocks.iter().map(Block::collapse).collect::<Result<Vec<_>>>()?;
        let movable = movable
            .iter()
            .map(Stage::from_component)
            .collect::<Result<Vec<_>>>()?;
        let attenuators = attenuators
            .iter()
            .map(|att| {
                let options = att
                    .gain_settings()?
                    .iter()
                    .map(|&gain_db| Stage::attenuator_at(att, gain_db))
                    .collect();
                Ok(AttenuatorChoices {
                    options,
                    span_db: att.gain_span_db()?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(SearchSpace {
            blocks,
            movable,
            attenuators,
        })
    }

    /// Number of movable amplifiers in the space. Zero means no candidate
    /// can be generated at all.
    pub fn num_movable(&self) -> usize {
        self.movable.len()
    }

    /// Lazily enumerate every candidate chain.
    pub fn candidates(&self) -> impl Iterator<Item = CandidateChain> + '_ {
        let num_amp_gaps = self.blocks.len() + 1;
        (1..=self.movable.len()).flat_map(move |size| {
            self.movable
                .iter()
                .cloned()
                .combinations(size)
                .flat_map(move |subset| {
                    (0..num_amp_gaps)
                        .combinations(size)
                        .flat_map(move |gaps| {
                            subset
                                .clone()
                                .into_iter()
                                .permutations(size)
                                .map(move |perm| (gaps.clone(), perm))
                        })
                })
                .flat_map(move |(gaps, perm)| {
                    let seq = self.with_amplifiers(&gaps, perm);
                    self.attenuator_placements(seq)
                })
        })
    }

    /// Exact candidate count for the current space, without enumerating.
    ///
    /// `sum over s of C(N,s) * C(M+1,s) * s! * C(M+s+1,K) * prod(options)`
    /// where N movable amplifiers, M blocks, K attenuators. Saturates
    /// instead of overflowing, which for practical purposes reads as
    /// "far too many".
    pub fn estimated_candidates(&self) -> u128 {
        let n = self.movable.len();
        let m = self.blocks.len();
        let k = self.attenuators.len();
        let settings_product: u128 = self
            .attenuators
            .iter()
            .map(|a| a.options.len() as u128)
            .product();

        (1..=n)
            .map(|s| {
                choose(n, s)
                    .saturating_mul(choose(m + 1, s))
                    .saturating_mul(factorial(s))
                    .saturating_mul(choose(m + s + 1, k))
                    .saturating_mul(settings_product)
            })
            .fold(0u128, u128::saturating_add)
    }

    /// Insert amplifier stages at the chosen gaps among the fixed blocks.
    /// Gaps are ascending and distinct; inserting from the back keeps the
    /// earlier indices valid.
    fn with_amplifiers(&self, gaps: &[usize], amps: Vec<Stage>) -> Vec<Placed> {
        let mut seq: Vec<Placed> = self.blocks.iter().cloned().map(Placed::fixed).collect();
        for (gap, amp) in gaps.iter().zip(amps).rev() {
            seq.insert(*gap, Placed::fixed(amp));
        }
        seq
    }

    /// All attenuator position/setting assignments for one blocks+amplifiers
    /// sequence. With no attenuators the sequence itself is the single
    /// candidate.
    fn attenuator_placements(
        &self,
        seq: Vec<Placed>,
    ) -> Box<dyn Iterator<Item = CandidateChain> + Send + '_> {
        if self.attenuators.is_empty() {
            return Box::new(std::iter::once(CandidateChain { stages: seq }));
        }

        let count = self.attenuators.len();
        let num_gaps = seq.len() + 1;
        let iter = (0..num_gaps).combinations(count).flat_map(move |gaps| {
            let seq = seq.clone();
            self.attenuators
                .iter()
                .map(|att| {
                    att.options.iter().map(move |stage| Placed {
                        stage: stage.clone(),
                        span_db: Some(att.span_db),
                    })
                })
                .multi_cartesian_product()
                .map(move |settings| {
                    let mut stages = seq.clone();
                    for (gap, placed) in gaps.iter().zip(settings).rev() {
                        stages.insert(*gap, placed);
                    }
                    CandidateChain { stages }
                })
        });
        Box::new(iter)
    }
}

fn choose(n: usize, k: usize) -> u128 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        result = result.saturating_mul((n - i) as u128) / (i as u128 + 1);
    }
    result
}

fn factorial(n: usize) -> u128 {
    (1..=n as u128).fold(1, u128::saturating_mul)
}
