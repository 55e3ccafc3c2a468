//! Cascade calculus: the two composition laws applied to every chain.
//!
//! Both functions operate on an ordered stage sequence and are used
//! identically whether the input is a block's internal members or a fully
//! assembled chain. Both are order-sensitive, which is what makes exploring
//! stage permutations worthwhile in the first place.

use crate::stage::Stage;
use crate::units::lin_to_db;

/// Total chain gain in dB: the linear product of stage gains.
///
/// An empty chain is unity gain (0 dB).
pub fn total_gain_db(stages: &[Stage]) -> f64 {
    lin_to_db(stages.iter().map(|s| s.gain).product())
}

/// Cascaded noise figure in dB via the Friis formula.
///
/// `F_total = f0 + (f1 - 1)/g0 + (f2 - 1)/(g0*g1) + ...`
///
/// Each stage's noise contribution is divided by the gain ahead of it, so
/// an early high-gain stage suppresses everything downstream. An empty
/// chain is noiseless (0 dB).
pub fn cascaded_noise_figure_db(stages: &[Stage]) -> f64 {
    let Some(first) = stages.first() else {
        return 0.0;
    };
    let mut noise_total = first.noise;
    let mut gain_before = first.gain;
    for stage in &stages[1..] {
        noise_total += (stage.noise - 1.0) / gain_before;
        gain_before *= stage.gain;
    }
    lin_to_db(noise_total)
}

/// Cascaded output 1 dB compression point in dBm.
///
/// Each stage's compression point, referred to the chain output through the
/// gain of all later stages, contributes one term to an inverse sum:
/// `1/P_total = sum_i 1/(p_i * gain_after_i)`. Stages with no compression
/// point do not limit the chain and contribute nothing.
///
/// Returns `f64::NEG_INFINITY` when no stage limits the chain (or the chain
/// is empty). Callers must treat that as "no constraint found", not as an
/// error.
pub fn cascaded_output_p1db_dbm(stages: &[Stage]) -> f64 {
    let n = stages.len();
    let mut gain_after = vec![1.0; n];
    let mut prod = 1.0;
    for idx in (0..n).rev() {
        gain_after[idx] = prod;
        prod *= stages[idx].gain;
    }

    let mut inv_sum = 0.0;
    for (stage, after) in stages.iter().zip(&gain_after) {
        match stage.compression {
            Some(p) if p > 0.0 => inv_sum += 1.0 / (p * after),
            _ => {}
        }
    }

    if inv_sum <= 0.0 {
        f64::NEG_INFINITY
    } else {
        lin_to_db(1.0 / inv_sum)
    }
}
