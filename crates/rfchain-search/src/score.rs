//! Scoring and ranking of candidate chains against target specifications.

use rayon::iter::{ParallelBridge, ParallelIterator};

use crate::chain::CandidateChain;
use crate::envelope::{envelope, Envelope};
use crate::generate::SearchSpace;

/// Shortfall (in dB) charged when a chain has no output compression limit
/// at all. Large enough to sink any such candidate while keeping every
/// score finite and totally ordered.
const UNBOUNDED_COMPRESSION_SHORTFALL_DB: f64 = 1e6;

/// Target specifications a candidate is scored against.
#[derive(Debug, Clone, Copy)]
pub struct Targets {
    /// Target total gain in dB, applied to both setting extremes.
    pub gain_db: f64,
    /// Noise figure ceiling in dB for the worst (maximum-setting) case.
    pub nf_max_db: f64,
    /// Output compression floor in dBm for the worst (minimum-setting) case.
    pub p1db_min_dbm: f64,
}

/// Sum of four squared penalty terms; zero means both gain extremes hit
/// the target exactly and both worst-case bounds are met. Lower is better.
///
/// Input-referred compression is deliberately not part of the score; it is
/// computed and reported only.
pub fn score(env: &Envelope, targets: &Targets) -> f64 {
    let err_gain_min = (env.gain_min_db - targets.gain_db).powi(2);
    let err_gain_max = (env.gain_max_db - targets.gain_db).powi(2);
    let nf_excess = (env.nf_max_db - targets.nf_max_db).max(0.0);
    let mut p1db_shortfall = (targets.p1db_min_dbm - env.op1db_min_dbm).max(0.0);
    if !p1db_shortfall.is_finite() {
        p1db_shortfall = UNBOUNDED_COMPRESSION_SHORTFALL_DB;
    }
    err_gain_min + err_gain_max + nf_excess.powi(2) + p1db_shortfall.powi(2)
}

/// One scored candidate: its stage-name sequence, metric envelope, and
/// scalar score.
#[derive(Debug, Clone)]
pub struct ScoredChain {
    pub names: Vec<String>,
    pub envelope: Envelope,
    pub score: f64,
}

impl ScoredChain {
    fn evaluate(chain: CandidateChain, targets: &Targets) -> Self {
        let env = envelope(&chain);
        ScoredChain {
            names: chain.names(),
            envelope: env,
            score: score(&env, targets),
        }
    }
}

/// Enumerate, score, and sort every candidate, best first.
pub fn rank(space: &SearchSpace, targets: &Targets) -> Vec<ScoredChain> {
    let mut scored: Vec<ScoredChain> = space
        .candidates()
        .map(|chain| ScoredChain::evaluate(chain, targets))
        .collect();
    sort_by_score(&mut scored);
    scored
}

/// Like [`rank`], evaluating candidates across the rayon thread pool.
/// Candidates are independent, so any partition merged by concatenation
/// and sorted once at the end gives the same result set.
pub fn rank_parallel(space: &SearchSpace, targets: &Targets) -> Vec<ScoredChain> {
    let mut scored: Vec<ScoredChain> = space
        .candidates()
        .par_bridge()
        .map(|chain| ScoredChain::evaluate(chain, targets))
        .collect();
    sort_by_score(&mut scored);
    scored
}

fn sort_by_score(scored: &mut [ScoredChain]) {
    scored.sort_by(|a, b| a.score.total_cmp(&b.score));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env() -> Envelope {
        Envelope {
            gain_min_db: 35.0,
            gain_max_db: 35.0,
            nf_min_db: 3.0,
            nf_max_db: 3.0,
            op1db_min_dbm: 12.0,
            op1db_max_dbm: 14.0,
            ip1db_min_dbm: -23.0,
            ip1db_max_dbm: -21.0,
        }
    }

    fn targets() -> Targets {
        Targets {
            gain_db: 35.0,
            nf_max_db: 4.0,
            p1db_min_dbm: 10.0,
        }
    }

    #[test]
    fn test_score_zero_when_all_targets_met() {
        assert_eq!(score(&env(), &targets()), 0.0);
    }

    #[test]
    fn test_gain_deviation_is_squared_per_extreme() {
        let mut e = env();
        e.gain_min_db = 33.0;
        e.gain_max_db = 38.0;
        assert!((score(&e, &targets()) - (4.0 + 9.0)).abs() < 1e-9);
    }

    #[test]
    fn test_noise_ceiling_penalizes_only_excess() {
        let mut e = env();
        e.nf_max_db = 6.0;
        assert!((score(&e, &targets()) - 4.0).abs() < 1e-9);

        e.nf_max_db = 4.0;
        assert_eq!(score(&e, &targets()), 0.0);
    }

    #[test]
    fn test_compression_floor_penalizes_only_shortfall() {
        let mut e = env();
        e.op1db_min_dbm = 7.0;
        assert!((score(&e, &targets()) - 9.0).abs() < 1e-9);

        e.op1db_min_dbm = 25.0;
        assert_eq!(score(&e, &targets()), 0.0);
    }

    #[test]
    fn test_unbounded_compression_scores_large_but_finite() {
        let mut e = env();
        e.op1db_min_dbm = f64::NEG_INFINITY;
        let s = score(&e, &targets());
        assert!(s.is_finite());
        assert!(s >= UNBOUNDED_COMPRESSION_SHORTFALL_DB.powi(2));
    }

    #[test]
    fn test_input_compression_never_scored() {
        let mut e = env();
        e.ip1db_min_dbm = f64::NEG_INFINITY;
        e.ip1db_max_dbm = 1e9;
        assert_eq!(score(&e, &targets()), 0.0);
    }
}
