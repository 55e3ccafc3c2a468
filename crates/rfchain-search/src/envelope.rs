//! Min/max metric envelope across the attenuator setting range.

use rfchain_core::{cascaded_noise_figure_db, cascaded_output_p1db_dbm, total_gain_db};

use crate::chain::CandidateChain;

/// Chain metrics at the attenuator minimum and maximum gain settings.
///
/// `*_min` fields come from the minimum-setting variant and `*_max` from
/// the maximum-setting one; they are per-variant figures, not a numeric
/// sort of the two. Input-referred compression is the output value minus
/// the matching variant's total gain.
#[derive(Debug, Clone, Copy)]
pub struct Envelope {
    pub gain_min_db: f64,
    pub gain_max_db: f64,
    pub nf_min_db: f64,
    pub nf_max_db: f64,
    pub op1db_min_dbm: f64,
    pub op1db_max_dbm: f64,
    pub ip1db_min_dbm: f64,
    pub ip1db_max_dbm: f64,
}

/// Compute the full metric envelope of one candidate chain.
pub fn envelope(chain: &CandidateChain) -> Envelope {
    let chain_min = chain.at_min_settings();
    let chain_max = chain.at_max_settings();

    let gain_min_db = total_gain_db(&chain_min);
    let gain_max_db = total_gain_db(&chain_max);
    let op1db_min_dbm = cascaded_output_p1db_dbm(&chain_min);
    let op1db_max_dbm = cascaded_output_p1db_dbm(&chain_max);

    Envelope {
        gain_min_db,
        gain_max_db,
        nf_min_db: cascaded_noise_figure_db(&chain_min),
        nf_max_db: cascaded_noise_figure_db(&chain_max),
        op1db_min_dbm,
        op1db_max_dbm,
        ip1db_min_dbm: op1db_min_dbm - gain_min_db,
        ip1db_max_dbm: op1db_max_dbm - gain_max_db,
    }
}
