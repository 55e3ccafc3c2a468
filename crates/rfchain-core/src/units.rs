//! Decibel / linear conversions.
//!
//! All chain quantities are decibel-domain on the way in (gain_dB, nf_dB,
//! p1db_dBm) and linear-domain inside the cascade calculus. Gains and noise
//! factors convert as power ratios; compression points convert dBm <-> mW
//! with the same formula (0 dBm = 1 mW).

/// Convert a decibel power ratio (or dBm power) to linear (or mW).
pub fn db_to_lin(db: f64) -> f64 {
    10f64.powf(db / 10.0)
}

/// Convert a linear power ratio (or mW power) to decibels (or dBm).
///
/// The input must be strictly positive.
pub fn lin_to_db(lin: f64) -> f64 {
    10.0 * lin.log10()
}
