//! # rfchain
//!
//! Exhaustive architecture search for RF front-end signal chains.
//!
//! Given a set of fixed components, movable amplifier stages, and
//! attenuators with selectable settings, rfchain enumerates every
//! physically distinct chain assembly, cascades noise figure, gain, and
//! compression across the attenuator setting range, and ranks each
//! assembly against target specifications.
//!
//! ## Quick start
//!
//! ```rust
//! use rfchain::prelude::*;
//!
//! let doc = "\
//! gain_total_target_dB: 35.0
//! nf_max_dB: 4.0
//! p1db_min_dBm: 10.0
//! components:
//!   - name: \"LNA0\"
//!     type: \"amplifier\"
//!     gain_dB: 15.0
//!     nf_dB: 2.0
//!     fixed: true
//!   - name: \"LNA1\"
//!     type: \"amplifier\"
//!     gain_dB: 20.0
//!     nf_dB: 1.5
//!     p1db_dBm: 18.0
//!   - name: \"Att1\"
//!     type: \"attenuator\"
//!     gain_dB_options: [0.0, -10.0]
//! ";
//!
//! let config = Config::parse(doc).unwrap();
//! let split = config.classify();
//! let blocks = group_locked(&split.fixed);
//! let space = SearchSpace::new(&blocks, &split.movable, &split.attenuators).unwrap();
//!
//! let targets = Targets {
//!     gain_db: config.gain_target_db,
//!     nf_max_db: config.nf_max_db,
//!     p1db_min_dbm: config.p1db_min_dbm,
//! };
//! let results = rank(&space, &targets);
//! assert!(!results.is_empty());
//! println!("best: {}", results[0].names.join(" -> "));
//! ```

pub use rfchain_config as config;
pub use rfchain_core as core;
pub use rfchain_search as search;

pub use rfchain_config::{ArchitectureFile, Classified, Config};
pub use rfchain_core::{
    cascaded_noise_figure_db, cascaded_output_p1db_dbm, group_locked, total_gain_db, Block,
    Component, ComponentKind, GainMode, Stage,
};
pub use rfchain_search::{
    envelope, rank, rank_parallel, score, CandidateChain, Envelope, Placed, ScoredChain,
    SearchSpace, Targets,
};

/// Prelude module containing the commonly used types and entry points.
pub mod prelude {
    pub use crate::{
        envelope, group_locked, rank, rank_parallel, CandidateChain, Component, ComponentKind,
        Config, Envelope, ScoredChain, SearchSpace, Stage, Targets,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_facade_search() {
        let doc = "\
gain_total_target_dB: 20.0
nf_max_dB: 3.0
p1db_min_dBm: 0.0
components:
  - name: \"Filt\"
    type: \"filter\"
    insertion_loss_dB: 2.0
    fixed: true
  - name: \"Amp\"
    type: \"amplifier\"
    gain_dB: 22.0
    nf_dB: 2.0
    p1db_dBm: 18.0
";
        let config = Config::parse(doc).unwrap();
        let split = config.classify();
        let blocks = group_locked(&split.fixed);
        let space = SearchSpace::new(&blocks, &split.movable, &split.attenuators).unwrap();

        let targets = Targets {
            gain_db: config.gain_target_db,
            nf_max_db: config.nf_max_db,
            p1db_min_dbm: config.p1db_min_dbm,
        };
        let results = rank(&space, &targets);
        // One movable amplifier, two gaps around the single block.
        assert_eq!(results.len(), 2);
        // Amplifier-first keeps the noise figure down.
        assert_eq!(results[0].names, vec!["Amp", "Filt"]);
    }
}
