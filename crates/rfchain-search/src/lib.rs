//! Exhaustive architecture search over RF signal chains.
//!
//! Given fixed blocks, movable amplifiers, and attenuators with selectable
//! settings, this crate enumerates every architecturally distinct chain as
//! a lazy iterator, computes each candidate's gain/noise/compression
//! envelope across the attenuator setting range, and ranks candidates
//! against target specifications.
//!
//! Enumeration is deliberately exhaustive: nothing is pruned, so result
//! quality never depends on heuristics. [`SearchSpace::estimated_candidates`]
//! lets callers size the search before starting it.

pub mod chain;
pub mod envelope;
pub mod generate;
pub mod score;

pub use chain::{CandidateChain, Placed};
pub use envelope::{envelope, Envelope};
pub use generate::SearchSpace;
pub use score::{rank, rank_parallel, score, ScoredChain, Targets};
