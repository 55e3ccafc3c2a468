//! Core stage model and cascade calculus for RF signal chains.
//!
//! This crate provides the fundamental data structures for describing RF
//! front-end components, normalizing them into canonical linear-domain
//! stages, grouping locked components into blocks, and cascading gain,
//! noise figure, and output compression along an ordered chain.

pub mod block;
pub mod cascade;
pub mod component;
pub mod error;
pub mod stage;
pub mod units;

pub use block::{group_locked, Block};
pub use cascade::{cascaded_noise_figure_db, cascaded_output_p1db_dbm, total_gain_db};
pub use component::{Component, ComponentKind};
pub use error::{Error, Result};
pub use stage::{GainMode, Stage};
