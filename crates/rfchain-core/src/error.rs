//! Error types for rfchain-core.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("component '{component}' is missing required field '{field}'")]
    MissingField {
        component: String,
        field: &'static str,
    },

    #[error("component '{component}' has an empty gain_dB_options list")]
    EmptySettings { component: String },

    #[error("invalid chain: {0}")]
    InvalidChain(String),
}

pub type Result<T> = std::result::Result<T, Error>;
