//! Error types for rfchain-config.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Component(#[from] rfchain_core::Error),

    #[error("duplicate component name: {0}")]
    DuplicateName(String),
}

pub type Result<T> = std::result::Result<T, Error>;
