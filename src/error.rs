//! Crate error type.

use std::path::PathBuf;

use crate::render::RegistryError;

/// Errors surfaced by rendering and configuration.
///
/// Storage failures never reach this type: the preference logs and absorbs
/// them.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Template(#[from] minijinja::Error),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
