//! Source Loader.
//!
//! This module reads programs and configuration from disk. It performs:
//! 1. **Source loading:** Reads an assembly source file into a string.
//! 2. **Assembly:** Tokenizes and assembles the source into a [`Program`].
//! 3. **Configuration:** Reads and parses a JSON configuration file.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::asm::{Program, assemble_source};
use crate::common::error::BuildError;
use crate::config::Config;

/// Failure to obtain a runnable program or a configuration.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("could not read '{}': {source}", path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The source did not assemble.
    #[error(transparent)]
    Build(#[from] BuildError),

    /// The configuration file is not valid.
    #[error("invalid configuration '{}': {source}", path.display())]
    Config {
        /// File that failed.
        path: PathBuf,
        /// Parse error.
        #[source]
        source: serde_json::Error,
    },
}

/// Reads a source file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read.
pub fn read_source(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads and assembles a source file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, or [`LoadError::Build`] carrying
/// every diagnostic if assembly fails.
pub fn load_program(path: &Path) -> Result<Program, LoadError> {
    let source = read_source(path)?;
    debug!(path = %path.display(), bytes = source.len(), "source read");
    Ok(assemble_source(&source)?)
}

/// Reads a JSON configuration file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, or [`LoadError::Config`] if it
/// does not parse.
pub fn load_config(path: &Path) -> Result<Config, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Config::from_json(&text).map_err(|source| LoadError::Config {
        path: path.to_path_buf(),
        source,
    })
}
