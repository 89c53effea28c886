//! Error types for skill-init.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when creating a skill.
#[derive(Debug, Error)]
pub enum InitError {
    /// The name is empty, not lowercase, or contains characters other than
    /// letters, digits, and hyphens.
    #[error("Name '{0}' must be lowercase alphanumeric with hyphens.")]
    InvalidName(String),

    /// Something already exists at the target skill path.
    #[error("Skill directory '{}' already exists.", .0.display())]
    AlreadyExists(PathBuf),

    /// Failed to create one of the skill directories.
    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the SKILL.md file.
    #[error("Failed to write {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Global scope was requested but no home directory is known.
    #[error("Unable to determine the home directory for a global skill")]
    HomeDirUnavailable,

    /// The current working directory could not be read.
    #[error("Unable to read the current directory: {0}")]
    CurrentDirUnavailable(#[source] std::io::Error),
}
