//! Error handling for the Bocadillo CLI.
//! Defines the error type and result alias used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while scaffolding a project.
///
/// Skipping an existing file or directory is a successful outcome and never
/// shows up here.
#[derive(Error, Debug)]
pub enum Error {
    /// The project name does not map to a valid package identifier.
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// A template name has no bundled resource behind it.
    #[error("Template not found: '{name}'.")]
    TemplateNotFoundError { name: String },

    /// A bundled template failed to compile or render.
    #[error("Template error: {0}.")]
    TemplateError(#[from] minijinja::Error),

    #[error("Could not create directory '{}': {source}.", path.display())]
    DirectoryCreationError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not write file '{}': {source}.", path.display())]
    FileWriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Interaction with the terminal failed while asking for confirmation.
    #[error("Prompt error: {0}.")]
    PromptError(#[from] dialoguer::Error),

    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Prints a single colored line to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}: {}", crate::style::error("error"), err);
    std::process::exit(1);
}
