//! Bocadillo CLI scaffolds new Bocadillo projects.
//! It renders a fixed set of bundled templates into a fresh directory tree,
//! skipping anything that already exists unless the operator agrees to overwrite it.

/// Command-line interface module
pub mod cli;

/// Common constants
pub mod constants;

/// Project naming and the rendering context
pub mod context;

/// Error types and handling
pub mod error;

/// Companion framework detection
pub mod framework;

/// Directories and files produced by a scaffold run
pub mod manifest;

/// Project generation orchestration
pub mod project;

/// User input and interaction handling
pub mod prompt;

/// Template rendering engines
pub mod renderer;

/// Terminal styling helpers
pub mod style;

/// Bundled templates
pub mod templates;

/// Idempotent directory and file writer
pub mod writer;
