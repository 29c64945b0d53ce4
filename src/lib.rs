//! doc-init generates numbered documentation trees from a YAML outline.
//! It validates the outline, previews every directory and file it would
//! touch, and after confirmation writes them without ever overwriting
//! existing content documents.

/// Command-line interface module for the doc-init application
pub mod cli;

/// Fixed file names, defaults and environment toggles
pub mod constants;

/// YAML configuration document and imports templates
pub mod config;

/// Error types and handling for the doc-init application
pub mod error;

/// Front matter, category descriptors and content documents
pub mod generators;

/// Ordered list of filesystem entries shared by preview and build
pub mod layout;

/// Logger setup driven by the `--verbose` flag
pub mod logger;

/// `NN-slug` names for directories and documents
pub mod naming;

/// Dry-run listing and display options
pub mod preview;

/// Operator confirmation
pub mod prompt;

/// Idempotent creation of the documentation tree
pub mod builder;

/// Validated, ordered outline
pub mod tree;

/// Accumulating structural validation
pub mod validator;
