//! Stencil scaffolds AEM project artifacts from placeholder templates.
//! Sentinel tokens embedded in template paths and contents are substituted
//! with values resolved from a layered configuration and a per-invocation
//! resource descriptor.

/// Command-line interface module for the stencil application
pub mod cli;

/// Thin filesystem commands: template copy and content substitution
pub mod commands;

/// Configuration loading and `{{key}}` self-reference resolution
/// in the fixed key order
pub mod config;

/// Substitution rules for the configuration-properties artifact type,
/// derived from the build tool's stored parameters
pub mod config_props;

/// Common constants: configuration keys, sentinel tokens, defaults
pub mod constants;

/// Error types and handling for the stencil application
pub mod error;

/// Logger configuration
pub mod logger;

/// Flat `key=value` property file support
pub mod props;

/// Placeholder substitution engine and the custom-rules strategy trait
pub mod replacer;

/// Resource descriptor for one generation target
pub mod resource;

/// Generation runner orchestrating one invocation
pub mod runner;

/// Artifact type registry and replacer selection
pub mod selector;

/// Path rewrite walker
/// Renames generated files whose paths carry placeholder segments
pub mod walker;
