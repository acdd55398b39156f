//! Scaffolder Core - Shared library for project generator CLIs
//!
//! This library provides the core functionality for generating projects from a
//! template store bundled with the tool. A binary describes its product through
//! [`ProductConfig`] and hands operator input to the generator.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Template lookup, recursive copy, file patching, runtime detection
//! - **Layer 2: Workflow Orchestration** - `ProductConfig` trait and [`generator::generate`]
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffolder_core::{generator, templates, ProductConfig, ProjectConfig};
//!
//! let project = ProjectConfig::from_defaults(&MyConfig.prompt_defaults(), Some("todo-app"))?;
//! let candidates = templates::candidate_paths(&MyConfig, None, &cwd);
//! let generation = generator::generate(&MyConfig, &project, &cwd, &candidates, |_| {}).await?;
//! ```

pub mod error;
pub mod generator;
pub mod product;
pub mod project;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(test)]
mod test_support;

// Re-export main types for convenience
pub use error::ScaffoldError;
pub use generator::{generate, Generation, Stage};
pub use product::ProductConfig;
pub use project::{validate_project_name, ProjectConfig, PromptDefaults};
pub use runtime::RuntimeInfo;
pub use templates::{FilePatch, PatchOutcome, PatchStrategy, Substitution};

#[cfg(feature = "tui")]
pub use tui::run;
