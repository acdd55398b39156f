//! Template store handling
//!
//! This module provides:
//! - Template store lookup over an ordered list of candidate directories
//! - Recursive copying of the store into a new project directory
//! - Post-copy patching of manifest, build config and docs

pub mod copier;
pub mod patcher;
pub mod resolver;

pub use copier::copy_template;
pub use patcher::{patch_project, FilePatch, PatchOutcome, PatchStrategy, Substitution};
pub use resolver::{candidate_paths, resolve};
