//! Post-copy rewriting of generated project files
//!
//! Two strategies share one entry point: structured field updates for a JSON
//! manifest, and literal find/replace for everything else.

use crate::error::ScaffoldError;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::fs;

/// A literal search string and its replacement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub search: String,
    pub replace: String,
}

impl Substitution {
    pub fn new(search: impl Into<String>, replace: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            replace: replace.into(),
        }
    }

    /// `{{name}}` placeholder token
    pub fn token(name: &str, replace: impl Into<String>) -> Self {
        Self::new(format!("{{{{{}}}}}", name), replace)
    }
}

/// How a file gets rewritten
#[derive(Debug, Clone, PartialEq)]
pub enum PatchStrategy {
    /// Parse the file as a JSON object and overwrite top-level keys
    ManifestFields(Vec<(String, Value)>),
    /// Replace every occurrence of each search string, in order
    Substitute(Vec<Substitution>),
}

/// One file to rewrite, relative to the project directory
#[derive(Debug, Clone, PartialEq)]
pub struct FilePatch {
    pub path: PathBuf,
    pub strategy: PatchStrategy,
}

impl FilePatch {
    pub fn manifest(path: impl Into<PathBuf>, fields: Vec<(String, Value)>) -> Self {
        Self {
            path: path.into(),
            strategy: PatchStrategy::ManifestFields(fields),
        }
    }

    pub fn substitute(path: impl Into<PathBuf>, substitutions: Vec<Substitution>) -> Self {
        Self {
            path: path.into(),
            strategy: PatchStrategy::Substitute(substitutions),
        }
    }

    /// Read the file under `project_dir`, transform it in memory and write it back
    pub async fn apply(&self, project_dir: &Path) -> Result<PatchOutcome, ScaffoldError> {
        let full_path = project_dir.join(&self.path);
        let original = fs::read_to_string(&full_path)
            .await
            .map_err(ScaffoldError::io("read", &full_path))?;

        let (patched, unmatched) = match &self.strategy {
            PatchStrategy::ManifestFields(fields) => {
                (update_manifest(&original, fields, &full_path)?, Vec::new())
            }
            PatchStrategy::Substitute(substitutions) => substitute_all(&original, substitutions),
        };

        let changed = patched != original;
        if changed {
            fs::write(&full_path, &patched)
                .await
                .map_err(ScaffoldError::io("write", &full_path))?;
        }

        Ok(PatchOutcome {
            path: self.path.clone(),
            changed,
            unmatched,
        })
    }
}

/// Result of applying one [`FilePatch`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    pub path: PathBuf,
    pub changed: bool,
    /// Search strings that did not occur in the file
    pub unmatched: Vec<String>,
}

/// Apply a patch plan in order, stopping at the first failure
pub async fn patch_project(
    project_dir: &Path,
    patches: &[FilePatch],
) -> Result<Vec<PatchOutcome>, ScaffoldError> {
    let mut outcomes = Vec::with_capacity(patches.len());
    for patch in patches {
        outcomes.push(patch.apply(project_dir).await?);
    }
    Ok(outcomes)
}

fn update_manifest(
    content: &str,
    fields: &[(String, Value)],
    path: &Path,
) -> Result<String, ScaffoldError> {
    let mut manifest: Map<String, Value> = match serde_json::from_str(content) {
        Ok(Value::Object(map)) => map,
        Ok(_) => {
            return Err(ScaffoldError::ManifestNotObject {
                path: path.to_path_buf(),
            })
        }
        Err(source) => {
            return Err(ScaffoldError::ManifestParse {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    for (key, value) in fields {
        manifest.insert(key.clone(), value.clone());
    }

    let mut out = serde_json::to_string_pretty(&manifest).map_err(|source| {
        ScaffoldError::ManifestSerialize {
            path: path.to_path_buf(),
            source,
        }
    })?;
    out.push('\n');
    Ok(out)
}

fn substitute_all(content: &str, substitutions: &[Substitution]) -> (String, Vec<String>) {
    let mut out = content.to_string();
    let mut unmatched = Vec::new();

    for sub in substitutions {
        if sub.search.is_empty() || !out.contains(&sub.search) {
            unmatched.push(sub.search.clone());
            continue;
        }
        out = out.replace(&sub.search, &sub.replace);
    }

    (out, unmatched)
}
