//! Error types for project generation

use std::fmt::Write as _;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a project from being generated
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: &'static str },

    #[error("Directory {name} already exists!")]
    DestinationExists { name: String, path: PathBuf },

    #[error(
        "Cannot create {} inside the template directory {}",
        .destination.display(),
        .template_dir.display()
    )]
    DestinationInsideTemplate {
        destination: PathBuf,
        template_dir: PathBuf,
    },

    #[error(
        "Template directory not found. Please ensure the package is properly installed.{}",
        searched_list(.searched)
    )]
    TemplateNotFound { searched: Vec<PathBuf> },

    #[error("Failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to copy {} to {}: {source}", .from.display(), .to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to walk template directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to parse {}: {source}", .path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} must contain a JSON object at the top level", .path.display())]
    ManifestNotObject { path: PathBuf },

    #[error("Failed to serialize {}: {source}", .path.display())]
    ManifestSerialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ScaffoldError {
    /// Attach the failed action and path to an I/O error
    pub fn io(action: &'static str, path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io {
            action,
            path,
            source,
        }
    }
}

fn searched_list(searched: &[PathBuf]) -> String {
    let mut out = String::new();
    if !searched.is_empty() {
        out.push_str("\nSearched:");
        for path in searched {
            let _ = write!(out, "\n  - {}", path.display());
        }
    }
    out
}
