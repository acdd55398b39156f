//! End-to-end project generation
//!
//! Runs the pipeline once: collision check, template lookup, directory
//! creation, recursive copy, then the product's patch plan. Nothing is rolled
//! back if a later step fails.

use crate::error::ScaffoldError;
use crate::product::ProductConfig;
use crate::project::ProjectConfig;
use crate::templates::{copier, patcher, resolver, PatchOutcome};
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Pipeline step about to start
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    CreatingDirectory(PathBuf),
    CopyingTemplate(PathBuf),
    ConfiguringProject,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::CreatingDirectory(_) => write!(f, "Creating project directory..."),
            Stage::CopyingTemplate(_) => write!(f, "Copying template files..."),
            Stage::ConfiguringProject => write!(f, "Configuring project files..."),
        }
    }
}

/// What a successful run produced
#[derive(Debug, Clone)]
pub struct Generation {
    pub project_dir: PathBuf,
    pub template_dir: PathBuf,
    pub copied_files: usize,
    pub patches: Vec<PatchOutcome>,
}

impl Generation {
    /// `(file, pattern)` pairs for every substitution that matched nothing
    pub fn unmatched_patterns(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.patches.iter().flat_map(|outcome| {
            outcome
                .unmatched
                .iter()
                .map(move |pattern| (outcome.path.as_path(), pattern.as_str()))
        })
    }

    /// Patched files whose content was already what the plan produces
    pub fn unchanged_files(&self) -> impl Iterator<Item = &Path> {
        self.patches
            .iter()
            .filter(|outcome| !outcome.changed)
            .map(|outcome| outcome.path.as_path())
    }
}

/// Generate `<cwd>/<project name>` from the first existing template candidate
///
/// `on_stage` is called before each filesystem-mutating step.
pub async fn generate<C, F>(
    product: &C,
    config: &ProjectConfig,
    cwd: &Path,
    template_candidates: &[PathBuf],
    mut on_stage: F,
) -> Result<Generation, ScaffoldError>
where
    C: ProductConfig,
    F: FnMut(Stage),
{
    let project_dir = cwd.join(config.project_name());

    // symlink_metadata so a dangling link still counts as taken
    if fs::symlink_metadata(&project_dir).await.is_ok() {
        return Err(ScaffoldError::DestinationExists {
            name: config.project_name().to_string(),
            path: project_dir,
        });
    }

    let template_dir = resolver::resolve(template_candidates)?;
    ensure_outside_template(&project_dir, cwd, &template_dir).await?;

    on_stage(Stage::CreatingDirectory(project_dir.clone()));
    fs::create_dir_all(&project_dir)
        .await
        .map_err(ScaffoldError::io("create directory", &project_dir))?;

    on_stage(Stage::CopyingTemplate(template_dir.clone()));
    let copied_files = copier::copy_template(&template_dir, &project_dir).await?;

    on_stage(Stage::ConfiguringProject);
    let patches = patcher::patch_project(&project_dir, &product.patches(config)).await?;

    Ok(Generation {
        project_dir,
        template_dir,
        copied_files,
        patches,
    })
}

async fn ensure_outside_template(
    project_dir: &Path,
    cwd: &Path,
    template_dir: &Path,
) -> Result<(), ScaffoldError> {
    let template_dir = fs::canonicalize(template_dir)
        .await
        .map_err(ScaffoldError::io("resolve", template_dir))?;
    let cwd = fs::canonicalize(cwd)
        .await
        .map_err(ScaffoldError::io("resolve", cwd))?;

    if let Some(name) = project_dir.file_name() {
        if cwd.join(name).starts_with(&template_dir) {
            return Err(ScaffoldError::DestinationInsideTemplate {
                destination: project_dir.to_path_buf(),
                template_dir,
            });
        }
    }

    Ok(())
}
