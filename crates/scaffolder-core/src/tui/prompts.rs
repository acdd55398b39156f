//! Charm-style CLI prompts using cliclack

use crate::generator::{self, Generation};
use crate::product::ProductConfig;
use crate::project::{validate_project_name, ProjectConfig};
use crate::runtime::check;
use crate::templates::resolver;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Proposed project name (used as the default answer)
    pub project_name: Option<String>,

    /// Template directory to use instead of searching the usual locations
    pub template_dir: Option<PathBuf>,

    /// Accept every default without prompting (non-interactive mode)
    pub yes: bool,
}

/// Run the generator with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<()> {
    cliclack::intro(config.welcome())?;

    let result = create(config, &args).await;

    if let Err(e) = &result {
        cliclack::outro_cancel(e.to_string())?;
    }

    let _ = console::Term::stderr().show_cursor();
    result
}

async fn create<C: ProductConfig>(config: &C, args: &CreateArgs) -> Result<()> {
    // Step 1: Collect project settings
    let project = collect_project_config(config, args)?;

    // Step 2: Work out where the template store might be
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let candidates = template_candidates(config, args, &cwd)?;

    // Step 3: Generate
    let generation = generator::generate(config, &project, &cwd, &candidates, |stage| {
        let _ = cliclack::log::step(stage.to_string());
    })
    .await?;

    report_patches(&generation)?;
    cliclack::log::success(format!(
        "Project created successfully! ({} files in {}, template {})",
        generation.copied_files,
        generation.project_dir.display(),
        generation.template_dir.display()
    ))?;

    // Step 4: Runtime advisory
    check_runtimes()?;

    // Step 5: Show next steps
    print_next_steps(config, &project)?;

    Ok(())
}

/// Ask the operator for every project setting, in order
pub fn collect_project_config<C: ProductConfig>(
    config: &C,
    args: &CreateArgs,
) -> Result<ProjectConfig> {
    let defaults = config.prompt_defaults();

    if args.yes {
        let project = ProjectConfig::from_defaults(&defaults, args.project_name.as_deref())?;
        cliclack::log::info(format!(
            "Using defaults for {} (--yes mode)",
            project.project_name()
        ))?;
        return Ok(project);
    }

    let default_name = args
        .project_name
        .as_deref()
        .unwrap_or(defaults.project_name);

    let project_name: String = cliclack::input("Project name")
        .default_input(default_name)
        .validate(|input: &String| validate_project_name(input))
        .interact()?;

    let description = ask("Project description", defaults.description)?;
    let author = ask("Author name", defaults.author)?;
    let email = ask("Author email", defaults.email)?;
    let manufacturer = ask("Manufacturer (for Windows installer)", defaults.manufacturer)?;

    Ok(ProjectConfig::new(
        project_name,
        description,
        author,
        email,
        manufacturer,
    )?)
}

/// Free-text prompt; an empty answer falls back to the default
fn ask(prompt: &str, default: &str) -> Result<String> {
    let answer: String = cliclack::input(prompt)
        .default_input(default)
        .required(false)
        .interact()?;

    Ok(answer_or_default(answer, default))
}

/// Only a truly empty answer takes the default; whitespace is kept as typed
fn answer_or_default(answer: String, default: &str) -> String {
    if answer.is_empty() {
        default.to_string()
    } else {
        answer
    }
}

fn template_candidates<C: ProductConfig>(
    config: &C,
    args: &CreateArgs,
    cwd: &Path,
) -> Result<Vec<PathBuf>> {
    let candidates = match &args.template_dir {
        Some(path) => {
            let path = resolver::absolutize(path, cwd);
            cliclack::log::info(format!("Using local templates from {}", path.display()))?;
            vec![path]
        }
        None => {
            let exe_dir = resolver::current_exe_dir();
            resolver::candidate_paths(config, exe_dir.as_deref(), cwd)
        }
    };

    Ok(candidates)
}

fn report_patches(generation: &Generation) -> Result<()> {
    for path in generation.unchanged_files() {
        cliclack::log::info(format!("{} already up to date", path.display()))?;
    }
    for (path, pattern) in generation.unmatched_patterns() {
        cliclack::log::warning(format!(
            "{}: '{}' not found, left unchanged",
            path.display(),
            pattern
        ))?;
    }
    Ok(())
}

fn check_runtimes() -> Result<()> {
    let runtimes = [check::check_node(), check::check_npm()];

    if let Some(detected) = check::detected_runtimes(&runtimes) {
        cliclack::log::info(detected)?;
    }

    for warning in check::missing_runtimes(&runtimes) {
        cliclack::log::warning(warning)?;
    }

    Ok(())
}

fn print_next_steps<C: ProductConfig>(config: &C, project: &ProjectConfig) -> Result<()> {
    let steps = config.next_steps(project);

    println!();
    println!("  {}", "Next steps".cyan().bold());
    println!();

    for step in &steps {
        println!("    {}", step);
    }
    println!();

    cliclack::outro("Happy coding!")?;

    Ok(())
}
