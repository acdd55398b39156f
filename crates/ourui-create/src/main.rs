//! create-ourui-app - Project scaffolding for OurUI Electron applications

use anyhow::Result;
use clap::{CommandFactory, FromArgMatches, Parser};
use scaffolder_core::tui::CreateArgs;
use scaffolder_core::{FilePatch, ProductConfig, ProjectConfig, PromptDefaults, Substitution};
use serde::Serialize;
use std::path::PathBuf;

/// OurUI product configuration
#[derive(Clone)]
pub struct OurUiConfig;

/// `author` entry written into the generated package.json
#[derive(Serialize)]
struct PackageAuthor<'a> {
    name: &'a str,
    email: &'a str,
}

/// Placeholder literals baked into the template's forge.config.ts
const FORGE_MANUFACTURER: &str = "OurUI";
const FORGE_PRODUCT: &str = "OurUI Tool V3";

impl ProductConfig for OurUiConfig {
    fn name(&self) -> &'static str {
        "create-ourui-app"
    }

    fn display_name(&self) -> &'static str {
        "OurUI Electron App Scaffold"
    }

    fn cli_description(&self) -> &'static str {
        "Create a new Electron + React + TypeScript application"
    }

    fn prompt_defaults(&self) -> PromptDefaults {
        PromptDefaults {
            project_name: "my-electron-app",
            description: "My Electron application description",
            author: "Your Name",
            email: "your.email@example.com",
            manufacturer: "Your Company",
        }
    }

    fn template_dir_env(&self) -> &'static str {
        "OURUI_TEMPLATE_DIR"
    }

    fn patches(&self, config: &ProjectConfig) -> Vec<FilePatch> {
        let author = PackageAuthor {
            name: config.author(),
            email: config.email(),
        };
        // Serializing two string fields cannot fail
        let author = serde_json::to_value(author).unwrap_or_default();

        vec![
            FilePatch::manifest(
                "package.json",
                vec![
                    ("name".to_string(), config.project_name().into()),
                    ("productName".to_string(), config.project_name().into()),
                    ("description".to_string(), config.description().into()),
                    ("author".to_string(), author),
                ],
            ),
            FilePatch::substitute(
                "forge.config.ts",
                vec![
                    Substitution::new(
                        format!("manufacturer: '{}'", FORGE_MANUFACTURER),
                        format!("manufacturer: '{}'", config.manufacturer()),
                    ),
                    Substitution::new(
                        format!("name: '{}'", FORGE_PRODUCT),
                        format!("name: '{}'", config.project_name()),
                    ),
                    Substitution::new(
                        format!("description: '{}'", FORGE_PRODUCT),
                        format!("description: '{}'", config.description()),
                    ),
                ],
            ),
            FilePatch::substitute(
                "README.md",
                vec![
                    Substitution::token("projectName", config.project_name()),
                    Substitution::token("description", config.description()),
                    Substitution::token("author", config.author()),
                    Substitution::token("email", config.email()),
                ],
            ),
        ]
    }

    fn next_steps(&self, config: &ProjectConfig) -> Vec<String> {
        vec![
            format!("cd {}", config.project_name()),
            "npm install".to_string(),
            "npm start".to_string(),
        ]
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-ourui-app")]
#[command(version)]
pub struct Args {
    /// Project name
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: Option<String>,

    /// Local directory to use for templates instead of the bundled ones (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Accept all default answers (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

/// Clap command with the product's description as its about text
fn cli_command<C: ProductConfig>(config: &C) -> clap::Command {
    Args::command().about(config.cli_description())
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            project_name: args.project_name,
            template_dir: args.template_dir,
            yes: args.yes,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let config = OurUiConfig;
    let matches = cli_command(&config).get_matches();
    let args = match Args::from_arg_matches(&matches) {
        Ok(args) => args,
        Err(e) => e.exit(),
    };

    // Failures are already reported by the TUI; only the exit status is left
    if scaffolder_core::run(&config, args.into()).await.is_err() {
        std::process::exit(1);
    }

    Ok(())
}
