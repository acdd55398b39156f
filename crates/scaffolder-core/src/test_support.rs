//! Product used by unit tests

use crate::product::ProductConfig;
use crate::project::{ProjectConfig, PromptDefaults};
use crate::templates::{FilePatch, Substitution};
use serde_json::json;

#[derive(Clone)]
pub struct TestProduct;

impl ProductConfig for TestProduct {
    fn name(&self) -> &'static str {
        "test-create"
    }

    fn display_name(&self) -> &'static str {
        "Test"
    }

    fn cli_description(&self) -> &'static str {
        "Scaffold test projects"
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
        "SCAFFOLDER_CORE_TEST_TEMPLATE_DIR"
    }

    fn patches(&self, config: &ProjectConfig) -> Vec<FilePatch> {
        vec![
            FilePatch::manifest(
                "package.json",
                vec![
                    ("name".to_string(), json!(config.project_name())),
                    ("productName".to_string(), json!(config.project_name())),
                    ("description".to_string(), json!(config.description())),
                    (
                        "author".to_string(),
                        json!({ "name": config.author(), "email": config.email() }),
                    ),
                ],
            ),
            FilePatch::substitute(
                "forge.config.ts",
                vec![
                    Substitution::new(
                        "manufacturer: 'OurUI'",
                        format!("manufacturer: '{}'", config.manufacturer()),
                    ),
                    Substitution::new(
                        "name: 'OurUI Tool V3'",
                        format!("name: '{}'", config.project_name()),
                    ),
                    Substitution::new(
                        "description: 'OurUI Tool V3'",
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
        vec![format!("cd {}", config.project_name())]
    }
}
