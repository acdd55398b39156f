//! Product configuration trait for CLI binaries
//!
//! Each generator binary implements this trait to describe its branding,
//! where its template store may live, and how copied files get personalized.

use crate::project::{ProjectConfig, PromptDefaults};
use crate::templates::patcher::FilePatch;
use std::path::{Path, PathBuf};

/// Configuration trait for different generator products
///
/// Each product implements this trait to define:
/// - Product identity (name, display name)
/// - Prompt defaults
/// - Template store locations
/// - The patch plan applied after copying
/// - Post-setup instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the binary and the share/ directory)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Greeting shown when the generator starts
    fn welcome(&self) -> String {
        format!("Welcome to {}!", self.display_name())
    }

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Default answers for the interactive prompts
    fn prompt_defaults(&self) -> PromptDefaults;

    /// Environment variable that, when set, is tried first as the template directory
    fn template_dir_env(&self) -> &'static str;

    /// Template directory candidates relative to the running executable's directory,
    /// in priority order
    fn exe_relative_template_dirs(&self) -> Vec<PathBuf> {
        vec![
            PathBuf::from("../templates"),
            PathBuf::from("../../templates"),
            Path::new("../share").join(self.name()).join("templates"),
        ]
    }

    /// Template directory name looked up in the working directory as a last resort
    fn cwd_template_dir(&self) -> &'static str {
        "templates"
    }

    /// Files to rewrite in the generated project
    fn patches(&self, config: &ProjectConfig) -> Vec<FilePatch>;

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, config: &ProjectConfig) -> Vec<String>;
}
