//! Operator-supplied project settings

use crate::error::ScaffoldError;

/// Default answers offered by each prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptDefaults {
    pub project_name: &'static str,
    pub description: &'static str,
    pub author: &'static str,
    pub email: &'static str,
    pub manufacturer: &'static str,
}

/// Values used to personalize a generated project
///
/// Built once from operator input and never mutated afterwards. The project
/// name is checked on construction, the other fields are free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    project_name: String,
    description: String,
    author: String,
    email: String,
    manufacturer: String,
}

impl ProjectConfig {
    pub fn new(
        project_name: impl Into<String>,
        description: impl Into<String>,
        author: impl Into<String>,
        email: impl Into<String>,
        manufacturer: impl Into<String>,
    ) -> Result<Self, ScaffoldError> {
        let project_name = project_name.into();
        if let Err(reason) = validate_project_name(&project_name) {
            return Err(ScaffoldError::InvalidProjectName {
                name: project_name,
                reason,
            });
        }

        Ok(Self {
            project_name,
            description: description.into(),
            author: author.into(),
            email: email.into(),
            manufacturer: manufacturer.into(),
        })
    }

    /// Build a config from product defaults, optionally overriding the name
    pub fn from_defaults(
        defaults: &PromptDefaults,
        project_name: Option<&str>,
    ) -> Result<Self, ScaffoldError> {
        Self::new(
            project_name.unwrap_or(defaults.project_name),
            defaults.description,
            defaults.author,
            defaults.email,
            defaults.manufacturer,
        )
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }
}

/// Check a project name; the error is shown to the operator as-is
pub fn validate_project_name(input: &str) -> Result<(), &'static str> {
    if input.trim().is_empty() {
        return Err("Project name is required");
    }

    let allowed = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_';
    if !input.chars().all(allowed) {
        return Err(
            "Project name should only contain lowercase letters, numbers, hyphens, and underscores",
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULTS: PromptDefaults = PromptDefaults {
        project_name: "my-electron-app",
        description: "My Electron application description",
        author: "Your Name",
        email: "your.email@example.com",
        manufacturer: "Your Company",
    };

    #[test]
    fn test_valid_names_accepted() {
        for name in ["todo-app", "a", "my_app", "app2", "0-_-9", "my-electron-app"] {
            assert!(validate_project_name(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn test_empty_and_whitespace_rejected() {
        for name in ["", " ", "\t", "   \n"] {
            assert_eq!(
                validate_project_name(name),
                Err("Project name is required"),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_disallowed_characters_rejected() {
        for name in ["Invalid Name!", "MyApp", "my app", "my.app", "my/app", "café", "app@1"] {
            let reason = validate_project_name(name).unwrap_err();
            assert!(
                reason.contains("lowercase letters, numbers, hyphens, and underscores"),
                "{name} gave {reason}"
            );
        }
    }

    #[test]
    fn test_new_rejects_invalid_name() {
        let err = ProjectConfig::new("Invalid Name!", "d", "a", "e", "m").unwrap_err();
        match err {
            ScaffoldError::InvalidProjectName { name, .. } => assert_eq!(name, "Invalid Name!"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_from_defaults_uses_supplied_name() {
        let config = ProjectConfig::from_defaults(&DEFAULTS, Some("todo-app")).unwrap();
        assert_eq!(config.project_name(), "todo-app");
        assert_eq!(config.description(), "My Electron application description");
        assert_eq!(config.manufacturer(), "Your Company");

        let config = ProjectConfig::from_defaults(&DEFAULTS, None).unwrap();
        assert_eq!(config.project_name(), "my-electron-app");
    }
}
