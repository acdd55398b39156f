//! Runtime detection for Node.js and npm

use std::process::Command;

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
    pub install_hint: &'static str,
}

fn detect(binary: &str, name: &'static str, install_hint: &'static str) -> RuntimeInfo {
    let output = Command::new(binary).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
                install_hint,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
            install_hint,
        },
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    detect("node", "Node.js", "install from https://nodejs.org")
}

/// Check if npm is available
pub fn check_npm() -> RuntimeInfo {
    // npm is a .cmd shim on Windows
    let binary = if cfg!(windows) { "npm.cmd" } else { "npm" };
    detect(binary, "npm", "ships with Node.js, install from https://nodejs.org")
}

/// Warning lines for each runtime in `runtimes` that is not installed
pub fn missing_runtimes(runtimes: &[RuntimeInfo]) -> Vec<String> {
    runtimes
        .iter()
        .filter(|r| !r.available)
        .map(|r| format!("{} not found ({})", r.name, r.install_hint))
        .collect()
}

/// One-line summary of the installed runtimes and their versions
pub fn detected_runtimes(runtimes: &[RuntimeInfo]) -> Option<String> {
    let found: Vec<String> = runtimes
        .iter()
        .filter(|r| r.available)
        .map(|r| match &r.version {
            Some(version) => format!("{} ({})", r.name, version),
            None => r.name.to_string(),
        })
        .collect();

    if found.is_empty() {
        None
    } else {
        Some(format!("Detected runtimes: {}", found.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_binary_is_unavailable() {
        let info = detect(
            "definitely-not-a-real-binary-ourui",
            "Nothing",
            "install it",
        );
        assert!(!info.available);
        assert!(info.version.is_none());
    }

    fn sample_runtimes() -> Vec<RuntimeInfo> {
        vec![
            RuntimeInfo {
                name: "Node.js",
                version: Some("v20.11.0".to_string()),
                available: true,
                install_hint: "install from https://nodejs.org",
            },
            RuntimeInfo {
                name: "npm",
                version: None,
                available: false,
                install_hint: "ships with Node.js, install from https://nodejs.org",
            },
        ]
    }

    #[test]
    fn test_missing_runtimes_only_lists_unavailable() {
        assert_eq!(
            missing_runtimes(&sample_runtimes()),
            vec!["npm not found (ships with Node.js, install from https://nodejs.org)".to_string()]
        );
    }

    #[test]
    fn test_detected_runtimes_shows_versions() {
        assert_eq!(
            detected_runtimes(&sample_runtimes()).as_deref(),
            Some("Detected runtimes: Node.js (v20.11.0)")
        );
    }

    #[test]
    fn test_detected_runtimes_none_installed() {
        let mut runtimes = sample_runtimes();
        runtimes[0].available = false;
        assert!(detected_runtimes(&runtimes).is_none());
    }
}
