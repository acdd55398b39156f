//! Template store lookup
//!
//! The store is found by probing an ordered list of candidate directories. The
//! first one that exists wins, so a local checkout can shadow an installed copy.

use crate::error::ScaffoldError;
use crate::product::ProductConfig;
use std::path::{Path, PathBuf};

/// Build the ordered list of template directory candidates for a product
///
/// Order: the product's environment override (if set), locations relative to
/// the executable's directory, then `<cwd>/templates`.
pub fn candidate_paths<C: ProductConfig>(
    config: &C,
    exe_dir: Option<&Path>,
    cwd: &Path,
) -> Vec<PathBuf> {
    let env_override = std::env::var_os(config.template_dir_env())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);
    candidate_paths_with_override(config, env_override, exe_dir, cwd)
}

fn candidate_paths_with_override<C: ProductConfig>(
    config: &C,
    env_override: Option<PathBuf>,
    exe_dir: Option<&Path>,
    cwd: &Path,
) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(path) = env_override {
        candidates.push(absolutize(&path, cwd));
    }

    if let Some(exe_dir) = exe_dir {
        for relative in config.exe_relative_template_dirs() {
            candidates.push(exe_dir.join(relative));
        }
    }

    candidates.push(cwd.join(config.cwd_template_dir()));
    candidates
}

/// Directory containing the running executable, if it can be determined
pub fn current_exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

/// Return the first candidate that is an existing directory
pub fn resolve(candidates: &[PathBuf]) -> Result<PathBuf, ScaffoldError> {
    candidates
        .iter()
        .find(|path| path.is_dir())
        .cloned()
        .ok_or_else(|| ScaffoldError::TemplateNotFound {
            searched: candidates.to_vec(),
        })
}

/// Resolve a possibly relative path against the working directory
pub fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestProduct;
    use std::fs;

    #[test]
    fn test_candidate_order() {
        let candidates = candidate_paths_with_override(
            &TestProduct,
            Some(PathBuf::from("custom")),
            Some(Path::new("/opt/tool/bin")),
            Path::new("/work"),
        );

        assert_eq!(
            candidates,
            vec![
                PathBuf::from("/work/custom"),
                PathBuf::from("/opt/tool/bin/../templates"),
                PathBuf::from("/opt/tool/bin/../../templates"),
                PathBuf::from("/opt/tool/bin/../share/test-create/templates"),
                PathBuf::from("/work/templates"),
            ]
        );
    }

    #[test]
    fn test_candidates_without_exe_dir_or_override() {
        let candidates =
            candidate_paths_with_override(&TestProduct, None, None, Path::new("/work"));
        assert_eq!(candidates, vec![PathBuf::from("/work/templates")]);
    }

    #[test]
    fn test_resolve_prefers_earlier_candidate() {
        let tmp = tempfile::tempdir().unwrap();
        let first = tmp.path().join("first");
        let second = tmp.path().join("second");
        fs::create_dir(&first).unwrap();
        fs::create_dir(&second).unwrap();

        let resolved = resolve(&[first.clone(), second]).unwrap();
        assert_eq!(resolved, first);
    }

    #[test]
    fn test_resolve_skips_missing_and_file_candidates() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing");
        let file = tmp.path().join("file");
        let dir = tmp.path().join("dir");
        fs::write(&file, "not a directory").unwrap();
        fs::create_dir(&dir).unwrap();

        let resolved = resolve(&[missing, file, dir.clone()]).unwrap();
        assert_eq!(resolved, dir);
    }

    #[test]
    fn test_resolve_fails_when_nothing_exists() {
        let tmp = tempfile::tempdir().unwrap();
        let candidates = vec![tmp.path().join("a"), tmp.path().join("b")];

        let err = resolve(&candidates).unwrap_err();
        match &err {
            ScaffoldError::TemplateNotFound { searched } => assert_eq!(searched, &candidates),
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("Template directory not found"));
    }

    #[test]
    fn test_absolutize() {
        assert_eq!(
            absolutize(Path::new("/abs/t"), Path::new("/cwd")),
            PathBuf::from("/abs/t")
        );
        assert_eq!(
            absolutize(Path::new("rel/t"), Path::new("/cwd")),
            PathBuf::from("/cwd/rel/t")
        );
    }
}
