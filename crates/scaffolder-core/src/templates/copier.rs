//! Recursive template copying

use crate::error::ScaffoldError;
use std::path::Path;
use tokio::fs;
use walkdir::WalkDir;

/// Copy every file and directory under `template_dir` into `target_dir`
///
/// Relative structure and file bytes are preserved. Symlinks are followed and
/// their targets copied as regular files. Returns the number of files copied.
pub async fn copy_template(template_dir: &Path, target_dir: &Path) -> Result<usize, ScaffoldError> {
    fs::create_dir_all(target_dir)
        .await
        .map_err(ScaffoldError::io("create directory", target_dir))?;

    let mut copied_files = 0;

    for entry in WalkDir::new(template_dir)
        .follow_links(true)
        .sort_by_file_name()
        .min_depth(1)
    {
        let entry = entry?;
        // WalkDir yields paths rooted at template_dir
        let Ok(relative) = entry.path().strip_prefix(template_dir) else {
            continue;
        };
        let target_path = target_dir.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target_path)
                .await
                .map_err(ScaffoldError::io("create directory", &target_path))?;
        } else {
            if let Some(parent) = target_path.parent() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(ScaffoldError::io("create directory", parent))?;
            }
            fs::copy(entry.path(), &target_path)
                .await
                .map_err(|source| ScaffoldError::Copy {
                    from: entry.path().to_path_buf(),
                    to: target_path.clone(),
                    source,
                })?;
            copied_files += 1;
        }
    }

    Ok(copied_files)
}
