//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Resolve file patterns to actual file paths
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolves_and_dedups() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "好").unwrap();
        fs::write(dir.path().join("a.txt"), "你").unwrap();
        fs::create_dir(dir.path().join("sub.txt")).unwrap();

        let pattern = dir.path().join("*.txt").display().to_string();
        let files = resolve_patterns(&[pattern.clone(), pattern]).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("a.txt"));
    }

    #[test]
    fn test_no_match_fails() {
        let dir = TempDir::new().unwrap();
        let pattern = dir.path().join("*.md").display().to_string();
        assert!(resolve_patterns(&[pattern]).is_err());
    }

    #[test]
    fn test_invalid_pattern() {
        let error = resolve_patterns(&["[".to_string()]).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<CliError>(),
            Some(CliError::InvalidPattern(_))
        ));
    }
}
