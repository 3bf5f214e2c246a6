//! Word-list discovery using glob

use super::FileReader;
use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::collections::HashSet;
use std::path::PathBuf;

/// Word-list files matched by `patterns`
///
/// Files keep the order their patterns were given in, each pattern's matches
/// in glob order. A file matched twice is read once, at its first position,
/// so words come out in the order the user listed them.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for pattern in patterns {
        let matches = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;
        for entry in matches {
            let path = entry.with_context(|| format!("Error resolving pattern: {pattern}"))?;
            if path.is_file() && seen.insert(path.clone()) {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        return Err(CliError::FileNotFound(patterns.join(", ")).into());
    }
    Ok(files)
}

/// Words from every file matched by `patterns`, in file order
pub fn collect_words(patterns: &[String]) -> Result<Vec<String>> {
    let mut words = Vec::new();
    for path in resolve_patterns(patterns)? {
        let before = words.len();
        words.extend(FileReader::read_words(&path)?);
        log::debug!("Read {} word(s) from {}", words.len() - before, path.display());
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_repeated_pattern_reads_each_file_once() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "rāma").unwrap();
        fs::write(dir.path().join("a.txt"), "deva").unwrap();
        fs::create_dir(dir.path().join("sub.txt")).unwrap();

        let pattern = format!("{}/*.txt", dir.path().display());
        let files = resolve_patterns(&[pattern.clone(), pattern]).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("a.txt"));
    }

    #[test]
    fn test_words_follow_pattern_order() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "deva\nagni\n").unwrap();
        fs::write(dir.path().join("z.txt"), "# first\nरामः\n").unwrap();

        let first = dir.path().join("z.txt").display().to_string();
        let all = format!("{}/*.txt", dir.path().display());
        let words = collect_words(&[first, all]).unwrap();
        assert_eq!(words, vec!["रामः", "deva", "agni"]);
    }

    #[test]
    fn test_no_match_is_error() {
        let dir = TempDir::new().unwrap();
        let pattern = format!("{}/*.none", dir.path().display());
        let err = collect_words(&[pattern]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = resolve_patterns(&["[".to_string()]).unwrap_err();
        assert!(err.to_string().contains("Invalid file pattern"));
    }
}
