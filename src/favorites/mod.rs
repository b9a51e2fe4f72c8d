//! Favorite channel patterns
//!
//! One case-insensitive regular expression per line of a plain text file.
//! Blank lines and `#` comments are ignored. Neither a missing file nor a
//! pattern that fails to compile stops a run.

use regex::{Regex, RegexBuilder};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::errors::{AppError, AppResult};

/// Compiled favorite patterns, matched against display names
#[derive(Debug, Clone, Default)]
pub struct FavoriteMatcher {
    patterns: Vec<Regex>,
}

impl FavoriteMatcher {
    /// Load patterns from an optional file
    ///
    /// No path or a path that does not exist yields an empty matcher. Any
    /// other read failure is reported.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("Favorites file {} not found, continuing without favorites", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(AppError::io(path, e)),
        };

        let matcher = Self::from_lines(&contents);
        info!(
            "Loaded {} favorite patterns from {}",
            matcher.len(),
            path.display()
        );
        Ok(matcher)
    }

    /// Compile one pattern per non-empty, non-comment line, skipping invalid ones
    pub fn from_lines(contents: &str) -> Self {
        let patterns = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| {
                match RegexBuilder::new(line).case_insensitive(true).build() {
                    Ok(regex) => Some(regex),
                    Err(e) => {
                        warn!("Skipping invalid favorite pattern '{}': {}", line, e);
                        None
                    }
                }
            })
            .collect::<Vec<_>>();

        debug!("Compiled {} favorite patterns", patterns.len());
        Self { patterns }
    }

    /// True when any pattern matches somewhere in `name`
    pub fn is_favorite(&self, name: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(name))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_no_path_means_no_favorites() {
        let matcher = FavoriteMatcher::load(None).unwrap();
        assert!(matcher.is_empty());
        assert!(!matcher.is_favorite("KBS1"));
    }

    #[test]
    fn test_missing_file_means_no_favorites() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("favorites.txt");
        let matcher = FavoriteMatcher::load(Some(&missing)).unwrap();
        assert!(matcher.is_empty());
    }

    #[test]
    fn test_comments_blank_lines_and_invalid_patterns_are_skipped() {
        let matcher = FavoriteMatcher::from_lines("# my channels\n\nkbs\n  \n(unclosed\n^cnn$\n");
        assert_eq!(matcher.len(), 2);
        assert!(matcher.is_favorite("KBS1"));
        assert!(matcher.is_favorite("cnn"));
        assert!(!matcher.is_favorite("CNN International"));
        assert!(!matcher.is_favorite("(unclosed"));
    }

    #[test]
    fn test_matching_is_case_insensitive_search() {
        let matcher = FavoriteMatcher::from_lines("Discovery");
        assert!(matcher.is_favorite("DISCOVERY Science HD"));
        assert!(matcher.is_favorite("the discovery channel"));
        assert!(!matcher.is_favorite("Disney"));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("favorites.txt");
        std::fs::write(&path, "kbs\nmbc\n").unwrap();
        let matcher = FavoriteMatcher::load(Some(&path)).unwrap();
        assert_eq!(matcher.len(), 2);
        assert!(matcher.is_favorite("MBC Every1"));
    }
}
