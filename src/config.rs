use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Keywords used when a configuration does not name any.
pub const DEFAULT_KEYWORDS: [&str; 4] = ["sop", "admin", "process", "procedure"];

/// Caller-supplied crawl configuration.
///
/// Every field is optional. Deserializes from TOML (or any serde format):
///
/// ```rust
/// let config = kwcrawl::CrawlConfig::from_toml_str(r#"
///     keywords = ["Runbook", "SOP"]
///     max_depth = 2
///     file_extensions = [".md", "txt"]
/// "#).unwrap();
///
/// assert_eq!(config.max_depth, Some(2));
/// assert!(!config.include_directories);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrawlConfig {
    /// Case-insensitive substrings to look for. [`DEFAULT_KEYWORDS`] when `None`.
    pub keywords: Option<Vec<String>>,

    /// Deepest directory level to list. Root = 0. Unbounded when `None`.
    pub max_depth: Option<usize>,

    /// Report matching directories as well as files.
    pub include_directories: bool,

    /// Only report files with one of these extensions (e.g. `".md"`).
    /// A missing leading dot is added. Never applied to directories.
    pub file_extensions: Option<Vec<String>>,
}

impl CrawlConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Normalize once at call start.
    pub(crate) fn resolve(&self) -> ResolvedConfig {
        let keywords = match &self.keywords {
            Some(list) => normalize_keywords(list.iter().map(String::as_str)),
            None       => normalize_keywords(DEFAULT_KEYWORDS),
        };

        let file_extensions = self.file_extensions.as_ref().map(|list| {
            list.iter()
                .filter(|ext| !ext.is_empty())
                .map(|ext| {
                    if ext.starts_with('.') {
                        ext.clone()
                    } else {
                        format!(".{ext}")
                    }
                })
                .collect()
        });

        ResolvedConfig {
            keywords,
            max_depth: self.max_depth,
            include_directories: self.include_directories,
            file_extensions,
        }
    }
}

/// A [`CrawlConfig`] with defaults applied and keywords lower-cased.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedConfig {
    pub keywords:            Vec<String>,
    pub max_depth:           Option<usize>,
    pub include_directories: bool,
    pub file_extensions:     Option<Vec<String>>,
}

impl ResolvedConfig {
    pub fn within_depth(&self, depth: usize) -> bool {
        match self.max_depth {
            Some(max) => depth <= max,
            None      => true,
        }
    }

    pub fn allows_extension(&self, extension: Option<&str>) -> bool {
        match (&self.file_extensions, extension) {
            (None, _)             => true,
            (Some(list), Some(e)) => list.iter().any(|allowed| allowed == e),
            (Some(_), None)       => false,
        }
    }
}

/// Lower-case, drop blanks, drop duplicates keeping the first occurrence.
fn normalize_keywords<'a>(raw: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for kw in raw {
        let kw = kw.trim().to_lowercase();
        if !kw.is_empty() && !out.contains(&kw) {
            out.push(kw);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_keywords_omitted() {
        let resolved = CrawlConfig::default().resolve();
        assert_eq!(resolved.keywords, DEFAULT_KEYWORDS.to_vec());
        assert_eq!(resolved.max_depth, None);
        assert!(!resolved.include_directories);
        assert!(resolved.file_extensions.is_none());
    }

    #[test]
    fn keywords_are_lowercased_and_deduplicated() {
        let config = CrawlConfig {
            keywords: Some(vec!["SOP".into(), " Admin ".into(), "sop".into(), "".into()]),
            ..Default::default()
        };
        assert_eq!(config.resolve().keywords, vec!["sop", "admin"]);
    }

    #[test]
    fn explicit_empty_keywords_stay_empty() {
        let config = CrawlConfig {
            keywords: Some(Vec::new()),
            ..Default::default()
        };
        assert!(config.resolve().keywords.is_empty());
    }

    #[test]
    fn extensions_gain_leading_dot() {
        let config = CrawlConfig {
            file_extensions: Some(vec!["md".into(), ".txt".into()]),
            ..Default::default()
        };
        let resolved = config.resolve();
        assert!(resolved.allows_extension(Some(".md")));
        assert!(resolved.allows_extension(Some(".txt")));
        assert!(!resolved.allows_extension(Some(".rs")));
        assert!(!resolved.allows_extension(None));
    }

    #[test]
    fn depth_bound_is_inclusive() {
        let config = CrawlConfig {
            max_depth: Some(1),
            ..Default::default()
        };
        let resolved = config.resolve();
        assert!(resolved.within_depth(0));
        assert!(resolved.within_depth(1));
        assert!(!resolved.within_depth(2));
        assert!(CrawlConfig::default().resolve().within_depth(usize::MAX));
    }

    #[test]
    fn parses_toml() {
        let config = CrawlConfig::from_toml_str(
            "keywords = [\"runbook\"]\ninclude_directories = true\n",
        )
        .unwrap();
        assert_eq!(config.keywords, Some(vec!["runbook".to_string()]));
        assert!(config.include_directories);
        assert_eq!(config.max_depth, None);
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = CrawlConfig::from_toml_str("max_depth = \"deep\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CrawlConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
