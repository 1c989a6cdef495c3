//! Options for the wiki link constructs.
//!
//! The alias divider is the only knob. It can be set in code or loaded from
//! a small TOML file:
//!
//! ```toml
//! alias_divider = "::"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Divider used when none (or an empty one) is configured.
pub const DEFAULT_ALIAS_DIVIDER: &str = "|";

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("Failed to read options file at {options_path}: {source}")]
    OptionsReadError {
        options_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse options file at {options_path}: {source}")]
    OptionsFileParseError {
        options_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to parse options: {source}")]
    OptionsParseError { source: toml::de::Error },

    /// The lexer never hands these characters to a scanner as themselves,
    /// so a divider containing one could never match.
    #[error("Alias divider {divider:?} contains a line ending, tab or NUL")]
    UnmatchableDivider { divider: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WikiLinkOptions {
    pub alias_divider: String,
}

impl Default for WikiLinkOptions {
    fn default() -> Self {
        Self {
            alias_divider: DEFAULT_ALIAS_DIVIDER.to_string(),
        }
    }
}

impl WikiLinkOptions {
    /// Options with a custom divider, validated.
    pub fn with_alias_divider(divider: impl Into<String>) -> Result<Self, OptionsError> {
        let options = Self {
            alias_divider: divider.into(),
        };
        options.validate()?;
        Ok(options)
    }

    /// The divider literal scanners match. Empty falls back to the default.
    pub fn alias_marker(&self) -> &str {
        if self.alias_divider.is_empty() {
            DEFAULT_ALIAS_DIVIDER
        } else {
            &self.alias_divider
        }
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        let divider = self.alias_marker();
        if divider.contains(['\r', '\n', '\t', '\0']) {
            return Err(OptionsError::UnmatchableDivider {
                divider: divider.to_string(),
            });
        }
        Ok(())
    }

    pub fn from_toml_str(content: &str) -> Result<Self, OptionsError> {
        let options: WikiLinkOptions =
            toml::from_str(content).map_err(|source| OptionsError::OptionsParseError { source })?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file. A missing file is not an error.
    pub fn load_from_path<P: AsRef<Path>>(options_path: P) -> Result<Option<Self>, OptionsError> {
        let options_path = options_path.as_ref();
        if !options_path.exists() {
            log::debug!("No options file at {}", options_path.display());
            return Ok(None);
        }

        let content = std::fs::read_to_string(options_path).map_err(|source| {
            OptionsError::OptionsReadError {
                options_path: options_path.to_path_buf(),
                source,
            }
        })?;

        let options: WikiLinkOptions =
            toml::from_str(&content).map_err(|source| OptionsError::OptionsFileParseError {
                options_path: options_path.to_path_buf(),
                source,
            })?;
        options.validate()?;

        log::debug!(
            "Loaded alias divider {:?} from {}",
            options.alias_marker(),
            options_path.display()
        );
        Ok(Some(options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    #[test]
    fn default_divider_is_pipe() {
        assert_eq!(WikiLinkOptions::default().alias_marker(), "|");
    }

    #[test]
    fn empty_divider_falls_back_to_default() {
        let options = WikiLinkOptions::with_alias_divider("").unwrap();
        assert_eq!(options.alias_marker(), "|");
    }

    #[test]
    fn custom_divider_is_kept() {
        let options = WikiLinkOptions::with_alias_divider("::").unwrap();
        assert_eq!(options.alias_marker(), "::");
    }

    #[rstest]
    #[case("\n")]
    #[case("a\r")]
    #[case("\t")]
    #[case("\0")]
    fn unmatchable_dividers_are_rejected(#[case] divider: &str) {
        let err = WikiLinkOptions::with_alias_divider(divider).unwrap_err();
        assert!(matches!(err, OptionsError::UnmatchableDivider { .. }));
    }

    #[test]
    fn bracket_divider_splits_target_from_alias() {
        let options = WikiLinkOptions::with_alias_divider("]").unwrap();
        let tree = crate::parse_with("[[a]b]]", &options);
        let link = crate::ast::wiki_links(&tree).next().unwrap();
        assert_eq!(link.target(), "a");
        assert_eq!(link.alias().as_deref(), Some("b"));
    }

    #[test]
    fn from_toml_str_reads_divider() {
        let options = WikiLinkOptions::from_toml_str("alias_divider = \"→\"\n").unwrap();
        assert_eq!(options.alias_marker(), "→");
    }

    #[test]
    fn from_toml_str_missing_field_uses_default() {
        let options = WikiLinkOptions::from_toml_str("").unwrap();
        assert_eq!(options, WikiLinkOptions::default());
    }

    #[test]
    fn from_toml_str_rejects_unknown_fields() {
        let err = WikiLinkOptions::from_toml_str("divider = \":\"\n").unwrap_err();
        assert!(matches!(err, OptionsError::OptionsParseError { .. }));
    }

    #[test]
    fn serialization_roundtrip() {
        let options = WikiLinkOptions::with_alias_divider("::").unwrap();
        let toml_str = toml::to_string(&options).unwrap();
        let back = WikiLinkOptions::from_toml_str(&toml_str).unwrap();
        assert_eq!(options, back);
    }

    #[test]
    fn load_from_missing_path_is_none() {
        let dir = TempDir::new().unwrap();
        let loaded = WikiLinkOptions::load_from_path(dir.path().join("nope.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn load_from_path_reads_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wikilink.toml");
        std::fs::write(&path, "alias_divider = \"#\"\n").unwrap();

        let loaded = WikiLinkOptions::load_from_path(&path).unwrap().unwrap();
        assert_eq!(loaded.alias_marker(), "#");
    }

    #[test]
    fn load_from_path_reports_parse_errors_with_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "alias_divider = ").unwrap();

        let err = WikiLinkOptions::load_from_path(&path).unwrap_err();
        match err {
            OptionsError::OptionsFileParseError { options_path, .. } => {
                assert_eq!(options_path, path)
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn load_from_path_validates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "alias_divider = \"\\t\"\n").unwrap();

        let err = WikiLinkOptions::load_from_path(&path).unwrap_err();
        assert!(matches!(err, OptionsError::UnmatchableDivider { .. }));
    }
}
