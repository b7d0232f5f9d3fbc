//! Configuration with multi-source loading.
//!
//! Priority: CLI > Environment (`TAGBOX_*`) > `tagbox.config.json` > Defaults

mod loading;
mod validation;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tagbox::{DEFAULT_MAX_FIX_PASSES, Linter, LinterOptions};

pub use loading::CONFIG_FILE_NAME;

/// tagbox configuration - loaded from tagbox.config.json, env or CLI args.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TagboxConfig {
    /// Files or directories to lint, relative to the working directory
    #[serde(default = "default_include")]
    pub include: Vec<PathBuf>,

    /// File extensions to lint, without the leading dot
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Upper bound on lint/fix rounds per file
    #[serde(default = "default_max_fix_passes")]
    pub max_fix_passes: usize,
}

impl Default for TagboxConfig {
    fn default() -> Self {
        Self {
            include: default_include(),
            extensions: default_extensions(),
            max_fix_passes: default_max_fix_passes(),
        }
    }
}

impl TagboxConfig {
    /// Build the linter these settings describe
    pub fn linter(&self) -> Linter {
        Linter::new().with_options(LinterOptions {
            max_fix_passes: self.max_fix_passes,
        })
    }

    /// Whether a file with this extension should be linted
    pub fn accepts_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e == ext)
    }
}

pub fn default_include() -> Vec<PathBuf> {
    vec![PathBuf::from(".")]
}

pub fn default_extensions() -> Vec<String> {
    ["js", "jsx", "tsx"].into_iter().map(String::from).collect()
}

pub fn default_max_fix_passes() -> usize {
    DEFAULT_MAX_FIX_PASSES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TagboxConfig::default();
        assert_eq!(config.include, vec![PathBuf::from(".")]);
        assert_eq!(config.extensions, vec!["js", "jsx", "tsx"]);
        assert_eq!(config.max_fix_passes, 10);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: TagboxConfig = serde_json::from_str(r#"{ "include": ["src"] }"#).unwrap();
        assert_eq!(config.include, vec![PathBuf::from("src")]);
        assert_eq!(config.extensions, default_extensions());
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result: Result<TagboxConfig, _> = serde_json::from_str(r#"{ "rules": {} }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_accepts_extension() {
        let config = TagboxConfig::default();
        assert!(config.accepts_extension("tsx"));
        assert!(!config.accepts_extension("ts"));
    }

    #[test]
    fn test_linter_uses_configured_passes() {
        let config = TagboxConfig {
            max_fix_passes: 3,
            ..TagboxConfig::default()
        };
        assert_eq!(config.linter().options().max_fix_passes, 3);
    }
}
