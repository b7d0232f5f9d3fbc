use crate::config::TagboxConfig;
use crate::error::{ConfigError, Result};

impl TagboxConfig {
    /// Validate configuration for logical consistency.
    pub fn validate(&self) -> Result<()> {
        if self.include.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "include".to_string(),
                value: "[]".to_string(),
                hint: "Provide at least one file or directory".to_string(),
            }
            .into());
        }

        if self.extensions.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "extensions".to_string(),
                value: "[]".to_string(),
                hint: "Provide at least one extension, e.g. [\"jsx\", \"tsx\"]".to_string(),
            }
            .into());
        }

        for ext in &self.extensions {
            validate_extension(ext)?;
        }

        if self.max_fix_passes == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_fix_passes".to_string(),
                value: "0".to_string(),
                hint: "At least one pass is needed to apply fixes".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

fn validate_extension(ext: &str) -> Result<()> {
    let hint = if ext.is_empty() {
        "Extension cannot be empty"
    } else if ext.starts_with('.') {
        "Write extensions without the leading dot"
    } else if !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        "Extensions may only contain letters and digits"
    } else {
        return Ok(());
    };

    Err(ConfigError::InvalidValue {
        field: "extensions".to_string(),
        value: ext.to_string(),
        hint: hint.to_string(),
    }
    .into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;

    fn invalid_field(result: Result<()>) -> String {
        match result {
            Err(CliError::Config(ConfigError::InvalidValue { field, .. })) => field,
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(TagboxConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_include_is_rejected() {
        let config = TagboxConfig {
            include: vec![],
            ..TagboxConfig::default()
        };
        assert_eq!(invalid_field(config.validate()), "include");
    }

    #[test]
    fn test_zero_passes_is_rejected() {
        let config = TagboxConfig {
            max_fix_passes: 0,
            ..TagboxConfig::default()
        };
        assert_eq!(invalid_field(config.validate()), "max_fix_passes");
    }

    #[test]
    fn test_extensions_are_checked() {
        for bad in ["", ".tsx", "j*x"] {
            let config = TagboxConfig {
                extensions: vec![bad.to_string()],
                ..TagboxConfig::default()
            };
            assert_eq!(invalid_field(config.validate()), "extensions", "{bad:?}");
        }

        let empty = TagboxConfig {
            extensions: vec![],
            ..TagboxConfig::default()
        };
        assert_eq!(invalid_field(empty.validate()), "extensions");
    }
}
