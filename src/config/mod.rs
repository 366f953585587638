#[cfg(feature = "cli")]
pub mod cli;

use crate::core::contract::require_non_blank;
use crate::utils::error::{CommonsError, Result};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommonsConfig {
    pub logging: LoggingConfig,
    pub generate: GenerateConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub verbose: bool,
    pub json: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    pub delimiter: Option<String>,
}

impl CommonsConfig {
    /// Loads settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CommonsError::config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses settings from TOML text after `${VAR}` substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        let config: Self = toml::from_str(&processed_content)
            .map_err(|e| CommonsError::config(format!("TOML parsing error: {}", e)))?;
        tracing::debug!(?config, "loaded settings");
        Ok(config)
    }

    // Unknown variables are left untouched.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(delimiter) = &self.generate.delimiter {
            require_non_blank(delimiter.as_str(), "generate.delimiter is blank", &[])?;
        }
        Ok(())
    }

    pub fn delimiter(&self) -> Option<&str> {
        self.generate.delimiter.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorCategory;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = CommonsConfig::from_toml_str("").unwrap();
        assert_eq!(config, CommonsConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parses_sections() {
        let config = CommonsConfig::from_toml_str(
            r#"
            [logging]
            verbose = true

            [generate]
            delimiter = ";"
            "#,
        )
        .unwrap();
        assert!(config.logging.verbose);
        assert!(!config.logging.json);
        assert_eq!(config.delimiter(), Some(";"));
    }

    #[test]
    fn test_unknown_env_var_is_kept() {
        let config = CommonsConfig::from_toml_str(
            "[generate]\ndelimiter = \"${NULLSAFE_COMMONS_SURELY_UNSET_VAR}\"",
        )
        .unwrap();
        assert_eq!(config.delimiter(), Some("${NULLSAFE_COMMONS_SURELY_UNSET_VAR}"));
    }

    #[test]
    fn test_blank_delimiter_is_rejected() {
        let config = CommonsConfig::from_toml_str("[generate]\ndelimiter = \"\"").unwrap();
        let err = config.validate().unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Argument);
    }

    #[test]
    fn test_malformed_toml() {
        let err = CommonsConfig::from_toml_str("[logging\nverbose = ").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Config);
    }
}
