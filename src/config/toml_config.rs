use crate::config::RunConfig;
use crate::utils::error::{GreetCalcError, Result};
use serde::Deserialize;
use std::path::Path;

/// On-disk configuration. Every key is optional; missing keys fall back to
/// the built-in defaults.
///
/// ```toml
/// [run]
/// name = "Ferris"
/// lhs = 2
/// rhs = 40
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub run: Option<RunSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunSection {
    pub name: Option<String>,
    pub lhs: Option<f64>,
    pub rhs: Option<f64>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| GreetCalcError::ConfigError {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_run_config(&self) -> RunConfig {
        match &self.run {
            Some(run) => {
                RunConfig::default().with_overrides(run.name.as_deref(), run.lhs, run.rhs)
            }
            None => RunConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.to_run_config(), RunConfig::default());
    }

    #[test]
    fn test_full_run_section() {
        let config = TomlConfig::from_toml_str(
            r#"
[run]
name = "Ferris"
lhs = 2.5
rhs = -0.5
"#,
        )
        .unwrap();
        let run = config.to_run_config();
        assert_eq!(run.name, "Ferris");
        assert_eq!(run.lhs, 2.5);
        assert_eq!(run.rhs, -0.5);
    }

    #[test]
    fn test_integer_operands_are_accepted() {
        let config = TomlConfig::from_toml_str("[run]\nlhs = 2\nrhs = 40\n").unwrap();
        let run = config.to_run_config();
        assert_eq!(run.name, "World");
        assert_eq!(run.lhs + run.rhs, 42.0);
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let result = TomlConfig::from_toml_str("[run\nname = ");
        assert!(matches!(result, Err(GreetCalcError::TomlError(_))));
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let result = TomlConfig::from_toml_str("[run]\nlhs = \"five\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = TomlConfig::from_file("/definitely/not/here/greet.toml");
        assert!(matches!(result, Err(GreetCalcError::ConfigError { .. })));
    }
}
