#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

pub const DEFAULT_NAME: &str = "World";
pub const DEFAULT_LHS: f64 = 5.0;
pub const DEFAULT_RHS: f64 = 10.0;

/// Fully resolved inputs for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub name: String,
    pub lhs: f64,
    pub rhs: f64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            lhs: DEFAULT_LHS,
            rhs: DEFAULT_RHS,
        }
    }
}

impl RunConfig {
    /// Replaces each field that has a value in the override layer.
    pub fn with_overrides(mut self, name: Option<&str>, lhs: Option<f64>, rhs: Option<f64>) -> Self {
        if let Some(name) = name {
            self.name = name.to_string();
        }
        if let Some(lhs) = lhs {
            self.lhs = lhs;
        }
        if let Some(rhs) = rhs {
            self.rhs = rhs;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_reproduce_original_run() {
        let config = RunConfig::default();
        assert_eq!(config.name, "World");
        assert_eq!(config.lhs, 5.0);
        assert_eq!(config.rhs, 10.0);
    }

    #[test]
    fn test_with_overrides_partial() {
        let config = RunConfig::default().with_overrides(None, Some(-1.5), None);
        assert_eq!(config.name, "World");
        assert_eq!(config.lhs, -1.5);
        assert_eq!(config.rhs, 10.0);
    }

    #[test]
    fn test_with_overrides_keeps_empty_name() {
        let config = RunConfig::default().with_overrides(Some(""), None, None);
        assert_eq!(config.name, "");
    }
}
