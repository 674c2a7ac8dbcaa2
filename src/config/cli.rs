use crate::config::toml_config::TomlConfig;
use crate::config::RunConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_config_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "greet-calc")]
#[command(about = "Print a greeting and the sum of two numbers")]
pub struct CliConfig {
    /// Name to greet [default: World]
    #[arg(long)]
    pub name: Option<String>,

    /// Left operand [default: 5]
    #[arg(long, allow_negative_numbers = true)]
    pub lhs: Option<f64>,

    /// Right operand [default: 10]
    #[arg(long, allow_negative_numbers = true)]
    pub rhs: Option<f64>,

    /// Path to a TOML file with a [run] table
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Layers flags over the TOML file (if any) over the built-in defaults.
    pub fn resolve(&self) -> Result<RunConfig> {
        let base = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path);
                TomlConfig::from_file(path)?.to_run_config()
            }
            None => RunConfig::default(),
        };

        Ok(base.with_overrides(self.name.as_deref(), self.lhs, self.rhs))
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_config_path("config", path)?;
        }
        Ok(())
    }
}
