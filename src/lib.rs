pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::{toml_config::TomlConfig, RunConfig};
pub use core::runner::Runner;
pub use domain::calculator::{format_number, Calculator};
pub use domain::greeting::{greet, greet_to, greeting};
pub use utils::error::{GreetCalcError, Result};
