use crate::utils::error::{GreetCalcError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// A `--config` argument must name a `.toml` file.
pub fn validate_config_path(field_name: &str, path: &str) -> Result<()> {
    let reject = |reason: &str| GreetCalcError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: path.escape_default().to_string(),
        reason: reason.to_string(),
    };

    if path.trim().is_empty() {
        return Err(reject("config path is blank"));
    }
    if path.contains('\0') {
        return Err(reject("config path contains a NUL byte"));
    }

    match Path::new(path).extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(()),
        Some(ext) => Err(reject(&format!("expected a .toml file, got .{}", ext))),
        None => Err(reject("expected a .toml file")),
    }
}
