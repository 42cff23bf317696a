mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config).with_context(|| format!("Invalid config file: {:?}", path))?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = ["./flixgate.toml", "~/.config/flixgate/config.toml"];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> fg_core::Result<()> {
    if let Some(template) = &config.player.manifest_template {
        if template.trim().is_empty() {
            return Err(fg_core::Error::Config(
                "player.manifest_template cannot be empty".into(),
            ));
        }
    }

    let mut seen = HashSet::new();
    for addon in &config.addons {
        if addon.id.trim().is_empty() {
            return Err(fg_core::Error::Config("Addon id cannot be empty".into()));
        }
        if !seen.insert(addon.id.as_str()) {
            return Err(fg_core::Error::Config(format!(
                "Addon '{}' is configured more than once",
                addon.id
            )));
        }
        if addon.bypass && (addon.format.is_some() || addon.quality.is_some()) {
            tracing::warn!(
                "Addon '{}' bypasses the manifest template; format/quality overrides are ignored",
                addon.id
            );
        }
    }

    Ok(())
}
