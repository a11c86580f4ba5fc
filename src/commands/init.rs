use crate::config::{FeasibilityConfig, CONFIG_FILE_NAME};
use crate::io;
use anyhow::Result;
use std::path::Path;

const HEADER: &str = "# Factibilidad configuration
# Every table is optional; missing values use these defaults.

";

/// Default configuration rendered as commented TOML.
pub fn default_config_toml() -> Result<String> {
    let body = toml::to_string_pretty(&FeasibilityConfig::default())?;
    Ok(format!("{HEADER}{body}"))
}

pub fn init_config(force: bool) -> Result<()> {
    init_config_at(Path::new(CONFIG_FILE_NAME), force)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");
    Ok(())
}

pub fn init_config_at(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(config_path, &default_config_toml()?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_and_validate_config;
    use tempfile::TempDir;

    #[test]
    fn default_file_parses_back_to_defaults() {
        let text = default_config_toml().unwrap();
        assert!(text.starts_with("# Factibilidad configuration"));
        assert_eq!(
            parse_and_validate_config(&text).unwrap(),
            FeasibilityConfig::default()
        );
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        init_config_at(&path, false).unwrap();

        assert!(init_config_at(&path, false).is_err());
        assert!(init_config_at(&path, true).is_ok());
    }
}
