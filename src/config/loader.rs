use std::fs;
use std::path::{Path, PathBuf};

use super::FeasibilityConfig;
use crate::errors::{Error, Result};

/// File name searched for in the working directory and its ancestors
pub const CONFIG_FILE_NAME: &str = ".factibilidad.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<FeasibilityConfig> {
    let mut config = toml::from_str::<FeasibilityConfig>(contents)?;

    for message in config.sanitize() {
        log::warn!("Invalid configuration: {}. Using defaults for that table.", message);
    }

    Ok(config)
}

/// Load a configuration file, failing on I/O or parse errors.
pub fn load_config_from(path: &Path) -> Result<FeasibilityConfig> {
    let contents = fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
    let config = parse_and_validate_config(&contents).map_err(|e| match e {
        Error::TomlDe(source) => Error::config_with_path(source.to_string(), path),
        other => other,
    })?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Pure function to try loading config from a specific path
fn try_load_config_from_path(config_path: &Path) -> Option<FeasibilityConfig> {
    if !config_path.is_file() {
        return None;
    }

    match load_config_from(config_path) {
        Ok(config) => Some(config),
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Per-user configuration file, e.g. `~/.config/factibilidad/config.toml`.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("factibilidad").join("config.toml"))
}

/// Resolve the configuration to use.
///
/// An explicit path must load. Otherwise the nearest `.factibilidad.toml`
/// in `start` or its ancestors wins, then the user config file, then the
/// defaults.
pub fn load_config(explicit: Option<&Path>, start: &Path) -> Result<FeasibilityConfig> {
    if let Some(path) = explicit {
        return load_config_from(path);
    }

    let found = directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .or_else(|| user_config_path().and_then(|path| try_load_config_from_path(&path)));

    Ok(found.unwrap_or_else(|| {
        log::debug!(
            "No config found after checking {} directories. Using default config.",
            MAX_TRAVERSAL_DEPTH
        );
        FeasibilityConfig::default()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn ancestors_stop_at_depth() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 3).collect();
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("/a/b/c/d"),
                PathBuf::from("/a/b/c"),
                PathBuf::from("/a/b")
            ]
        );
    }

    #[test]
    fn nearest_config_file_wins() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("projects").join("bakery");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[financial]\ndefault_discount_rate = 14.0\n",
        )
        .unwrap();

        let config = load_config(None, &nested).unwrap();
        assert_eq!(config.financial.default_discount_rate, 14.0);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.toml");
        assert!(matches!(
            load_config(Some(&missing), temp.path()),
            Err(Error::Io { .. })
        ));
    }

    #[test]
    fn explicit_malformed_file_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.toml");
        fs::write(&path, "[financial\n").unwrap();

        let err = load_config(Some(&path), temp.path()).unwrap_err();
        assert!(matches!(err, Error::Config { path: Some(_), .. }));
    }

    #[test]
    fn invalid_weights_fall_back_to_defaults() {
        let config = parse_and_validate_config("[technical_weights]\nengineering = 2.0\n").unwrap();
        assert_eq!(config.technical_weights.engineering, 0.25);
    }
}
