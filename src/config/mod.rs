//! Configuration loading and management.

mod config_data;
mod fence;
mod markers;

use std::fs;
use std::path::{Path, PathBuf};

pub use config_data::Config;
pub use fence::Fence;
pub use markers::Markers;

use crate::errors::{IncludeError, Result};

/// Standard configuration file names to search for.
const CONFIG_FILES: &[&str] = &["include-code.toml", ".include-code.toml"];

/// Finds the configuration file in the given directory or its parents.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for name in CONFIG_FILES {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Reads configuration from a TOML file.
pub fn read_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| IncludeError::io(path, e))?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    tracing::debug!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Reads configuration, searching from the given directory.
///
/// If no config file is found, returns the default configuration.
pub fn read_config(start_dir: &Path) -> Result<Config> {
    match find_config_file(start_dir) {
        Some(path) => read_config_file(&path),
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_find_config_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("include-code.toml");
        fs::write(&config_path, "").unwrap();

        let found = find_config_file(dir.path()).unwrap();
        assert_eq!(found, config_path);
    }

    #[test]
    fn test_find_hidden_config_file_in_parent() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(".include-code.toml");
        fs::write(&config_path, "").unwrap();

        let subdir = dir.path().join("docs");
        fs::create_dir(&subdir).unwrap();

        let found = find_config_file(&subdir).unwrap();
        assert_eq!(found, config_path);
    }

    #[test]
    fn test_read_config_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("include-code.toml");
        fs::write(
            &config_path,
            r##"
[markers]
comment = "#"

[fence]
language = "python"
attributes = ""
"##,
        )
        .unwrap();

        let config = read_config_file(&config_path).unwrap();
        assert_eq!(config.markers.comment, "#");
        assert_eq!(config.markers.start, "example-start");
        assert_eq!(config.fence.language, "python");
        assert_eq!(config.fence.attributes, "");
    }

    #[test]
    fn test_read_config_file_invalid_toml() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("include-code.toml");
        fs::write(&config_path, "[markers\n").unwrap();

        assert!(matches!(
            read_config_file(&config_path),
            Err(IncludeError::TomlParse(_))
        ));
    }

    #[test]
    fn test_read_config_file_missing() {
        let dir = tempdir().unwrap();
        let result = read_config_file(&dir.path().join("nope.toml"));
        assert!(matches!(result, Err(IncludeError::Io { .. })));
    }

    #[test]
    fn test_read_config_default() {
        let dir = tempdir().unwrap();
        let config = read_config(dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }
}
