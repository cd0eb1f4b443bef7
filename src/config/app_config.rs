use std::env;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::ConfigError;

use super::probe_config::ProbeDefaults;

const DEFAULT_CONFIG_FILE: &str = "tcprobe.yml";

pub struct AppConfig {
    pub config_file: String,
    pub defaults: ProbeDefaults,
}

/// Load the application configuration.
/// The YAML file named by the `CONFIG_FILE` environment variable (or `tcprobe.yml`)
/// supplies default probe settings. A missing file is not an error.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let config_file =
        env::var("CONFIG_FILE").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
    let defaults = load_defaults(Path::new(&config_file))?;

    log::info!("Using probe defaults from {}: {:?}", config_file, defaults);

    Ok(AppConfig {
        config_file,
        defaults,
    })
}

/// Read probe defaults from a YAML file, returning empty defaults when the file does not exist.
pub fn load_defaults(path: &Path) -> Result<ProbeDefaults, ConfigError> {
    let config_str = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No config file at {}, using no defaults", path.display());
            return Ok(ProbeDefaults::default());
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.display().to_string(),
                source,
            });
        }
    };

    if config_str.trim().is_empty() {
        return Ok(ProbeDefaults::default());
    }

    serde_yaml::from_str(&config_str).map_err(|source| ConfigError::Yaml {
        path: path.display().to_string(),
        source,
    })
}
