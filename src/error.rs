use thiserror::Error;

/// Errors that abort a run before any probe is sent.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Invalid target URL: {0}")]
    InvalidTarget(String),

    #[error("Invalid protocol type")]
    InvalidProtocol(String),
}

/// Errors raised while loading the YAML defaults file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML in config file {path}")]
    Yaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}
