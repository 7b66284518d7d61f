//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("nblink.toml"),
            Error::new(ErrorKind::NotFound, "no such file"),
        );
        assert!(format!("{io_err}").contains("nblink.toml"));

        let validation_err = ConfigError::Validation("bad prefix".to_string());
        assert!(format!("{validation_err}").contains("bad prefix"));
    }
}
