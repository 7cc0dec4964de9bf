//! Configuration validation.
//!
//! Semantic checks on top of what serde already guarantees syntactically.
//! Validation is a pure function and reports all errors, not just the first.

use std::net::SocketAddr;
use thiserror::Error;

use crate::config::schema::ServerConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("bind address '{address}' is not a valid socket address: {reason}")]
    BindAddress { address: String, reason: String },

    #[error("serve root '{root}' does not exist or is not a directory")]
    RootNotDirectory { root: String },

    #[error("index file '{name}' must be a bare file name")]
    IndexFileName { name: String },

    #[error("request timeout must be greater than zero")]
    ZeroRequestTimeout,
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(err) = config.listener.bind_address.parse::<SocketAddr>() {
        errors.push(ValidationError::BindAddress {
            address: config.listener.bind_address.clone(),
            reason: err.to_string(),
        });
    }

    if let Some(root) = &config.serve.root {
        if !root.is_dir() {
            errors.push(ValidationError::RootNotDirectory {
                root: root.display().to_string(),
            });
        }
    }

    let index = &config.serve.index_file;
    if index.is_empty() || index.contains('/') || index.contains('\\') {
        errors.push(ValidationError::IndexFileName {
            name: index.clone(),
        });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
