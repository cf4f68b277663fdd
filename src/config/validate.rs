//! Config validation logic.
//! Rejects values that would make a utility misbehave (zero batch size, blank prefixes, ...).

use tracing::{debug, error};

use crate::errors::MediaDirError;

use super::types::{Config, ExtensionFilter};

impl Config {
    /// Validate ranges and required values. Returns the first problem found.
    pub fn validate(&self) -> Result<(), MediaDirError> {
        if self.batch_size == 0 {
            return Err(invalid("batch_size must be at least 1"));
        }
        if self.commit_prefix.trim().is_empty() {
            return Err(invalid("commit_prefix must not be empty"));
        }
        if self.default_prefix.is_empty() {
            return Err(invalid("default_prefix must not be empty"));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(invalid("output_path must not be empty"));
        }
        ensure_extensions(&self.extension_filter, "extension_filter")?;
        ensure_extensions(&self.publish_extensions, "publish_extensions")?;
        if self.publish_extensions.is_empty() {
            return Err(invalid("publish_extensions needs at least one extension"));
        }

        debug!(
            batch_size = self.batch_size,
            manifest = %self.output_path.display(),
            filter = %self.extension_filter,
            publish = %self.publish_extensions,
            "Config validated"
        );
        Ok(())
    }
}

/// Every extension needs something after the dot.
fn ensure_extensions(filter: &ExtensionFilter, name: &str) -> Result<(), MediaDirError> {
    if let Some(bad) = filter.extensions().iter().find(|e| e.len() < 2) {
        return Err(invalid(&format!("{name} contains an empty extension '{bad}'")));
    }
    Ok(())
}

fn invalid(msg: &str) -> MediaDirError {
    error!("Invalid configuration: {msg}");
    MediaDirError::InvalidConfig(msg.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        Config::default().validate().unwrap();
    }

    #[test]
    fn zero_batch_size_rejected() {
        let cfg = Config {
            batch_size: 0,
            ..Default::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, MediaDirError::InvalidConfig(_)));
        assert!(err.to_string().contains("batch_size"));
    }

    #[test]
    fn bare_dot_extension_rejected() {
        let cfg = Config {
            extension_filter: ExtensionFilter::new(["."]),
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn publish_needs_an_extension() {
        let cfg = Config {
            publish_extensions: ExtensionFilter::any(),
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }
}
