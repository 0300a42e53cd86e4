//! Errors raised while assembling a [`crate::GardenConfig`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A provider failed to parse, or the merged value did not fit the struct.
    #[error("garden config could not be read: {0}")]
    Figment(#[from] figment::Error),

    /// The merged config parsed but a value is unusable.
    #[error("garden config `{field}` is invalid: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::ConfigError;

    #[test]
    fn invalid_value_names_the_field() {
        let err = ConfigError::InvalidValue {
            field: "general.default_limit".to_string(),
            reason: "must be at least 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "garden config `general.default_limit` is invalid: must be at least 1"
        );
    }
}
