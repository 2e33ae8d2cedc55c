//! Errors raised while loading or checking `WkConfig`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or `WK_*` variable could not be read into the config shape.
    #[error("failed to read WaniKani settings: {0}")]
    Figment(#[from] figment::Error),

    /// A setting the client needs has no value.
    #[error("`{section}.{field}` is not set (use {env} or [{section}] {field} in .wanikani/config.toml)")]
    NotConfigured {
        section: &'static str,
        field: &'static str,
        env: &'static str,
    },

    /// A setting has a value the client cannot use.
    #[error("`{field}` {reason}")]
    InvalidValue { field: &'static str, reason: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_token_message_names_the_setting() {
        let err = ConfigError::NotConfigured {
            section: "api",
            field: "token",
            env: "WK_API__TOKEN",
        };
        assert_eq!(
            err.to_string(),
            "`api.token` is not set (use WK_API__TOKEN or [api] token in .wanikani/config.toml)"
        );
    }

    #[test]
    fn invalid_value_message() {
        let err = ConfigError::InvalidValue {
            field: "retry.fallback_wait_secs",
            reason: "must be greater than zero",
        };
        assert_eq!(err.to_string(), "`retry.fallback_wait_secs` must be greater than zero");
    }
}
