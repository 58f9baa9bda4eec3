//! Application configuration module
//!
//! Provides the configuration shared by the server binary and the router
//! builder. Values come from CLI flags / environment in the binary and are
//! validated once through [`AppConfigBuilder::build`].

use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

/// Default listen address
pub const DEFAULT_ADDR: &str = "0.0.0.0:4000";

/// Default SQLite data source
pub const DEFAULT_DATABASE_URL: &str = "sqlite://snipbox.db";

/// Session lifetime counted from issuance or renewal
pub const DEFAULT_SESSION_LIFETIME: Duration = Duration::from_secs(12 * 60 * 60);

/// Upper bound on handler time before the request is abandoned
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP listen address
    pub addr: SocketAddr,
    /// Database connection string
    pub database_url: String,
    /// Expose server error details to the client
    pub debug: bool,
    /// Session cookie lifetime
    pub session_lifetime: Duration,
    /// Mark the session cookie `Secure`
    pub secure_cookies: bool,
    /// Handler timeout
    pub request_timeout: Duration,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::MissingValue("database_url"));
        }
        if self.session_lifetime.is_zero() {
            return Err(ConfigError::InvalidDuration("session_lifetime"));
        }
        if self.request_timeout.is_zero() {
            return Err(ConfigError::InvalidDuration("request_timeout"));
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 4000)),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            debug: false,
            session_lifetime: DEFAULT_SESSION_LIFETIME,
            secure_cookies: true,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    addr: Option<String>,
    database_url: Option<String>,
    debug: bool,
    session_lifetime: Option<Duration>,
    secure_cookies: Option<bool>,
    request_timeout: Option<Duration>,
}

impl AppConfigBuilder {
    /// Set the listen address
    pub fn addr(mut self, addr: impl Into<String>) -> Self {
        self.addr = Some(addr.into());
        self
    }

    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Enable or disable debug error pages
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Set the session lifetime
    pub fn session_lifetime(mut self, lifetime: Duration) -> Self {
        self.session_lifetime = Some(lifetime);
        self
    }

    /// Set whether the session cookie carries the `Secure` attribute
    pub fn secure_cookies(mut self, secure: bool) -> Self {
        self.secure_cookies = Some(secure);
        self
    }

    /// Set the handler timeout
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let addr = match self.addr {
            Some(addr) => addr
                .parse::<SocketAddr>()
                .map_err(|_| ConfigError::InvalidAddress(addr))?,
            None => defaults.addr,
        };

        let config = AppConfig {
            addr,
            database_url: self.database_url.unwrap_or(defaults.database_url),
            debug: self.debug,
            session_lifetime: self.session_lifetime.unwrap_or(defaults.session_lifetime),
            secure_cookies: self.secure_cookies.unwrap_or(defaults.secure_cookies),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid listen address: {0}")]
    InvalidAddress(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("duration must be non-zero: {0}")]
    InvalidDuration(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_defaults() {
        let config = AppConfig::builder().build().unwrap();
        assert_eq!(config.addr.port(), 4000);
        assert_eq!(config.session_lifetime, Duration::from_secs(43_200));
        assert!(config.secure_cookies);
        assert!(!config.debug);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::builder()
            .addr("127.0.0.1:8080")
            .database_url("sqlite::memory:")
            .debug(true)
            .build()
            .unwrap();
        assert_eq!(config.addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.database_url, "sqlite::memory:");
        assert!(config.debug);
    }

    #[test]
    fn test_invalid_address() {
        let result = AppConfig::builder().addr(":4000").build();
        assert_matches!(result, Err(ConfigError::InvalidAddress(_)));
    }

    #[test]
    fn test_blank_database_url() {
        let result = AppConfig::builder().database_url("  ").build();
        assert_matches!(result, Err(ConfigError::MissingValue("database_url")));
    }

    #[test]
    fn test_zero_lifetime() {
        let result = AppConfig::builder()
            .session_lifetime(Duration::ZERO)
            .build();
        assert_matches!(result, Err(ConfigError::InvalidDuration("session_lifetime")));
    }
}
