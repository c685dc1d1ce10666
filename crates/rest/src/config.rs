//! Server configuration.
//!
//! Configuration comes from the environment (or command line), matching the
//! deployment contract of the backend:
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `MONGO_URL` | (required) | Document store connection string |
//! | `DB_NAME` | (required) | Database name |
//! | `CORS_ORIGINS` | `*` | Comma-separated allowed origins, `*` for all |
//! | `HOST` | 127.0.0.1 | Host to bind |
//! | `PORT` | 8000 | Server port |
//! | `LOG_LEVEL` | info | Log level (error, warn, info, debug, trace) |

use clap::Parser;

/// Server configuration for the records REST API.
///
/// Construct from the environment/command line with [`ServerConfig::parse`],
/// or programmatically with struct update syntax over `Default`.
#[derive(Debug, Clone, Parser)]
#[command(name = "medibase-server")]
#[command(about = "Hospital record management API server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "PORT", default_value = "8000")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Document store connection string.
    #[arg(long, env = "MONGO_URL")]
    pub mongo_url: String,

    /// Database name.
    #[arg(long, env = "DB_NAME")]
    pub db_name: String,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            mongo_url: "mongodb://localhost:27017".to_string(),
            db_name: "medibase".to_string(),
            cors_origins: "*".to_string(),
        }
    }
}

impl ServerConfig {
    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.mongo_url.is_empty() {
            errors.push("MONGO_URL cannot be empty".to_string());
        }

        if self.db_name.is_empty() {
            errors.push("DB_NAME cannot be empty".to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Creates a configuration suitable for testing.
    pub fn for_testing() -> Self {
        Self {
            port: 8000,
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            mongo_url: "mongodb://localhost:27017".to_string(),
            db_name: "medibase-test".to_string(),
            cors_origins: "*".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8000);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.cors_origins, "*");
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            port: 3000,
            host: "0.0.0.0".to_string(),
            ..Default::default()
        };
        assert_eq!(config.socket_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_validate_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_connection_string() {
        let config = ServerConfig {
            mongo_url: String::new(),
            ..Default::default()
        };
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().iter().any(|e| e.contains("MONGO_URL")));
    }

    #[test]
    fn test_validate_rejects_port_zero() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
