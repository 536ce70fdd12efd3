//! Server configuration from command-line flags and environment variables.

use axum::http::HeaderValue;
use clap::Parser;

use crate::error::ConfigError;

/// Origins allowed to call the API from a browser unless overridden.
pub const DEFAULT_ORIGINS: [&str; 3] = [
    "http://localhost:5173",
    "http://localhost:3000",
    "http://localhost:5174",
];

#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server", about = "In-memory todo list HTTP API")]
pub struct ServerConfig {
    /// Address to bind to
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Origin allowed for cross-origin requests (repeatable)
    #[arg(
        long = "allowed-origin",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_values = DEFAULT_ORIGINS
    )]
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            allowed_origins: DEFAULT_ORIGINS.iter().map(|o| o.to_string()).collect(),
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parse the configured origins into header values for the CORS layer.
    pub fn cors_origins(&self) -> Result<Vec<HeaderValue>, ConfigError> {
        self.allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|source| ConfigError::InvalidOrigin {
                    origin: origin.clone(),
                    source,
                })
            })
            .collect()
    }
}
