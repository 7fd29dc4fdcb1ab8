use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use mygram_auth::{AuthError, SigningSecret};
use serde::Deserialize;
use std::{env, fmt};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Deserialize, Clone)]
pub struct AuthConfig {
    /// HMAC key used to sign and verify session tokens
    pub token_key: String,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_key", &"**redacted**")
            .finish()
    }
}

impl AuthConfig {
    pub fn signing_secret(&self) -> Result<SigningSecret, AuthError> {
        SigningSecret::new(self.token_key.to_owned())
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Unprefixed variables still honoured by older deployments
const LEGACY_ENV: [(&str, &str, &str); 3] = [
    ("TOKEN_KEY", "MYGRAM__AUTH__TOKEN_KEY", "auth.token_key"),
    ("DATABASE_URL", "MYGRAM__DATABASE__URL", "database.url"),
    ("PORT", "MYGRAM__SERVER__PORT", "server.port"),
];

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (MYGRAM__AUTH__TOKEN_KEY, etc.)
    /// 2. Legacy variables (TOKEN_KEY, DATABASE_URL, PORT)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    ///
    /// There is no default for `auth.token_key`, loading fails without one.
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("database.url", "sqlite:mygram.db")?
            .set_default("database.max_connections", 5)?
            .set_default("observability.log_level", "info")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        // Overrides win over every source, so a prefixed variable must
        // suppress its legacy counterpart explicitly.
        for (legacy, prefixed, key) in LEGACY_ENV {
            if env::var(prefixed).is_ok() {
                continue;
            }
            if let Ok(value) = env::var(legacy) {
                builder = builder.set_override(key, value)?;
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("MYGRAM")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Err(e) = self.auth.signing_secret() {
            return Err(format!("auth.token_key is invalid: {e}"));
        }
        if self.auth.token_key.len() < 32 {
            tracing::warn!("auth.token_key is shorter than 32 characters");
        }
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        Ok(())
    }
}
