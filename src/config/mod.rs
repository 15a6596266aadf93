use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub database: DatabaseConfig,
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

/// Which `DocumentStore` implementation backs the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreBackend {
    Mongo,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(StoreBackend::Mongo),
            "memory" | "mem" => Ok(StoreBackend::Memory),
            other => Err(format!("unknown store backend: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub backend: StoreBackend,
    /// Full connection string; overrides user/password/host when set
    pub uri: Option<String>,
    pub user: Option<String>,
    #[serde(skip_serializing)]
    pub password: Option<String>,
    pub host: String,
    pub name: String,
    pub app_name: String,
    pub max_pool_size: u32,
    pub connection_timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub bind_address: String,
    pub port: u16,
    pub enable_request_logging: bool,
    pub max_request_size_bytes: usize,
}

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DB_HOST: &str = "cluster0.khtuk.mongodb.net";
const DEFAULT_DB_NAME: &str = "campusconnect";

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        // Database overrides
        if let Ok(v) = env::var("STORE_BACKEND") {
            match v.parse() {
                Ok(backend) => self.database.backend = backend,
                Err(e) => tracing::warn!("{}; keeping {:?}", e, self.database.backend),
            }
        }
        if let Ok(v) = env::var("MONGODB_URI") {
            self.database.uri = Some(v);
        }
        if let Ok(v) = env::var("DB_user") {
            self.database.user = Some(v);
        }
        if let Ok(v) = env::var("DB_pass") {
            self.database.password = Some(v);
        }
        if let Ok(v) = env::var("DB_HOST") {
            self.database.host = v;
        }
        if let Ok(v) = env::var("DB_NAME") {
            self.database.name = v;
        }
        if let Ok(v) = env::var("DB_APP_NAME") {
            self.database.app_name = v;
        }
        if let Ok(v) = env::var("DATABASE_MAX_POOL_SIZE") {
            self.database.max_pool_size = v.parse().unwrap_or(self.database.max_pool_size);
        }
        if let Ok(v) = env::var("DATABASE_CONNECTION_TIMEOUT") {
            self.database.connection_timeout = v.parse().unwrap_or(self.database.connection_timeout);
        }

        // API overrides
        if let Ok(v) = env::var("BIND_ADDRESS") {
            self.api.bind_address = v;
        }
        if let Ok(v) = env::var("PORT") {
            self.api.port = v.parse().unwrap_or(self.api.port);
        }
        if let Ok(v) = env::var("API_ENABLE_REQUEST_LOGGING") {
            self.api.enable_request_logging = v.parse().unwrap_or(self.api.enable_request_logging);
        }
        if let Ok(v) = env::var("API_MAX_REQUEST_SIZE_BYTES") {
            self.api.max_request_size_bytes = v.parse().unwrap_or(self.api.max_request_size_bytes);
        }

        self
    }

    fn database_defaults(max_pool_size: u32, connection_timeout: u64) -> DatabaseConfig {
        DatabaseConfig {
            backend: StoreBackend::Mongo,
            uri: None,
            user: None,
            password: None,
            host: DEFAULT_DB_HOST.to_string(),
            name: DEFAULT_DB_NAME.to_string(),
            app_name: "campus-connect-api".to_string(),
            max_pool_size,
            connection_timeout,
        }
    }

    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            database: Self::database_defaults(10, 30),
            api: ApiConfig {
                bind_address: "0.0.0.0".to_string(),
                port: DEFAULT_PORT,
                enable_request_logging: true,
                max_request_size_bytes: 10 * 1024 * 1024, // 10MB
            },
        }
    }

    pub fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            database: Self::database_defaults(20, 10),
            api: ApiConfig {
                bind_address: "0.0.0.0".to_string(),
                port: DEFAULT_PORT,
                enable_request_logging: true,
                max_request_size_bytes: 5 * 1024 * 1024, // 5MB
            },
        }
    }

    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            database: Self::database_defaults(50, 5),
            api: ApiConfig {
                bind_address: "0.0.0.0".to_string(),
                port: DEFAULT_PORT,
                enable_request_logging: false,
                max_request_size_bytes: 2 * 1024 * 1024, // 2MB
            },
        }
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}
