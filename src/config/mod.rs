use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub content: ContentConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub enable_request_logging: bool,
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    pub default_store: String,
    pub store_name: String,
    pub default_language: String,
    pub languages: Vec<String>,
    pub public_base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub enable_cors: bool,
    pub cors_origins: Vec<String>,
}

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
        // Server overrides
        if let Ok(v) = env::var("SERVER_ENABLE_REQUEST_LOGGING") {
            self.server.enable_request_logging =
                v.parse().unwrap_or(self.server.enable_request_logging);
        }
        if let Ok(v) = env::var("SERVER_MAX_UPLOAD_BYTES") {
            self.server.max_upload_bytes = v.parse().unwrap_or(self.server.max_upload_bytes);
        }

        // Content overrides
        if let Ok(v) = env::var("CONTENT_DEFAULT_STORE") {
            self.content.default_store = v;
        }
        if let Ok(v) = env::var("CONTENT_STORE_NAME") {
            self.content.store_name = v;
        }
        if let Ok(v) = env::var("CONTENT_DEFAULT_LANGUAGE") {
            self.content.default_language = v;
        }
        if let Ok(v) = env::var("CONTENT_LANGUAGES") {
            self.content.languages = v.split(',').map(|s| s.trim().to_string()).collect();
        }
        if let Ok(v) = env::var("CONTENT_PUBLIC_BASE_URL") {
            self.content.public_base_url = v;
        }

        // Security overrides
        if let Ok(v) = env::var("SECURITY_ENABLE_CORS") {
            self.security.enable_cors = v.parse().unwrap_or(self.security.enable_cors);
        }
        if let Ok(v) = env::var("SECURITY_CORS_ORIGINS") {
            self.security.cors_origins = v.split(',').map(|s| s.trim().to_string()).collect();
        }

        // The default language is always part of the supported set
        if !self
            .content
            .languages
            .contains(&self.content.default_language)
        {
            let default = self.content.default_language.clone();
            self.content.languages.insert(0, default);
        }

        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig {
                enable_request_logging: true,
                max_upload_bytes: 10 * 1024 * 1024, // 10MB
            },
            content: ContentConfig {
                default_store: "DEFAULT".to_string(),
                store_name: "Default store".to_string(),
                default_language: "en".to_string(),
                languages: vec!["en".to_string(), "fr".to_string()],
                public_base_url: "http://localhost:3000".to_string(),
            },
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: vec![
                    "http://localhost:3000".to_string(),
                    "http://localhost:5173".to_string(),
                ],
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            server: ServerConfig {
                enable_request_logging: true,
                max_upload_bytes: 5 * 1024 * 1024, // 5MB
            },
            content: ContentConfig {
                default_store: "DEFAULT".to_string(),
                store_name: "Default store".to_string(),
                default_language: "en".to_string(),
                languages: vec!["en".to_string(), "fr".to_string()],
                public_base_url: "https://staging.example.com".to_string(),
            },
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: vec!["https://staging.example.com".to_string()],
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig {
                enable_request_logging: false,
                max_upload_bytes: 2 * 1024 * 1024, // 2MB
            },
            content: ContentConfig {
                default_store: "DEFAULT".to_string(),
                store_name: "Default store".to_string(),
                default_language: "en".to_string(),
                languages: vec!["en".to_string()],
                public_base_url: "https://shop.example.com".to_string(),
            },
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: vec!["https://shop.example.com".to_string()],
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
