use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub routes: RoutesConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote API serving the collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL (e.g., "https://jsonplaceholder.typicode.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the users collection.
    #[serde(default = "default_users_path")]
    pub users_path: String,
    /// Path of the posts collection.
    #[serde(default = "default_posts_path")]
    pub posts_path: String,
    /// Total request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Navigation targets used by the route table and the auth gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutesConfig {
    /// Where unauthenticated renders of protected pages are sent.
    #[serde(default = "default_login_path")]
    pub login_path: String,
    /// Where unknown paths are sent.
    #[serde(default = "default_fallback_path")]
    pub fallback_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (e.g., "info", "pagestore=debug").
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_base_url() -> String {
    "https://jsonplaceholder.typicode.com".to_string()
}

fn default_users_path() -> String {
    "/users".to_string()
}

fn default_posts_path() -> String {
    "/posts".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_login_path() -> String {
    "/login".to_string()
}

fn default_fallback_path() -> String {
    "/posts".to_string()
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            users_path: default_users_path(),
            posts_path: default_posts_path(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            login_path: default_login_path(),
            fallback_path: default_fallback_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}
