use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

/// Read a variable, treating an empty value as unset
fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

fn parse_var<T: std::str::FromStr>(key: &str, default: T) -> Result<T, String> {
    match var(key) {
        Some(value) => value
            .parse::<T>()
            .map_err(|_| format!("{} must be a valid number", key)),
        None => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_HOST: &'static str = "127.0.0.1";
    const DEFAULT_PORT: u16 = 8080;

    pub fn from_env() -> Result<Self, String> {
        let host = var("HOST").unwrap_or_else(|| Self::DEFAULT_HOST.to_string());
        let port = var("PORT")
            .map(|p| p.parse::<u16>().map_err(|e| format!("Invalid PORT: {}", e)))
            .transpose()?
            .unwrap_or(Self::DEFAULT_PORT);

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    const DEFAULT_HOST: &'static str = "localhost";
    const DEFAULT_PORT: u16 = 5432;
    const DEFAULT_USER: &'static str = "postgres";
    const DEFAULT_NAME: &'static str = "admin_catalog";

    const DEFAULT_MAX_CONNECTIONS: u32 = 25;
    const DEFAULT_MIN_CONNECTIONS: u32 = 1;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
    const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600; // 10 minutes
    const DEFAULT_MAX_LIFETIME_SECS: u64 = 300; // 5 minutes

    pub fn from_env() -> Result<Self, String> {
        let url = match var("DATABASE_URL") {
            Some(url) => url,
            None => Self::url_from_parts()?,
        };

        Ok(Self {
            url,
            max_connections: parse_var("DB_MAX_CONNECTIONS", Self::DEFAULT_MAX_CONNECTIONS)?,
            min_connections: parse_var("DB_MIN_CONNECTIONS", Self::DEFAULT_MIN_CONNECTIONS)?,
            acquire_timeout_secs: parse_var(
                "DB_ACQUIRE_TIMEOUT_SECS",
                Self::DEFAULT_ACQUIRE_TIMEOUT_SECS,
            )?,
            idle_timeout_secs: parse_var("DB_IDLE_TIMEOUT_SECS", Self::DEFAULT_IDLE_TIMEOUT_SECS)?,
            max_lifetime_secs: parse_var("DB_MAX_LIFETIME_SECS", Self::DEFAULT_MAX_LIFETIME_SECS)?,
        })
    }

    /// Compose a connection URL from `DB_HOST`, `DB_PORT`, `DB_USER`,
    /// `DB_PASSWORD` and `DB_NAME`
    fn url_from_parts() -> Result<String, String> {
        let host = var("DB_HOST").unwrap_or_else(|| Self::DEFAULT_HOST.to_string());
        let port: u16 = parse_var("DB_PORT", Self::DEFAULT_PORT)?;
        let user = var("DB_USER").unwrap_or_else(|| Self::DEFAULT_USER.to_string());
        let password = var("DB_PASSWORD").unwrap_or_default();
        let name = var("DB_NAME").unwrap_or_else(|| Self::DEFAULT_NAME.to_string());

        Ok(build_url(&host, port, &user, &password, &name))
    }

    /// Connection URL without the password, for logs
    pub fn redacted_url(&self) -> &str {
        self.url.split('@').next_back().unwrap_or("***")
    }
}

fn build_url(host: &str, port: u16, user: &str, password: &str, name: &str) -> String {
    if password.is_empty() {
        format!("postgres://{}@{}:{}/{}", user, host, port, name)
    } else {
        format!("postgres://{}:{}@{}:{}/{}", user, password, host, port, name)
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = var("SWAGGER_USERNAME");
        let password = var("SWAGGER_PASSWORD");
        let title = var("SWAGGER_TITLE").unwrap_or_else(|| "Admin Catalog API".to_string());
        let version = var("SWAGGER_VERSION").unwrap_or_else(|| "0.1.0".to_string());
        let description = var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|| "Category management for the admin catalog".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url() {
        assert_eq!(
            build_url("localhost", 5432, "postgres", "", "admin_catalog"),
            "postgres://postgres@localhost:5432/admin_catalog"
        );
        assert_eq!(
            build_url("db", 6543, "app", "secret", "catalog"),
            "postgres://app:secret@db:6543/catalog"
        );
    }

    #[test]
    fn test_redacted_url_hides_credentials() {
        let config = DatabaseConfig {
            url: "postgres://app:secret@db:5432/catalog".to_string(),
            max_connections: 1,
            min_connections: 1,
            acquire_timeout_secs: 1,
            idle_timeout_secs: 1,
            max_lifetime_secs: 1,
        };

        assert_eq!(config.redacted_url(), "db:5432/catalog");
    }

    #[test]
    fn test_swagger_credentials_require_both_parts() {
        let mut config = SwaggerConfig {
            username: Some("admin".to_string()),
            password: None,
            title: String::new(),
            version: String::new(),
            description: String::new(),
        };
        assert_eq!(config.credentials(), None);

        config.password = Some("pw".to_string());
        assert_eq!(config.credentials().as_deref(), Some("admin:pw"));
    }
}
