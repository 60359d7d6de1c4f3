use std::str::FromStr;
use std::time::Duration;

const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_DB_ACQUIRE_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_acquire_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into());
        let port = parse_or("PORT", std::env::var("PORT").ok(), 8080)?;
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;
        let db_max_connections = parse_or(
            "DB_MAX_CONNECTIONS",
            std::env::var("DB_MAX_CONNECTIONS").ok(),
            DEFAULT_DB_MAX_CONNECTIONS,
        )?;
        let db_acquire_timeout = Duration::from_secs(parse_or(
            "DB_ACQUIRE_TIMEOUT_SECS",
            std::env::var("DB_ACQUIRE_TIMEOUT_SECS").ok(),
            DEFAULT_DB_ACQUIRE_TIMEOUT_SECS,
        )?);

        Ok(Self {
            host,
            port,
            database_url,
            db_max_connections,
            db_acquire_timeout,
        })
    }
}

fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> anyhow::Result<T>
where
    T::Err: std::fmt::Display,
{
    match raw {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid {}: {}", key, e)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_variable_falls_back_to_default() {
        let value: u32 = parse_or("DB_MAX_CONNECTIONS", None, DEFAULT_DB_MAX_CONNECTIONS).unwrap();
        assert_eq!(value, DEFAULT_DB_MAX_CONNECTIONS);
    }

    #[test]
    fn set_variable_overrides_default() {
        let value: u32 = parse_or("DB_MAX_CONNECTIONS", Some("32".into()), 10).unwrap();
        assert_eq!(value, 32);
    }

    #[test]
    fn unparseable_variable_is_an_error() {
        let result = parse_or::<u16>("PORT", Some("not-a-port".into()), 8080);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("PORT"));
    }
}
