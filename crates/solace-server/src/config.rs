use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

/// Placeholder JWT secrets that MUST NOT be used.
const PLACEHOLDER_SECRETS: &[&str] = &["change-me-to-a-random-string", "dev-secret-change-me"];

/// Server configuration loaded from `SOLACE_*` environment variables.
#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    pub jwt_secret: String,
    pub admin_usernames: Vec<String>,
    pub feed_page_size: u32,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("db_path", &self.db_path)
            .field("jwt_secret", &"<redacted>")
            .field("admin_usernames", &self.admin_usernames)
            .field("feed_page_size", &self.feed_page_size)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let jwt_secret = get("SOLACE_JWT_SECRET").unwrap_or_default();
        if jwt_secret.is_empty() || PLACEHOLDER_SECRETS.contains(&jwt_secret.as_str()) {
            bail!("SOLACE_JWT_SECRET is unset or still a placeholder");
        }

        let port = get("SOLACE_PORT")
            .unwrap_or_else(|| "3000".into())
            .parse()
            .context("SOLACE_PORT must be a valid port number")?;

        let feed_page_size = get("SOLACE_FEED_PAGE_SIZE")
            .unwrap_or_else(|| "50".into())
            .parse()
            .context("SOLACE_FEED_PAGE_SIZE must be a positive integer")?;

        let admin_usernames = get("SOLACE_ADMIN_USERNAMES")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            host: get("SOLACE_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port,
            db_path: get("SOLACE_DB_PATH").unwrap_or_else(|| "solace.db".into()).into(),
            jwt_secret,
            admin_usernames,
            feed_page_size,
        })
    }

    pub fn addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = load(&[("SOLACE_JWT_SECRET", "s3cret")]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.db_path, PathBuf::from("solace.db"));
        assert_eq!(config.feed_page_size, 50);
        assert!(config.admin_usernames.is_empty());
        assert_eq!(config.addr().unwrap().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn debug_output_redacts_secret() {
        let config = load(&[("SOLACE_JWT_SECRET", "s3cret-value")]).unwrap();
        let printed = format!("{:?}", config);
        assert!(!printed.contains("s3cret-value"));
        assert!(printed.contains("<redacted>"));
        assert!(printed.contains("solace.db"));
    }

    #[test]
    fn rejects_missing_or_placeholder_secret() {
        assert!(load(&[]).is_err());
        assert!(load(&[("SOLACE_JWT_SECRET", "dev-secret-change-me")]).is_err());
    }

    #[test]
    fn parses_admin_list_and_port() {
        let config = load(&[
            ("SOLACE_JWT_SECRET", "s3cret"),
            ("SOLACE_PORT", "8080"),
            ("SOLACE_ADMIN_USERNAMES", " mod , ,lead"),
        ])
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.admin_usernames, vec!["mod", "lead"]);
        assert!(load(&[("SOLACE_JWT_SECRET", "s3cret"), ("SOLACE_PORT", "nope")]).is_err());
    }
}
