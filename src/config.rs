use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub session_secret: Option<String>,
    pub session_ttl_minutes: i64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:4200".to_string());
        let session_secret = env::var("SESSION_SECRET").ok().filter(|s| !s.is_empty());
        let session_ttl_minutes = env::var("SESSION_TTL_MINUTES")
            .ok()
            .and_then(|s| s.parse::<i64>().ok())
            .unwrap_or(60);

        if let Some(secret) = &session_secret {
            // cookie::Key::derive_from requires at least 32 bytes of material
            anyhow::ensure!(
                secret.len() >= 32,
                "SESSION_SECRET must be at least 32 bytes"
            );
        }

        Ok(Self {
            database_url,
            bind_addr,
            session_secret,
            session_ttl_minutes,
        })
    }
}
