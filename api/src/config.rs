use std::env;
use std::time::Duration;

use anyhow::Context;

/// Credentials for the Supabase auth service
#[derive(Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub key: String,
}

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Identity provider credentials; auth endpoints answer 503 when unset
    pub supabase: Option<SupabaseConfig>,
    /// Origins allowed by CORS (the web frontend)
    pub cors_allowed_origins: Vec<String>,
    /// Upper bound on a single data source round trip
    pub source_timeout: Duration,
    /// Create missing tables on startup
    pub auto_create_schema: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let port = match env::var("PORT") {
            Ok(p) => p.parse().with_context(|| format!("invalid PORT: {p}"))?,
            Err(_) => 8000,
        };

        let source_timeout = match env::var("SOURCE_TIMEOUT_MS") {
            Ok(ms) => parse_timeout_ms(&ms)?,
            Err(_) => Duration::from_millis(5000),
        };

        let supabase = match (env::var("SUPABASE_URL"), env::var("SUPABASE_KEY")) {
            (Ok(url), Ok(key)) if !url.is_empty() && !key.is_empty() => {
                Some(SupabaseConfig { url, key })
            }
            _ => None,
        };

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port,
            supabase,
            cors_allowed_origins: parse_origins(
                &env::var("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            ),
            source_timeout,
            auto_create_schema: env::var("AUTO_CREATE_SCHEMA")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
        })
    }

    /// Check if the identity provider is configured
    pub fn identity_enabled(&self) -> bool {
        self.supabase.is_some()
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(|o| o.trim_end_matches('/').to_string())
        .collect()
}

fn parse_timeout_ms(raw: &str) -> anyhow::Result<Duration> {
    let ms: u64 = raw
        .trim()
        .parse()
        .with_context(|| format!("invalid SOURCE_TIMEOUT_MS: {raw}"))?;
    if ms == 0 {
        anyhow::bail!("SOURCE_TIMEOUT_MS must be greater than 0");
    }
    Ok(Duration::from_millis(ms))
}

fn parse_flag(raw: &str) -> bool {
    !matches!(
        raw.trim().to_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
