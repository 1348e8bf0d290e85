use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    pub redis_url: String,
    pub cors_origins: Vec<String>,
    pub range_limit: u64,
    pub per_page: u64,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("RUST_PORT", "5050"),
            redis_url: try_load("REDIS_URL", "redis://127.0.0.1:6379"),
            cors_origins: parse_origins(&try_load::<String>(
                "CLIENT_ORIGINS",
                "http://localhost:3000,http://localhost:5173",
            )),
            range_limit: try_load("RANGE_LIMIT", "1000000"),
            per_page: try_load("PER_PAGE", "20"),
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect()
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
