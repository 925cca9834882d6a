use anyhow::{Context, Result};
use std::env;

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: env_var("DATABASE_HOST")?,
            port: env_var("DATABASE_PORT")?.parse().context("DATABASE_PORT must be a port number")?,
            username: env_var("DATABASE_USERNAME")?,
            password: env_var("DATABASE_PASSWORD")?,
            database: env_var("DATABASE_NAME")?,
        };
        let redis = RedisConfig {
            host: env_var("REDIS_HOST")?,
            port: env_var("REDIS_PORT")?.parse().context("REDIS_PORT must be a port number")?,
        };
        let auth = AuthConfig {
            ttl: env::var("AUTH_TOKEN_TTL")
                .unwrap_or_else(|_| "86400".into())
                .parse()
                .context("AUTH_TOKEN_TTL must be seconds")?,
        };
        Ok(Self {
            database,
            redis,
            auth,
        })
    }
}

fn env_var(key: &str) -> Result<String> {
    env::var(key).with_context(|| format!("environment variable {key} is not set"))
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

pub struct RedisConfig {
    pub host: String,
    pub port: u16,
}

pub struct AuthConfig {
    pub ttl: u64,
}
