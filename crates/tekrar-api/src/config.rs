use std::env;

use anyhow::Context;

/// Runtime environment. Selects the logging format and whether
/// production-only hardening (HSTS) is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Read `APP_ENV`; anything other than `production` is development.
    pub fn from_env() -> Self {
        match env::var("APP_ENV").as_deref() {
            Ok("production") => Self::Production,
            _ => Self::Development,
        }
    }

    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub env: Environment,
    /// Address the server binds to, e.g. `0.0.0.0:3000`.
    pub bind_addr: String,
    /// Origins allowed by CORS, comma separated in the env var.
    pub allowed_origins: Vec<String>,
    /// Reviews per day a learner is nudged towards (original product
    /// default: 20).
    pub daily_review_target: u32,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:8080".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let daily_review_target = match env::var("DAILY_REVIEW_TARGET") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("invalid DAILY_REVIEW_TARGET: {raw}"))?,
            Err(_) => 20,
        };

        Ok(Self {
            env: Environment::from_env(),
            bind_addr,
            allowed_origins,
            daily_review_target,
        })
    }
}
