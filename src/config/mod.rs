use rust_decimal::Decimal;
use std::env;

use crate::intelligence::classifier::DEFAULT_PASSING_THRESHOLD;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,

    // Classification
    pub passing_threshold: Decimal,

    // Startup
    pub seed_sample_roster: bool,
    pub serve_api: bool,

    // Bearer token for /api routes (unset = auth disabled)
    pub api_token: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()?,

            passing_threshold: env::var("PASSING_THRESHOLD")
                .unwrap_or_else(|_| DEFAULT_PASSING_THRESHOLD.to_string())
                .parse()
                .unwrap_or(DEFAULT_PASSING_THRESHOLD),

            seed_sample_roster: env::var("SEED_SAMPLE_ROSTER")
                .unwrap_or_else(|_| "true".into())
                .parse()
                .unwrap_or(true),
            serve_api: env::var("SERVE_API")
                .unwrap_or_else(|_| "false".into())
                .parse()
                .unwrap_or(false),

            api_token: env::var("API_TOKEN").ok().filter(|t| !t.is_empty()),
        })
    }

    /// Returns true if the /api routes require a bearer token.
    pub fn has_api_auth(&self) -> bool {
        self.api_token.is_some()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8080,
            passing_threshold: DEFAULT_PASSING_THRESHOLD,
            seed_sample_roster: true,
            serve_api: false,
            api_token: None,
        }
    }
}
