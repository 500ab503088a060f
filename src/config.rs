use std::env;

use crate::error::AppError;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub app_env: String,
    pub expose_diagnostics: bool, // file/line in 500 responses
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = env::var("DATABASE_URL")
            .map_err(|_| AppError::Config("DATABASE_URL must be set".into()))?;
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| AppError::Config("PORT must be a number".into()))?;
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        let expose_diagnostics = match env::var("EXPOSE_DIAGNOSTICS") {
            Ok(raw) => parse_flag(&raw)
                .ok_or_else(|| AppError::Config(format!("EXPOSE_DIAGNOSTICS must be a boolean, got '{}'", raw)))?,
            Err(_) => default_expose_diagnostics(&app_env),
        };

        Ok(Self {
            database_url,
            port,
            app_env,
            expose_diagnostics,
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "./logs".to_string()),
        })
    }
}

fn default_expose_diagnostics(app_env: &str) -> bool {
    !app_env.eq_ignore_ascii_case("production")
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
