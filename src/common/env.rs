// src/common/env.rs

use dotenvy::dotenv;
use lazy_static::lazy_static;
use std::env;

// Holds all configuration variables for the application.
pub struct Config {
    pub app_env: Option<String>,
    pub log_level: String,
}

impl Config {
    fn from_env() -> Self {
        dotenv().ok();
        // APP_ENV is optional on purpose: the report gate only closes on
        // the exact value "production". Unset must leave it open.
        let app_env = env::var("APP_ENV").ok();
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        Config { app_env, log_level }
    }
}

// Use lazy_static to create a globally accessible, read-only CONFIG instance.
lazy_static! {
    pub static ref CONFIG: Config = Config::from_env();
}

pub fn load() {
    let _ = &CONFIG.log_level;
}
