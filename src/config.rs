// src/config.rs

use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP API listens on.
    pub port: u16,

    /// Path to the JSON question file (file-backed store).
    pub questions_file: String,

    /// When set, questions are loaded from this database instead of the file.
    pub database_url: Option<String>,

    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3001);

        let questions_file =
            env::var("QUESTIONS_FILE").unwrap_or_else(|_| "questions.json".to_string());

        let database_url = env::var("DATABASE_URL").ok();

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Self {
            port,
            questions_file,
            database_url,
            rust_log,
        }
    }
}
