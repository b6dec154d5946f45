use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Local engine
    pub espeak_path: PathBuf,
    pub local_tts_language: String,
    pub local_tts_voice: Option<String>,
    pub local_tts_timeout_secs: Option<u64>,
    // Cloud services
    pub translate_base_url: String,
    pub cloud_tts_base_url: String,
    pub http_timeout_secs: u64,
    // Uploads
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            environment: match env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .as_str()
            {
                "production" => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            espeak_path: env::var("ESPEAK_PATH")
                .unwrap_or_else(|_| "espeak-ng".to_string())
                .into(),
            local_tts_language: env::var("LOCAL_TTS_LANGUAGE")
                .unwrap_or_else(|_| "en".to_string()),
            local_tts_voice: env::var("LOCAL_TTS_VOICE")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            local_tts_timeout_secs: env::var("LOCAL_TTS_TIMEOUT_SECS")
                .ok()
                .map(|v| v.parse::<u64>())
                .transpose()?,
            translate_base_url: env::var("TRANSLATE_BASE_URL")
                .unwrap_or_else(|_| "https://translate.googleapis.com".to_string()),
            cloud_tts_base_url: env::var("CLOUD_TTS_BASE_URL")
                .unwrap_or_else(|_| "https://translate.google.com".to_string()),
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()?,
            max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                .unwrap_or_else(|_| "10485760".to_string())
                .parse()?,
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    pub fn local_tts_timeout(&self) -> Option<Duration> {
        self.local_tts_timeout_secs.map(Duration::from_secs)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}
