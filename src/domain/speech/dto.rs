use super::model::{DEFAULT_LANGUAGE, DEFAULT_SPEED, DEFAULT_TONE};
use serde::{Deserialize, Serialize};

/// Request for POST /api/speech
#[derive(Debug, Serialize, Deserialize)]
pub struct SpeechRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_speed")]
    pub speed: u32,
    #[serde(default = "default_tone")]
    pub tone: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub translate: bool,
    #[serde(default = "default_action")]
    pub action: String,
}

/// Response for POST /api/speech in preview mode
#[derive(Debug, Serialize, Deserialize)]
pub struct PreviewResponse {
    pub audio_base64: String,
    pub mime_type: String,
    pub filename: String,
    pub translated_text: String,
}

fn default_speed() -> u32 {
    DEFAULT_SPEED
}

fn default_tone() -> String {
    DEFAULT_TONE.to_string()
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_action() -> String {
    "preview".to_string()
}
