use super::error::SpeechServiceError;
use std::str::FromStr;

pub const DEFAULT_SPEED: u32 = 180;
pub const DEFAULT_TONE: &str = "Normal";
pub const DEFAULT_LANGUAGE: &str = "English";

pub const WAV_MIME_TYPE: &str = "audio/wav";
pub const MP3_MIME_TYPE: &str = "audio/mpeg";

const FILENAME_PREFIX: &str = "echoverse";

/// A document uploaded alongside (or instead of) typed text
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// How the synthesized audio is handed back
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    Preview,
    Download,
}

impl OutputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Preview => "preview",
            OutputMode::Download => "download",
        }
    }
}

impl FromStr for OutputMode {
    type Err = SpeechServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "preview" => Ok(OutputMode::Preview),
            "download" => Ok(OutputMode::Download),
            other => Err(SpeechServiceError::InvalidMode(other.to_string())),
        }
    }
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One form submission, already validated at the HTTP boundary
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    pub raw_text: String,
    pub uploaded_document: Option<UploadedDocument>,
    pub speed: u32,
    pub tone: String,
    pub target_language: String,
    pub translate_requested: bool,
    pub output_mode: OutputMode,
}

impl SynthesisRequest {
    pub fn new(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
            uploaded_document: None,
            speed: DEFAULT_SPEED,
            tone: DEFAULT_TONE.to_string(),
            target_language: DEFAULT_LANGUAGE.to_string(),
            translate_requested: false,
            output_mode: OutputMode::Preview,
        }
    }
}

/// Synthesized audio owned by a single request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioPayload {
    pub bytes: Vec<u8>,
    pub mime_type: &'static str,
    pub suggested_filename: String,
}

impl AudioPayload {
    /// Local engine output, named after the tone
    pub fn wav(bytes: Vec<u8>, tone: &str) -> Self {
        Self {
            bytes,
            mime_type: WAV_MIME_TYPE,
            suggested_filename: suggested_filename(tone, "wav"),
        }
    }

    /// Cloud engine output, named after the language
    pub fn mp3(bytes: Vec<u8>, language: &str) -> Self {
        Self {
            bytes,
            mime_type: MP3_MIME_TYPE,
            suggested_filename: suggested_filename(language, "mp3"),
        }
    }
}

/// `echoverse_<label>.<ext>`, with the label reduced to characters that are
/// safe inside a quoted Content-Disposition filename.
fn suggested_filename(label: &str, extension: &str) -> String {
    let label: String = label
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{}_{}.{}", FILENAME_PREFIX, label, extension)
}
