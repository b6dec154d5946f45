use super::model::{AudioPayload, OutputMode};
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Audio ready for inline playback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewResult {
    pub audio_base64: String,
    pub mime_type: &'static str,
    pub filename: String,
}

impl PreviewResult {
    /// `data:` URI for an `<audio>` element
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.audio_base64)
    }
}

/// Audio to be sent as an attachment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadDescriptor {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub mime_type: &'static str,
}

impl DownloadDescriptor {
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposedAudio {
    Preview(PreviewResult),
    Download(DownloadDescriptor),
}

/// Shape the payload for the requested output mode; the payload is consumed.
pub fn compose(payload: AudioPayload, mode: OutputMode) -> ComposedAudio {
    match mode {
        OutputMode::Preview => ComposedAudio::Preview(PreviewResult {
            audio_base64: STANDARD.encode(&payload.bytes),
            mime_type: payload.mime_type,
            filename: payload.suggested_filename,
        }),
        OutputMode::Download => ComposedAudio::Download(DownloadDescriptor {
            bytes: payload.bytes,
            filename: payload.suggested_filename,
            mime_type: payload.mime_type,
        }),
    }
}
