use async_trait::async_trait;
use echoverse::infrastructure::repositories::{LocalVoiceEngine, SystemVoice};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Minimal RIFF/WAVE header, enough to look like rendered audio
pub const FAKE_WAV: &[u8] = &[
    0x52, 0x49, 0x46, 0x46, 0x24, 0x00, 0x00, 0x00, // RIFF chunk
    0x57, 0x41, 0x56, 0x45, // WAVE
];

/// Minimal MP3 frame header (silence)
pub const FAKE_MP3: &[u8] = &[0xFF, 0xFB, 0x90, 0x00, 0x00, 0x00, 0x00, 0x00];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderCall {
    pub text: String,
    pub rate: u32,
    pub voice: Option<String>,
    pub output: PathBuf,
}

/// Local engine stand-in that writes a fixed WAV file
pub struct FakeLocalEngine {
    voices: Vec<SystemVoice>,
    fail: bool,
    renders: Mutex<Vec<RenderCall>>,
}

impl FakeLocalEngine {
    pub fn new() -> Self {
        Self {
            voices: vec![
                SystemVoice::new("en-gb", "English (Great Britain)"),
                SystemVoice::new("en-us", "English (America)"),
            ],
            fail: false,
            renders: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub fn renders(&self) -> Vec<RenderCall> {
        self.renders.lock().unwrap().clone()
    }
}

#[async_trait]
impl LocalVoiceEngine for FakeLocalEngine {
    async fn list_voices(&self) -> Result<Vec<SystemVoice>, String> {
        Ok(self.voices.clone())
    }

    async fn render_to_file(
        &self,
        text: &str,
        rate: u32,
        voice: Option<&str>,
        output: &Path,
    ) -> Result<(), String> {
        self.renders.lock().unwrap().push(RenderCall {
            text: text.to_string(),
            rate,
            voice: voice.map(str::to_string),
            output: output.to_path_buf(),
        });

        if self.fail {
            std::fs::write(output, &FAKE_WAV[..4]).map_err(|e| e.to_string())?;
            return Err("engine crashed".to_string());
        }

        std::fs::write(output, FAKE_WAV).map_err(|e| e.to_string())
    }

    async fn is_available(&self) -> bool {
        !self.fail
    }
}
