use async_trait::async_trait;
use std::path::Path;

/// A voice installed on the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemVoice {
    /// Identifier passed back to the engine when rendering
    pub id: String,
    /// Human-readable name
    pub name: String,
}

impl SystemVoice {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// On-device speech engine with controllable rate and voice.
///
/// Rendering writes an uncompressed WAV file to a path owned by the caller,
/// so cleanup of that file stays with the caller on every exit path.
#[async_trait]
pub trait LocalVoiceEngine: Send + Sync {
    /// Voices installed on the host, in the engine's own order
    async fn list_voices(&self) -> Result<Vec<SystemVoice>, String>;

    /// Render `text` into a WAV file at `output`, returning once the file is
    /// complete. `voice` of `None` uses the engine's default voice.
    async fn render_to_file(
        &self,
        text: &str,
        rate: u32,
        voice: Option<&str>,
        output: &Path,
    ) -> Result<(), String>;

    /// Whether the engine can be started on this host
    async fn is_available(&self) -> bool;
}
