use super::error::SpeechServiceError;
use crate::infrastructure::repositories::SystemVoice;

/// How the local engine's voice is chosen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum VoiceStrategy {
    /// The first voice when its name mentions "female", else the second voice
    #[default]
    PreferFemale,
    /// Always the voice with this engine id
    Named(String),
}

impl VoiceStrategy {
    /// Pick a voice id from the installed voices.
    ///
    /// `None` means the engine default, used when no voices are listed.
    pub fn select(&self, voices: &[SystemVoice]) -> Result<Option<String>, SpeechServiceError> {
        match self {
            VoiceStrategy::Named(id) => Ok(Some(id.clone())),
            VoiceStrategy::PreferFemale => {
                let Some(first) = voices.first() else {
                    return Ok(None);
                };

                // Only the first voice is checked for "female"
                if first.name.to_lowercase().contains("female") {
                    return Ok(Some(first.id.clone()));
                }

                // The positional fallback needs a second voice to exist
                voices
                    .get(1)
                    .map(|v| Some(v.id.clone()))
                    .ok_or_else(|| {
                        SpeechServiceError::Synthesis(format!(
                            "first voice is not female and only {} voice installed",
                            voices.len()
                        ))
                    })
            }
        }
    }
}
