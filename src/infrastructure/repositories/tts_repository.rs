use async_trait::async_trait;

/// Repository for cloud speech synthesis.
/// Abstracts the remote provider used for every language the local engine
/// does not speak.
///
/// Implementations are responsible for:
/// - Handling provider-specific text length limitations
/// - Merging audio chunks into a single audio stream
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize text to speech for a given service language code
    ///
    /// Returns merged audio data ready for playback (MP3 format)
    ///
    /// # Arguments
    /// * `text` - The text to synthesize
    /// * `language_code` - Service language code (e.g. "hi")
    ///
    /// # Errors
    /// Returns error if synthesis fails or provider is unavailable
    async fn synthesize(&self, text: &str, language_code: &str) -> Result<Vec<u8>, String>;
}
