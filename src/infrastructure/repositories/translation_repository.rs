use async_trait::async_trait;

/// Repository for machine translation
#[async_trait]
pub trait TranslationRepository: Send + Sync {
    /// Translate text into the language identified by `target_code`,
    /// letting the provider detect the source language.
    async fn translate(&self, text: &str, target_code: &str) -> Result<String, String>;
}
