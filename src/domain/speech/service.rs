use super::acquire::{acquire, AcquiredText};
use super::compose::{compose, ComposedAudio};
use super::error::SpeechServiceError;
use super::model::{AudioPayload, SynthesisRequest, UploadedDocument};
use super::voice::VoiceStrategy;
use crate::domain::catalog::{effective_rate, Catalog, FALLBACK_LANGUAGE_CODE};
use crate::infrastructure::repositories::{LocalVoiceEngine, TranslationRepository, TtsRepository};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tempfile::NamedTempFile;

/// Successful pipeline run
#[derive(Debug, Clone)]
pub struct SynthesisOutcome {
    pub audio: ComposedAudio,
    /// Text extracted from the uploaded document, empty without one
    pub uploaded_text: String,
    /// Text that was actually spoken
    pub translated_text: String,
}

pub struct SpeechService {
    catalog: Arc<Catalog>,
    translation_repo: Arc<dyn TranslationRepository>,
    tts_repo: Arc<dyn TtsRepository>,
    local_engine: Arc<dyn LocalVoiceEngine>,
    voice_strategy: VoiceStrategy,
    render_timeout: Option<Duration>,
}

impl SpeechService {
    pub fn new(
        catalog: Arc<Catalog>,
        translation_repo: Arc<dyn TranslationRepository>,
        tts_repo: Arc<dyn TtsRepository>,
        local_engine: Arc<dyn LocalVoiceEngine>,
        voice_strategy: VoiceStrategy,
        render_timeout: Option<Duration>,
    ) -> Self {
        Self {
            catalog,
            translation_repo,
            tts_repo,
            local_engine,
            voice_strategy,
            render_timeout,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub async fn local_engine_available(&self) -> bool {
        self.local_engine.is_available().await
    }
}

#[async_trait]
pub trait SpeechServiceApi: Send + Sync {
    /// Run one form submission through the whole pipeline
    ///
    /// This operation:
    /// - Picks typed text or the uploaded document's text
    /// - Translates it when asked to
    /// - Renders speech locally (English) or through the cloud engine
    /// - Shapes the audio for preview or download
    ///
    /// The first failing stage aborts the run; nothing is retried.
    async fn process(
        &self,
        request: SynthesisRequest,
    ) -> Result<SynthesisOutcome, SpeechServiceError>;
}

#[async_trait]
impl SpeechServiceApi for SpeechService {
    async fn process(
        &self,
        request: SynthesisRequest,
    ) -> Result<SynthesisOutcome, SpeechServiceError> {
        tracing::info!(
            text_length = request.raw_text.len(),
            has_upload = request.uploaded_document.is_some(),
            language = %request.target_language,
            tone = %request.tone,
            speed = request.speed,
            translate = request.translate_requested,
            mode = %request.output_mode,
            "Speech synthesis request"
        );

        // 1. Acquire text
        let acquired = acquire_text(request.raw_text, request.uploaded_document)
            .await
            .inspect_err(|_| tracing::warn!("No usable text in request"))?;

        // 2. Translate
        let translated = self
            .translate(
                &acquired.effective,
                &request.target_language,
                request.translate_requested,
            )
            .await?;

        // 3. Synthesize
        let payload = self
            .synthesize(
                &translated,
                &request.target_language,
                &request.tone,
                request.speed,
            )
            .await?;

        tracing::info!(
            audio_size_bytes = payload.bytes.len(),
            mime_type = payload.mime_type,
            filename = %payload.suggested_filename,
            "Speech synthesized"
        );

        // 4. Compose
        let audio = compose(payload, request.output_mode);

        Ok(SynthesisOutcome {
            audio,
            uploaded_text: acquired.extracted,
            translated_text: translated,
        })
    }
}

/// Document parsing is CPU bound, so uploads are read on the blocking pool
async fn acquire_text(
    raw_text: String,
    uploaded_document: Option<UploadedDocument>,
) -> Result<AcquiredText, SpeechServiceError> {
    match uploaded_document {
        Some(document) => {
            tokio::task::spawn_blocking(move || acquire(&raw_text, Some(&document)))
                .await
                .map_err(|e| {
                    SpeechServiceError::Internal(format!("Text extraction task failed: {}", e))
                })?
        }
        None => acquire(&raw_text, None),
    }
}

impl SpeechService {
    /// Translate into the target language when requested and supported,
    /// otherwise hand the text back untouched.
    pub async fn translate(
        &self,
        text: &str,
        target_language: &str,
        translate_requested: bool,
    ) -> Result<String, SpeechServiceError> {
        if !translate_requested {
            return Ok(text.to_string());
        }

        let Some(code) = self.catalog.language_code(target_language) else {
            tracing::debug!(
                language = %target_language,
                "Translation skipped for unsupported language"
            );
            return Ok(text.to_string());
        };

        self.translation_repo
            .translate(text, code)
            .await
            .map_err(SpeechServiceError::Translation)
    }

    /// Render speech, locally for the catalog's local language and through
    /// the cloud engine for everything else.
    pub async fn synthesize(
        &self,
        text: &str,
        target_language: &str,
        tone: &str,
        speed: u32,
    ) -> Result<AudioPayload, SpeechServiceError> {
        if self.catalog.uses_local_engine(target_language) {
            self.synthesize_local(text, tone, speed).await
        } else {
            self.synthesize_cloud(text, target_language).await
        }
    }

    async fn synthesize_local(
        &self,
        text: &str,
        tone: &str,
        speed: u32,
    ) -> Result<AudioPayload, SpeechServiceError> {
        let rate = effective_rate(speed, self.catalog.tone_multiplier(tone));

        let voices = self
            .local_engine
            .list_voices()
            .await
            .map_err(SpeechServiceError::Synthesis)?;
        let voice = self.voice_strategy.select(&voices)?;

        tracing::info!(
            engine = "local",
            rate = rate,
            voice = ?voice,
            text_length = text.len(),
            "Rendering speech locally"
        );

        // Deleted on drop, so every return below cleans it up
        let output = NamedTempFile::with_suffix(".wav").map_err(|e| {
            SpeechServiceError::Synthesis(format!("Failed to create temp file: {}", e))
        })?;

        let render = self
            .local_engine
            .render_to_file(text, rate, voice.as_deref(), output.path());
        let rendered = match self.render_timeout {
            Some(limit) => tokio::time::timeout(limit, render).await.map_err(|_| {
                SpeechServiceError::Synthesis(format!("Local rendering exceeded {:?}", limit))
            })?,
            None => render.await,
        };
        rendered.map_err(|e| {
            tracing::error!(error = %e, "Local speech rendering failed");
            SpeechServiceError::Synthesis(e)
        })?;

        let bytes = tokio::fs::read(output.path()).await.map_err(|e| {
            SpeechServiceError::Synthesis(format!("Failed to read rendered audio: {}", e))
        })?;

        if bytes.is_empty() {
            return Err(SpeechServiceError::Synthesis(
                "Local engine produced empty output".to_string(),
            ));
        }

        Ok(AudioPayload::wav(bytes, tone))
    }

    /// Tone and speed have no effect on this path.
    async fn synthesize_cloud(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<AudioPayload, SpeechServiceError> {
        let code = self
            .catalog
            .language_code(target_language)
            .unwrap_or(FALLBACK_LANGUAGE_CODE);

        tracing::info!(
            engine = "cloud",
            language = %target_language,
            language_code = code,
            text_length = text.len(),
            "Rendering speech in the cloud"
        );

        let bytes = self
            .tts_repo
            .synthesize(text, code)
            .await
            .map_err(SpeechServiceError::Synthesis)?;

        Ok(AudioPayload::mp3(bytes, target_language))
    }
}
