use super::tts_repository::TtsRepository;
use async_trait::async_trait;

/// The translate TTS endpoint rejects requests over 100 characters
const MAX_BATCH_SIZE: usize = 100;

/// Normal speaking speed; the slow mode would be 0.3
const NORMAL_SPEED: &str = "1";

/// Cloud speech synthesis through Google Translate's TTS endpoint
pub struct GoogleTtsRepository {
    client: reqwest::Client,
    base_url: String,
}

impl GoogleTtsRepository {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Call the TTS endpoint for a single text batch
    async fn call_tts(
        &self,
        text: &str,
        language_code: &str,
        index: usize,
        total: usize,
    ) -> Result<Vec<u8>, String> {
        let url = format!("{}/translate_tts", self.base_url);
        let index = index.to_string();
        let total = total.to_string();
        let text_length = text.chars().count().to_string();

        tracing::debug!(
            language_code = language_code,
            batch_index = %index,
            text_length = %text_length,
            "Calling cloud TTS endpoint"
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                ("ie", "UTF-8"),
                ("q", text),
                ("tl", language_code),
                ("total", total.as_str()),
                ("idx", index.as_str()),
                ("textlen", text_length.as_str()),
                ("client", "tw-ob"),
                ("ttsspeed", NORMAL_SPEED),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, language_code = language_code, "Cloud TTS request failed");
                format!("Cloud TTS request error: {}", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(
                status = %status,
                language_code = language_code,
                "Cloud TTS returned an error status"
            );
            return Err(format!("Cloud TTS returned status {}", status));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| format!("Cloud TTS body error: {}", e))?;

        Ok(audio.to_vec())
    }
}

#[async_trait]
impl TtsRepository for GoogleTtsRepository {
    async fn synthesize(&self, text: &str, language_code: &str) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();

        let batches = split_into_batches(text);
        if batches.is_empty() {
            return Err("Cannot synthesize empty text".to_string());
        }

        tracing::info!(
            language_code = language_code,
            batch_count = batches.len(),
            text_length = text.len(),
            "Starting cloud TTS synthesis"
        );

        let mut merged_audio = Vec::new();
        for (index, batch) in batches.iter().enumerate() {
            let audio = self
                .call_tts(batch, language_code, index, batches.len())
                .await?;
            merged_audio.extend(audio);
        }

        if merged_audio.is_empty() {
            return Err("Cloud TTS returned no audio".to_string());
        }

        tracing::info!(
            provider = "google",
            language_code = language_code,
            latency_ms = start_time.elapsed().as_millis(),
            batch_count = batches.len(),
            audio_size_bytes = merged_audio.len(),
            "TTS synthesis completed"
        );

        Ok(merged_audio)
    }
}

/// Split text into batches of at most MAX_BATCH_SIZE characters.
///
/// Sentence boundaries are preferred, then word boundaries; a single word
/// longer than the limit is cut by characters.
fn split_into_batches(text: &str) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }
    if char_len(text) <= MAX_BATCH_SIZE {
        return vec![text.to_string()];
    }

    let mut batches = Vec::new();
    let mut current = String::new();

    for sentence in text.split_inclusive(|c| matches!(c, '.' | '!' | '?' | '।')) {
        if char_len(sentence) <= MAX_BATCH_SIZE {
            push_piece(sentence, &mut current, &mut batches);
            continue;
        }

        for word in sentence.split_inclusive(char::is_whitespace) {
            if char_len(word) <= MAX_BATCH_SIZE {
                push_piece(word, &mut current, &mut batches);
                continue;
            }

            let chars: Vec<char> = word.chars().collect();
            for chunk in chars.chunks(MAX_BATCH_SIZE) {
                let chunk: String = chunk.iter().collect();
                push_piece(&chunk, &mut current, &mut batches);
            }
        }
    }

    flush_batch(&mut current, &mut batches);
    batches
}

fn push_piece(piece: &str, current: &mut String, batches: &mut Vec<String>) {
    if !current.is_empty() && char_len(current) + char_len(piece) > MAX_BATCH_SIZE {
        flush_batch(current, batches);
    }
    current.push_str(piece);
}

fn flush_batch(current: &mut String, batches: &mut Vec<String>) {
    let batch = current.trim();
    if !batch.is_empty() {
        batches.push(batch.to_string());
    }
    current.clear();
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}
