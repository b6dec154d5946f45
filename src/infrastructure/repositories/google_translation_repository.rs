use super::translation_repository::TranslationRepository;
use async_trait::async_trait;
use serde_json::Value;

/// Translation through Google Translate's public `translate_a/single` endpoint
pub struct GoogleTranslationRepository {
    client: reqwest::Client,
    base_url: String,
}

impl GoogleTranslationRepository {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl TranslationRepository for GoogleTranslationRepository {
    async fn translate(&self, text: &str, target_code: &str) -> Result<String, String> {
        let start_time = std::time::Instant::now();
        let url = format!("{}/translate_a/single", self.base_url);

        tracing::info!(
            target_code = target_code,
            text_length = text.len(),
            "Calling translation service"
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target_code),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, target_code = target_code, "Translation request failed");
                format!("Translation request error: {}", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(
                status = %status,
                target_code = target_code,
                "Translation service returned an error status"
            );
            return Err(format!("Translation service returned status {}", status));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| format!("Translation response is not JSON: {}", e))?;

        let translated = parse_translation(&body)?;

        tracing::info!(
            target_code = target_code,
            latency_ms = start_time.elapsed().as_millis(),
            translated_length = translated.len(),
            "Translation completed"
        );

        Ok(translated)
    }
}

/// The response is a nested array whose first element lists the translated
/// segments; each segment starts with the translated text.
fn parse_translation(body: &Value) -> Result<String, String> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| "Translation response has no segments".to_string())?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translated.is_empty() {
        return Err("Translation response contained no text".to_string());
    }

    Ok(translated)
}
