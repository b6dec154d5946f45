use axum::{
    body::Body,
    extract::{rejection::JsonRejection, Multipart, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    controllers::page::{self, FlashMessage, PageContext},
    domain::{
        catalog::Catalog,
        speech::{
            model::{DEFAULT_LANGUAGE, DEFAULT_SPEED, DEFAULT_TONE},
            ComposedAudio, DownloadDescriptor, OutputMode, PreviewResponse, SpeechRequest,
            SpeechService, SpeechServiceApi, SynthesisRequest, UploadedDocument,
        },
    },
    error::{AppError, AppResult},
};

/// Flash message carried through the redirect back to the form
#[derive(Debug, Default, Deserialize)]
pub struct FlashQuery {
    pub flash: Option<String>,
    pub level: Option<String>,
}

/// Raw multipart fields of the form, before validation
#[derive(Debug, Default)]
pub struct SpeechForm {
    pub text: Option<String>,
    pub speed: Option<String>,
    pub tone: Option<String>,
    pub language: Option<String>,
    pub translate: Option<String>,
    pub action: Option<String>,
    pub file: Option<UploadedDocument>,
}

impl SpeechForm {
    pub async fn from_multipart(mut multipart: Multipart) -> AppResult<Self> {
        let mut form = SpeechForm::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "file" => {
                    let filename = field.file_name().unwrap_or_default().to_string();
                    let bytes = field.bytes().await?;
                    // browsers send an empty part when no file was chosen
                    if !filename.is_empty() {
                        form.file = Some(UploadedDocument {
                            filename,
                            bytes: bytes.to_vec(),
                        });
                    }
                }
                "text" => form.text = Some(field.text().await?),
                "speed" => form.speed = Some(field.text().await?),
                "tone" => form.tone = Some(field.text().await?),
                "language" => form.language = Some(field.text().await?),
                "translate" => form.translate = Some(field.text().await?),
                "action" => form.action = Some(field.text().await?),
                other => tracing::debug!(field = other, "Ignoring unknown form field"),
            }
        }

        Ok(form)
    }

    /// Validate the fields into a pipeline request.
    ///
    /// `translate` is a checkbox, so its presence alone turns translation on.
    pub fn into_request(self) -> AppResult<SynthesisRequest> {
        let speed = parse_speed(self.speed.as_deref())?;
        let output_mode = match self.action.as_deref() {
            None => OutputMode::Preview,
            Some(action) => action.parse::<OutputMode>()?,
        };

        Ok(SynthesisRequest {
            raw_text: self.text.unwrap_or_default(),
            uploaded_document: self.file,
            speed,
            tone: self.tone.unwrap_or_else(|| DEFAULT_TONE.to_string()),
            target_language: self
                .language
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            translate_requested: self.translate.is_some(),
            output_mode,
        })
    }
}

fn parse_speed(raw: Option<&str>) -> AppResult<u32> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_SPEED),
        Some(value) => value
            .parse()
            .map_err(|_| AppError::BadRequest("Speed must be a whole number".to_string())),
    }
}

pub struct SpeechController {
    speech_service: Arc<SpeechService>,
}

impl SpeechController {
    pub fn new(speech_service: Arc<SpeechService>) -> Self {
        Self { speech_service }
    }

    /// GET / - Render the input form
    pub async fn index(
        State(controller): State<Arc<SpeechController>>,
        Query(query): Query<FlashQuery>,
    ) -> AppResult<Html<String>> {
        let flash = query.flash.map(|text| FlashMessage {
            text,
            level: query.level.unwrap_or_else(|| "warning".to_string()),
        });

        Ok(Html(page::render(
            controller.speech_service.catalog(),
            &PageContext {
                flash,
                ..Default::default()
            },
        )?))
    }

    /// POST / - Handle a form submission
    ///
    /// Failures redirect back to the form with a flash message.
    pub async fn submit(
        State(controller): State<Arc<SpeechController>>,
        multipart: Multipart,
    ) -> Response {
        match controller.handle_submission(multipart).await {
            Ok(response) => response,
            Err(err) => {
                err.log();
                flash_redirect(&err).into_response()
            }
        }
    }

    async fn handle_submission(&self, multipart: Multipart) -> AppResult<Response> {
        let request = SpeechForm::from_multipart(multipart).await?.into_request()?;
        let outcome = self.speech_service.process(request).await?;

        match outcome.audio {
            ComposedAudio::Preview(preview) => Ok(Html(page::render(
                self.speech_service.catalog(),
                &PageContext {
                    preview: Some(preview),
                    uploaded_text: outcome.uploaded_text,
                    translated_text: outcome.translated_text,
                    ..Default::default()
                },
            )?)
            .into_response()),
            ComposedAudio::Download(download) => attachment(download),
        }
    }

    /// POST /api/speech - Convert text to speech, JSON in
    pub async fn synthesize(
        State(controller): State<Arc<SpeechController>>,
        payload: Result<Json<SpeechRequest>, JsonRejection>,
    ) -> AppResult<Response> {
        let Json(request) = payload?;
        let output_mode = request.action.parse::<OutputMode>()?;

        let outcome = controller
            .speech_service
            .process(SynthesisRequest {
                raw_text: request.text,
                uploaded_document: None,
                speed: request.speed,
                tone: request.tone,
                target_language: request.language,
                translate_requested: request.translate,
                output_mode,
            })
            .await?;

        match outcome.audio {
            ComposedAudio::Preview(preview) => Ok(Json(PreviewResponse {
                audio_base64: preview.audio_base64,
                mime_type: preview.mime_type.to_string(),
                filename: preview.filename,
                translated_text: outcome.translated_text,
            })
            .into_response()),
            ComposedAudio::Download(download) => attachment(download),
        }
    }

    /// GET /api/catalog - Tones and languages offered by the form
    pub async fn catalog(State(controller): State<Arc<SpeechController>>) -> Json<Catalog> {
        Json(controller.speech_service.catalog().clone())
    }
}

/// Redirect to the form carrying the error's user-facing message
fn flash_redirect(err: &AppError) -> Redirect {
    Redirect::to(&format!(
        "/?flash={}&level={}",
        urlencoding::encode(&err.to_string()),
        err.flash_level().as_str()
    ))
}

fn attachment(download: DownloadDescriptor) -> AppResult<Response> {
    let disposition = HeaderValue::from_str(&download.content_disposition())
        .map_err(|e| AppError::Internal(format!("Invalid attachment filename: {}", e)))?;

    tracing::info!(
        filename = %download.filename,
        size_bytes = download.bytes.len(),
        "Sending audio attachment"
    );

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(download.mime_type),
    );
    headers.insert(header::CONTENT_DISPOSITION, disposition);

    Ok((StatusCode::OK, headers, Body::from(download.bytes)).into_response())
}
