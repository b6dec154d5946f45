use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use echoverse::controllers::speech::SpeechController;
use echoverse::domain::catalog::Catalog;
use echoverse::domain::speech::{SpeechService, VoiceStrategy};
use echoverse::infrastructure::config::{Config, LogFormat};
use echoverse::infrastructure::http::{create_router, start_http_server};
use echoverse::infrastructure::repositories::{
    EspeakVoiceEngine, GoogleTranslationRepository, GoogleTtsRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting EchoVerse on {}:{}",
        config.host,
        config.port
    );
    tracing::info!(
        environment = ?config.environment,
        development = config.is_development(),
        "Configuration loaded"
    );

    // Shared HTTP client for the cloud collaborators
    let http_client = reqwest::Client::builder()
        .timeout(config.http_timeout())
        .build()?;

    // Catalog tables, fixed for the life of the process
    let catalog = Arc::new(Catalog::standard());
    tracing::info!(
        tones = catalog.tones().len(),
        languages = catalog.languages().len(),
        local_language = catalog.local_language(),
        "Catalog loaded"
    );

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories
    tracing::info!("Instantiating repositories...");
    let translation_repo = Arc::new(GoogleTranslationRepository::new(
        http_client.clone(),
        config.translate_base_url.clone(),
    ));
    let tts_repo = Arc::new(GoogleTtsRepository::new(
        http_client,
        config.cloud_tts_base_url.clone(),
    ));
    let local_engine = Arc::new(EspeakVoiceEngine::new(
        config.espeak_path.clone(),
        config.local_tts_language.clone(),
    ));

    let voice_strategy = match &config.local_tts_voice {
        Some(voice) => VoiceStrategy::Named(voice.clone()),
        None => VoiceStrategy::PreferFemale,
    };
    tracing::info!(
        espeak_path = %config.espeak_path.display(),
        voice_strategy = ?voice_strategy,
        render_timeout = ?config.local_tts_timeout(),
        "Local speech engine configured"
    );

    // 2. Instantiate services
    tracing::info!("Instantiating services...");
    let speech_service = Arc::new(SpeechService::new(
        catalog,
        translation_repo,
        tts_repo,
        local_engine,
        voice_strategy,
        config.local_tts_timeout(),
    ));

    if !speech_service.local_engine_available().await {
        tracing::warn!("Local speech engine not available; English synthesis will fail until it is installed");
    }

    // 3. Instantiate controllers
    tracing::info!("Instantiating controllers...");
    let speech_controller = Arc::new(SpeechController::new(speech_service.clone()));

    // Start HTTP server with all routes
    let app = create_router(&config, speech_service, speech_controller);
    start_http_server(Arc::new(config), app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "echoverse=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "echoverse=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
