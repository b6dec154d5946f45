use echoverse::controllers::speech::SpeechController;
use echoverse::domain::catalog::Catalog;
use echoverse::domain::speech::{SpeechService, VoiceStrategy};
use echoverse::infrastructure::config::{Config, Environment, LogFormat};
use echoverse::infrastructure::http::create_router;
use echoverse::infrastructure::repositories::{GoogleTranslationRepository, GoogleTtsRepository};
use std::sync::Arc;
use std::time::Duration;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;
use wiremock::MockServer;

pub mod api_client;
pub mod fakes;

use api_client::TestClient;
use fakes::FakeLocalEngine;

pub struct TestContext {
    pub client: TestClient,
    #[allow(dead_code)]
    pub config: Config,
    /// Stands in for the translation service
    pub translate_server: MockServer,
    /// Stands in for the cloud speech service
    pub tts_server: MockServer,
    pub local_engine: Arc<FakeLocalEngine>,
}

impl TestContext {
    /// Start the app against mock cloud services and the given local engine
    pub async fn with_local_engine(local_engine: FakeLocalEngine) -> Self {
        let translate_server = MockServer::start().await;
        let tts_server = MockServer::start().await;

        // Create test configuration
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 0, // Will be assigned by the OS
            environment: Environment::Development,
            log_format: LogFormat::Pretty,
            espeak_path: "espeak-ng".into(),
            local_tts_language: "en".to_string(),
            local_tts_voice: None,
            local_tts_timeout_secs: Some(5),
            translate_base_url: translate_server.uri(),
            cloud_tts_base_url: tts_server.uri(),
            http_timeout_secs: 5,
            max_upload_bytes: 1024 * 1024,
        };

        let local_engine = Arc::new(local_engine);
        let app = create_app(&config, local_engine.clone());

        // Start server
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind listener");
        let addr = listener.local_addr().expect("Failed to get local addr");
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to be ready
        tokio::time::sleep(Duration::from_millis(50)).await;

        Self {
            client: TestClient::new(&base_url),
            config,
            translate_server,
            tts_server,
            local_engine,
        }
    }
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async { TestContext::with_local_engine(FakeLocalEngine::new()).await }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {
            // Mock expectations are verified when the servers are dropped
        }
    }
}

fn create_app(config: &Config, local_engine: Arc<FakeLocalEngine>) -> axum::Router {
    let http_client = reqwest::Client::builder()
        .timeout(config.http_timeout())
        .build()
        .expect("Failed to build HTTP client");

    let translation_repo = Arc::new(GoogleTranslationRepository::new(
        http_client.clone(),
        config.translate_base_url.clone(),
    ));
    let tts_repo = Arc::new(GoogleTtsRepository::new(
        http_client,
        config.cloud_tts_base_url.clone(),
    ));

    let speech_service = Arc::new(SpeechService::new(
        Arc::new(Catalog::standard()),
        translation_repo,
        tts_repo,
        local_engine,
        VoiceStrategy::PreferFemale,
        config.local_tts_timeout(),
    ));
    let speech_controller = Arc::new(SpeechController::new(speech_service.clone()));

    create_router(config, speech_service, speech_controller)
}
