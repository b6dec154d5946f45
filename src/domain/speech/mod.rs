pub mod acquire;
pub mod compose;
pub mod dto;
pub mod error;
pub mod model;
pub mod service;
pub mod voice;

pub use compose::{ComposedAudio, DownloadDescriptor, PreviewResult};
pub use dto::{PreviewResponse, SpeechRequest};
pub use error::SpeechServiceError;
pub use model::{AudioPayload, OutputMode, SynthesisRequest, UploadedDocument};
pub use service::{SpeechService, SpeechServiceApi, SynthesisOutcome};
pub use voice::VoiceStrategy;
