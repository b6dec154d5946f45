pub mod espeak_voice_engine;
pub mod google_translation_repository;
pub mod google_tts_repository;
pub mod local_voice_engine;
pub mod translation_repository;
pub mod tts_repository;

pub use espeak_voice_engine::EspeakVoiceEngine;
pub use google_translation_repository::GoogleTranslationRepository;
pub use google_tts_repository::GoogleTtsRepository;
pub use local_voice_engine::{LocalVoiceEngine, SystemVoice};
pub use translation_repository::TranslationRepository;
pub use tts_repository::TtsRepository;
