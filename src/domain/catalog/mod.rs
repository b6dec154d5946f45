use serde::Serialize;

/// Language whose speech is rendered by the local engine; every other
/// language goes to the cloud engine.
pub const LOCAL_LANGUAGE: &str = "English";

/// Language code used when a name is not in the catalog
pub const FALLBACK_LANGUAGE_CODE: &str = "en";

/// Rate multiplier applied when a tone name is not in the catalog
pub const NEUTRAL_MULTIPLIER: f64 = 1.0;

/// A tone the user can pick and the speaking-rate multiplier it implies
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToneProfile {
    pub name: String,
    pub multiplier: f64,
}

/// A language the user can pick and its speech service code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportedLanguage {
    pub name: String,
    pub code: String,
}

/// Read-only tone and language tables.
///
/// Built once at startup and shared by reference with every request;
/// nothing mutates it afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    tones: Vec<ToneProfile>,
    languages: Vec<SupportedLanguage>,
    local_language: String,
}

impl Catalog {
    pub fn new(
        tones: Vec<ToneProfile>,
        languages: Vec<SupportedLanguage>,
        local_language: impl Into<String>,
    ) -> Self {
        Self {
            tones,
            languages,
            local_language: local_language.into(),
        }
    }

    /// The tones and languages offered by the form
    pub fn standard() -> Self {
        let tones = [
            ("Normal", 1.0),
            ("Soft", 0.8),
            ("Loud", 1.2),
            ("Cry", 1.1),
            ("Happy", 1.1),
        ]
        .into_iter()
        .map(|(name, multiplier)| ToneProfile {
            name: name.to_string(),
            multiplier,
        })
        .collect();

        let languages = [
            ("English", "en"),
            ("Hindi", "hi"),
            ("Telugu", "te"),
            ("Tamil", "ta"),
            ("Marathi", "mr"),
            ("Bengali", "bn"),
            ("Kannada", "kn"),
        ]
        .into_iter()
        .map(|(name, code)| SupportedLanguage {
            name: name.to_string(),
            code: code.to_string(),
        })
        .collect();

        Self::new(tones, languages, LOCAL_LANGUAGE)
    }

    pub fn tones(&self) -> &[ToneProfile] {
        &self.tones
    }

    pub fn languages(&self) -> &[SupportedLanguage] {
        &self.languages
    }

    pub fn local_language(&self) -> &str {
        &self.local_language
    }

    /// Rate multiplier for a tone, neutral when the tone is unknown
    pub fn tone_multiplier(&self, tone: &str) -> f64 {
        self.tones
            .iter()
            .find(|t| t.name == tone)
            .map(|t| t.multiplier)
            .unwrap_or(NEUTRAL_MULTIPLIER)
    }

    /// Service code for a language name, if the name is supported
    pub fn language_code(&self, language: &str) -> Option<&str> {
        self.languages
            .iter()
            .find(|l| l.name == language)
            .map(|l| l.code.as_str())
    }

    pub fn is_supported(&self, language: &str) -> bool {
        self.language_code(language).is_some()
    }

    /// Whether the language is rendered by the local engine
    pub fn uses_local_engine(&self, language: &str) -> bool {
        language == self.local_language
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Speaking rate for the local engine: `round(speed * multiplier)`
pub fn effective_rate(speed: u32, multiplier: f64) -> u32 {
    (f64::from(speed) * multiplier).round().max(0.0) as u32
}
