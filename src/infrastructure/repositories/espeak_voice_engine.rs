//! espeak-ng local speech engine
//!
//! Drives the `espeak-ng` command line tool: `--voices=<lang>` lists the
//! installed voices and `-w <file>` renders WAV output with the text read
//! from stdin.

use super::local_voice_engine::{LocalVoiceEngine, SystemVoice};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

pub struct EspeakVoiceEngine {
    executable_path: PathBuf,
    voice_language: String,
}

impl EspeakVoiceEngine {
    pub fn new(executable_path: impl Into<PathBuf>, voice_language: impl Into<String>) -> Self {
        Self {
            executable_path: executable_path.into(),
            voice_language: voice_language.into(),
        }
    }

    fn spawn_error(&self, e: std::io::Error) -> String {
        if e.kind() == std::io::ErrorKind::NotFound {
            format!(
                "espeak-ng not found at '{}'",
                self.executable_path.display()
            )
        } else {
            format!("Failed to run espeak-ng: {}", e)
        }
    }
}

#[async_trait]
impl LocalVoiceEngine for EspeakVoiceEngine {
    async fn list_voices(&self) -> Result<Vec<SystemVoice>, String> {
        let output = Command::new(&self.executable_path)
            .arg(format!("--voices={}", self.voice_language))
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| self.spawn_error(e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(format!(
                "espeak-ng --voices exited with status {}: {}",
                output.status,
                stderr.trim()
            ));
        }

        let voices = parse_voice_listing(&String::from_utf8_lossy(&output.stdout));
        tracing::debug!(voice_count = voices.len(), "Local voices listed");
        Ok(voices)
    }

    async fn render_to_file(
        &self,
        text: &str,
        rate: u32,
        voice: Option<&str>,
        output: &Path,
    ) -> Result<(), String> {
        let mut cmd = Command::new(&self.executable_path);
        cmd.arg("-s").arg(rate.to_string());
        if let Some(voice) = voice {
            cmd.arg("-v").arg(voice);
        }
        cmd.arg("-w")
            .arg(output)
            .arg("--stdin")
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        tracing::debug!(rate = rate, voice = ?voice, "Running espeak-ng");

        let mut child = cmd.spawn().map_err(|e| self.spawn_error(e))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .await
                .map_err(|e| format!("Failed to write to espeak-ng stdin: {}", e))?;
            // dropping stdin closes it so espeak-ng sees end of input
        }

        let result = child
            .wait_with_output()
            .await
            .map_err(|e| format!("Failed to wait for espeak-ng: {}", e))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            tracing::error!(stderr = %stderr.trim(), "espeak-ng failed");
            return Err(format!(
                "espeak-ng exited with status {}: {}",
                result.status,
                stderr.trim()
            ));
        }

        Ok(())
    }

    async fn is_available(&self) -> bool {
        Command::new(&self.executable_path)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

/// Parse the table printed by `espeak-ng --voices`:
///
/// ```text
/// Pty Language       Age/Gender VoiceName          File                 Other Languages
///  2  en-gb           --/M      English_(Great_Britain) gmw/en          (en 2)
/// ```
///
/// The language column is what `-v` accepts; the voice name has its
/// underscores turned back into spaces.
fn parse_voice_listing(listing: &str) -> Vec<SystemVoice> {
    listing
        .lines()
        .skip(1)
        .filter_map(|line| {
            let mut columns = line.split_whitespace();
            let _priority = columns.next()?;
            let language = columns.next()?;
            let _age_gender = columns.next()?;
            let name = columns.next()?;
            Some(SystemVoice::new(language, name.replace('_', " ")))
        })
        .collect()
}
