use anyhow::{Context, Result};
use serde::Deserialize;

/// Default secrets file path, relative to the working directory.
/// Override with the `SECRETS_FILE` environment variable.
const DEFAULT_SECRETS_FILE: &str = "secrets.toml";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Completion-service credential, resolved from the secrets file first
    /// and the `GEMINI_API_KEY` environment variable second. `None` means
    /// the service runs with generation disabled.
    pub gemini_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            gemini_api_key: resolve_credential(),
        })
    }
}

/// Recognized keys of the TOML secrets file.
#[derive(Debug, Deserialize)]
struct SecretsFile {
    #[serde(rename = "GEMINI_API_KEY")]
    gemini_api_key: Option<String>,
}

/// Resolves the completion-service credential from two sources in priority
/// order: the TOML secrets file, then the environment. Empty values are
/// treated as absent.
fn resolve_credential() -> Option<String> {
    let path =
        std::env::var("SECRETS_FILE").unwrap_or_else(|_| DEFAULT_SECRETS_FILE.to_string());

    if let Ok(raw) = std::fs::read_to_string(&path) {
        match toml::from_str::<SecretsFile>(&raw) {
            Ok(secrets) => {
                if let Some(key) = secrets.gemini_api_key.filter(|k| !k.trim().is_empty()) {
                    return Some(key);
                }
            }
            Err(e) => eprintln!("warning: ignoring unparseable secrets file {path}: {e}"),
        }
    }

    std::env::var("GEMINI_API_KEY")
        .ok()
        .filter(|k| !k.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secrets_file_parses_api_key() {
        let raw = r#"GEMINI_API_KEY = "sk-test-123""#;
        let secrets: SecretsFile = toml::from_str(raw).unwrap();
        assert_eq!(secrets.gemini_api_key.as_deref(), Some("sk-test-123"));
    }

    #[test]
    fn test_secrets_file_tolerates_missing_key() {
        let raw = r#"OTHER_SECRET = "irrelevant""#;
        let secrets: SecretsFile = toml::from_str(raw).unwrap();
        assert!(secrets.gemini_api_key.is_none());
    }
}
