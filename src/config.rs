use std::path::PathBuf;

use crate::error::{AppError, Result};

pub const DEFAULT_PLAYLIST_ID: &str = "37i9dQZF1DWWWXigQZAD8B";
pub const DEFAULT_OUTPUT_PATH: &str = "output/output.xlsx";
pub const DEFAULT_TRACK_LIMIT: u32 = 20;
pub const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:8080/callback";

#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

impl Credentials {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves credentials through `lookup`, preferring non-empty
    /// `SPOTIFY_*` names and falling back to the `SPOTIPY_*` spelling.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            let primary = lookup(&format!("SPOTIFY_{name}"));
            primary
                .clone()
                .filter(|value| !value.is_empty())
                .or_else(|| lookup(&format!("SPOTIPY_{name}")))
                .or(primary)
        };

        let client_id = read("CLIENT_ID")
            .ok_or_else(|| AppError::Config("SPOTIFY_CLIENT_ID not set".into()))?;

        let client_secret = read("CLIENT_SECRET")
            .ok_or_else(|| AppError::Config("SPOTIFY_CLIENT_SECRET not set".into()))?;

        let redirect_uri =
            read("REDIRECT_URI").unwrap_or_else(|| DEFAULT_REDIRECT_URI.to_string());

        Ok(Self {
            client_id,
            client_secret,
            redirect_uri,
        })
    }

    pub fn missing(&self) -> Vec<String> {
        let mut missing = Vec::new();

        if self.client_id.is_empty() {
            missing.push("SPOTIFY_CLIENT_ID".to_string());
        }
        if self.client_secret.is_empty() {
            missing.push("SPOTIFY_CLIENT_SECRET".to_string());
        }

        missing
    }
}

/// What to do with a track the catalog has no audio features for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum MissingFeaturesPolicy {
    /// Log the track and leave it out of the export
    #[default]
    Skip,
    /// Fail the whole run
    Abort,
}

#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub playlist_id: String,
    pub output_path: PathBuf,
    pub limit: u32,
    pub missing_features: MissingFeaturesPolicy,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            playlist_id: DEFAULT_PLAYLIST_ID.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            limit: DEFAULT_TRACK_LIMIT,
            missing_features: MissingFeaturesPolicy::Skip,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_reads_spotify_names() {
        let creds = Credentials::from_lookup(lookup_from(&[
            ("SPOTIFY_CLIENT_ID", "id"),
            ("SPOTIFY_CLIENT_SECRET", "secret"),
            ("SPOTIFY_REDIRECT_URI", "http://localhost:9000/cb"),
        ]))
        .unwrap();

        assert_eq!(creds.client_id, "id");
        assert_eq!(creds.client_secret, "secret");
        assert_eq!(creds.redirect_uri, "http://localhost:9000/cb");
        assert!(creds.missing().is_empty());
    }

    #[test]
    fn test_falls_back_to_spotipy_names() {
        let creds = Credentials::from_lookup(lookup_from(&[
            ("SPOTIPY_CLIENT_ID", "legacy-id"),
            ("SPOTIPY_CLIENT_SECRET", "legacy-secret"),
        ]))
        .unwrap();

        assert_eq!(creds.client_id, "legacy-id");
        assert_eq!(creds.client_secret, "legacy-secret");
        assert_eq!(creds.redirect_uri, DEFAULT_REDIRECT_URI);
    }

    #[test]
    fn test_empty_spotify_name_falls_back_to_spotipy() {
        let creds = Credentials::from_lookup(lookup_from(&[
            ("SPOTIFY_CLIENT_ID", ""),
            ("SPOTIPY_CLIENT_ID", "legacy-id"),
            ("SPOTIFY_CLIENT_SECRET", "secret"),
        ]))
        .unwrap();

        assert_eq!(creds.client_id, "legacy-id");
        assert!(creds.missing().is_empty());
    }

    #[test]
    fn test_missing_secret_is_config_error() {
        let err = Credentials::from_lookup(lookup_from(&[("SPOTIFY_CLIENT_ID", "id")]))
            .unwrap_err();

        assert!(matches!(err, AppError::Config(msg) if msg.contains("SPOTIFY_CLIENT_SECRET")));
    }

    #[test]
    fn test_missing_reports_empty_values() {
        let creds = Credentials::from_lookup(lookup_from(&[
            ("SPOTIFY_CLIENT_ID", ""),
            ("SPOTIFY_CLIENT_SECRET", "secret"),
        ]))
        .unwrap();

        assert_eq!(creds.missing(), vec!["SPOTIFY_CLIENT_ID".to_string()]);
    }

    #[test]
    fn test_export_config_defaults() {
        let config = ExportConfig::default();
        assert_eq!(config.limit, 20);
        assert_eq!(config.missing_features, MissingFeaturesPolicy::Skip);
        assert_eq!(config.output_path, PathBuf::from("output/output.xlsx"));
    }
}
