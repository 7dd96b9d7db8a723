use async_trait::async_trait;
use rspotify::{
    AuthCodeSpotify, ClientCredsSpotify, ClientError, Credentials as SpotifyCredentials, OAuth,
    http::HttpError,
    model::{ArtistId, AudioFeatures, PlayableItem, PlaylistId, TrackId},
    prelude::*,
    scopes,
};
use std::io::{self, Write};
use tracing::{debug, info};
use url::Url;

use crate::catalog::{ArtistProfile, Catalog, CatalogTrack, TrackFeatures};
use crate::config::Credentials;
use crate::error::{AppError, Result};

/// Spotify Web API behind the [`Catalog`] interface.
pub struct SpotifyCatalog<C> {
    client: C,
}

impl SpotifyCatalog<AuthCodeSpotify> {
    /// Authorization-code flow: the user opens the printed URL and pastes
    /// back the URL they were redirected to.
    pub async fn authorize_user(credentials: &Credentials) -> Result<Self> {
        let creds = SpotifyCredentials::new(&credentials.client_id, &credentials.client_secret);

        let oauth = OAuth {
            redirect_uri: credentials.redirect_uri.clone(),
            scopes: scopes!("playlist-read-private"),
            ..Default::default()
        };

        let client = AuthCodeSpotify::new(creds, oauth);

        let auth_url = client.get_authorize_url(false)?;
        println!("\nOpen this URL in your browser to authorize Spotify:");
        println!("{}\n", auth_url);

        print!("Enter the URL you were redirected to: ");
        io::stdout().flush()?;

        let mut redirect_url = String::new();
        io::stdin().read_line(&mut redirect_url)?;

        let code = client
            .parse_response_code(redirect_url.trim())
            .ok_or_else(|| AppError::Auth("Failed to parse authorization code".into()))?;

        client
            .request_token(&code)
            .await
            .map_err(|e| token_error(e, "authorization code"))?;

        info!("Authenticated with Spotify as a user");

        Ok(Self { client })
    }
}

impl SpotifyCatalog<ClientCredsSpotify> {
    /// Client-credentials flow. Only public playlists are reachable.
    pub async fn authorize_app(credentials: &Credentials) -> Result<Self> {
        let creds = SpotifyCredentials::new(&credentials.client_id, &credentials.client_secret);
        let client = ClientCredsSpotify::new(creds);

        client
            .request_token()
            .await
            .map_err(|e| token_error(e, "client credentials"))?;

        info!("Authenticated with Spotify using client credentials");

        Ok(Self { client })
    }
}

#[async_trait]
impl<C> Catalog for SpotifyCatalog<C>
where
    C: BaseClient + Send + Sync,
{
    async fn playlist_tracks(&self, playlist_id: &str, limit: u32) -> Result<Vec<CatalogTrack>> {
        let id = PlaylistId::from_id(playlist_id)
            .map_err(|e| AppError::Config(format!("Invalid playlist ID: {}", e)))?;

        let page = self
            .client
            .playlist_items_manual(id, None, None, Some(limit), Some(0))
            .await
            .map_err(|e| classify(e, &format!("playlist {}", playlist_id)))?;

        let mut tracks = Vec::with_capacity(page.items.len());
        for item in &page.items {
            match &item.track {
                Some(PlayableItem::Track(track)) => tracks.push(CatalogTrack::from(track)),
                Some(PlayableItem::Episode(episode)) => {
                    debug!("Skipping podcast episode: {}", episode.name);
                }
                None => debug!("Skipping unavailable playlist entry"),
            }
        }

        info!(
            "Fetched {} tracks from playlist {} ({} total)",
            tracks.len(),
            playlist_id,
            page.total
        );
        Ok(tracks)
    }

    async fn audio_features(&self, track_id: &str) -> Result<Option<TrackFeatures>> {
        let id = TrackId::from_id(track_id)
            .map_err(|e| AppError::Config(format!("Invalid track ID: {}", e)))?;

        features_or_none(self.client.track_features(id).await, track_id)
    }

    async fn artist(&self, artist_id: &str) -> Result<ArtistProfile> {
        let id = ArtistId::from_id(artist_id)
            .map_err(|e| AppError::Config(format!("Invalid artist ID: {}", e)))?;

        let artist = self
            .client
            .artist(id)
            .await
            .map_err(|e| classify(e, &format!("artist {}", artist_id)))?;

        Ok(artist.into())
    }
}

fn status_code(err: &ClientError) -> Option<u16> {
    match err {
        ClientError::Http(http) => match http.as_ref() {
            HttpError::StatusCode(response) => Some(response.status().as_u16()),
            _ => None,
        },
        _ => None,
    }
}

/// A 404 from the audio-features endpoint means the track has no features.
fn features_or_none(
    result: std::result::Result<AudioFeatures, ClientError>,
    track_id: &str,
) -> Result<Option<TrackFeatures>> {
    match result {
        Ok(features) => Ok(Some(features.into())),
        Err(e) if status_code(&e) == Some(404) => Ok(None),
        Err(e) => Err(classify(e, &format!("audio features for {}", track_id))),
    }
}

/// The token endpoint answers bad credentials or a bad authorization code
/// with 400, so any HTTP status there is an authentication failure.
fn token_error(err: ClientError, what: &str) -> AppError {
    match status_code(&err) {
        Some(status) => AppError::Auth(format!(
            "Spotify rejected the {} (HTTP {})",
            what, status
        )),
        None => AppError::SpotifyApi(err),
    }
}

/// Maps a client error onto the failure the caller cares about, keyed on
/// the HTTP status the service answered with.
fn classify(err: ClientError, what: &str) -> AppError {
    match status_code(&err) {
        Some(401) | Some(403) => AppError::Auth(format!("Spotify rejected the request for {}", what)),
        Some(404) => AppError::NotFound(what.to_string()),
        Some(429) => AppError::RateLimited(what.to_string()),
        _ => AppError::SpotifyApi(err),
    }
}

/// Extract a playlist ID from a bare ID, a Spotify URI or an
/// `open.spotify.com` URL.
/// Supports formats:
/// - 37i9dQZF1E8NC99vGqLsaH
/// - https://open.spotify.com/playlist/37i9dQZF1E8NC99vGqLsaH?si=...
/// - spotify:playlist:37i9dQZF1E8NC99vGqLsaH
pub fn parse_playlist_id(input: &str) -> Result<String> {
    let input = input.trim();

    if let Some(id) = input.strip_prefix("spotify:playlist:") {
        return Ok(id.to_string());
    }

    if !input.contains('/') && !input.contains(':') {
        if input.is_empty() {
            return Err(AppError::Config("Playlist ID is empty".into()));
        }
        return Ok(input.to_string());
    }

    let url = Url::parse(input).map_err(|e| AppError::Config(format!("Invalid URL: {}", e)))?;

    let path_segments: Vec<&str> = url
        .path_segments()
        .ok_or_else(|| AppError::Config("Invalid Spotify URL".into()))?
        .collect();

    // Expect /playlist/{id}
    if path_segments.len() >= 2 && path_segments[0] == "playlist" && !path_segments[1].is_empty()
    {
        Ok(path_segments[1].to_string())
    } else {
        Err(AppError::Config(
            "URL does not appear to be a Spotify playlist URL".into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_id() {
        assert_eq!(
            parse_playlist_id("37i9dQZF1DWWWXigQZAD8B").unwrap(),
            "37i9dQZF1DWWWXigQZAD8B"
        );
    }

    #[test]
    fn test_parse_uri() {
        assert_eq!(
            parse_playlist_id("spotify:playlist:37i9dQZF1DWWWXigQZAD8B").unwrap(),
            "37i9dQZF1DWWWXigQZAD8B"
        );
    }

    #[test]
    fn test_parse_url_with_query() {
        assert_eq!(
            parse_playlist_id("https://open.spotify.com/playlist/37i9dQZF1DWWWXigQZAD8B?si=abc")
                .unwrap(),
            "37i9dQZF1DWWWXigQZAD8B"
        );
    }

    #[test]
    fn test_parse_rejects_non_playlist_url() {
        let err = parse_playlist_id("https://open.spotify.com/album/1DFixLWuPkv3KT3TnV35m3")
            .unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(matches!(parse_playlist_id("  "), Err(AppError::Config(_))));
    }

    fn http_error(status: u16) -> ClientError {
        let response = http::Response::builder().status(status).body("").unwrap();
        ClientError::Http(Box::new(HttpError::StatusCode(reqwest::Response::from(
            response,
        ))))
    }

    #[test]
    fn test_classify_status_table() {
        assert!(matches!(classify(http_error(401), "x"), AppError::Auth(_)));
        assert!(matches!(classify(http_error(403), "x"), AppError::Auth(_)));
        assert!(matches!(
            classify(http_error(404), "playlist x"),
            AppError::NotFound(what) if what == "playlist x"
        ));
        assert!(matches!(classify(http_error(429), "x"), AppError::RateLimited(_)));
        assert!(matches!(classify(http_error(500), "x"), AppError::SpotifyApi(_)));
    }

    #[test]
    fn test_missing_audio_features_become_none() {
        let features = features_or_none(Err(http_error(404)), "t1").unwrap();
        assert!(features.is_none());
    }

    #[test]
    fn test_audio_features_errors_other_than_404_propagate() {
        let err = features_or_none(Err(http_error(429)), "t1").unwrap_err();
        assert!(matches!(err, AppError::RateLimited(what) if what.contains("t1")));

        let err = features_or_none(Err(http_error(401)), "t1").unwrap_err();
        assert!(matches!(err, AppError::Auth(_)));
    }

    #[test]
    fn test_rejected_token_request_is_auth_error() {
        for status in [400, 401, 403] {
            let err = token_error(http_error(status), "client credentials");
            assert!(
                matches!(&err, AppError::Auth(msg) if msg.contains(&status.to_string())),
                "status {} gave {:?}",
                status,
                err
            );
        }
    }

    #[test]
    fn test_token_transport_errors_are_not_auth() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err = token_error(ClientError::ParseJson(json_err), "client credentials");
        assert!(matches!(err, AppError::SpotifyApi(_)));
    }

    #[test]
    fn test_non_http_errors_are_passed_through() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err = classify(ClientError::ParseJson(json_err), "playlist x");
        assert!(matches!(err, AppError::SpotifyApi(_)));
    }
}
