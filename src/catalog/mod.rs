pub mod models;

use async_trait::async_trait;

use crate::error::Result;

pub use models::{ArtistProfile, ArtistRef, CatalogTrack, TrackFeatures};

/// Read-only view of a music catalog, as needed by the exporter.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Up to `limit` tracks of the playlist, in playlist order.
    async fn playlist_tracks(&self, playlist_id: &str, limit: u32) -> Result<Vec<CatalogTrack>>;

    /// Audio features for a track, or `None` when the catalog has none.
    async fn audio_features(&self, track_id: &str) -> Result<Option<TrackFeatures>>;

    async fn artist(&self, artist_id: &str) -> Result<ArtistProfile>;
}
