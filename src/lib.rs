pub mod catalog;
pub mod config;
pub mod error;
pub mod exporter;
pub mod spotify;
pub mod spreadsheet;

pub use catalog::{ArtistProfile, Catalog, CatalogTrack, TrackFeatures};
pub use config::{Credentials, ExportConfig, MissingFeaturesPolicy};
pub use error::{AppError, Result};
pub use exporter::{ExportSummary, PlaylistExporter, TrackRecord};
pub use spotify::{SpotifyCatalog, parse_playlist_id};
