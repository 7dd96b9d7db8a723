use std::path::PathBuf;

use crate::catalog::CatalogTrack;

#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub output_path: PathBuf,
    pub fetched: usize,
    pub exported: usize,
    pub skipped: Vec<SkippedTrack>,
}

/// A playlist track left out of the export for lack of audio features.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedTrack {
    pub name: String,
    pub artists: String,
    pub album: String,
}

impl ExportSummary {
    pub fn new(output_path: PathBuf, fetched: usize) -> Self {
        Self {
            output_path,
            fetched,
            exported: 0,
            skipped: Vec::new(),
        }
    }
}

impl From<&CatalogTrack> for SkippedTrack {
    fn from(track: &CatalogTrack) -> Self {
        Self {
            name: track.name.clone(),
            artists: track.artist_names(),
            album: track.album.clone(),
        }
    }
}
