use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::catalog::{Catalog, CatalogTrack};
use crate::config::{ExportConfig, MissingFeaturesPolicy};
use crate::error::{AppError, Result};
use crate::exporter::record::TrackRecord;
use crate::exporter::report::{ExportSummary, SkippedTrack};
use crate::spreadsheet;

pub struct PlaylistExporter<C> {
    catalog: C,
}

impl<C: Catalog> PlaylistExporter<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Fetch the playlist, build its records and write them to the
    /// configured output path.
    pub async fn export(&self, config: &ExportConfig) -> Result<ExportSummary> {
        let (records, summary) = self.build_records(config).await?;
        spreadsheet::write_records(&records, &config.output_path)?;
        Ok(summary)
    }

    /// One record per playlist track, in playlist order. Tracks without
    /// audio features are handled according to `config.missing_features`.
    pub async fn build_records(
        &self,
        config: &ExportConfig,
    ) -> Result<(Vec<TrackRecord>, ExportSummary)> {
        let tracks = self
            .catalog
            .playlist_tracks(&config.playlist_id, config.limit)
            .await?;

        info!(
            "Building records for {} tracks of playlist {}",
            tracks.len(),
            config.playlist_id
        );

        let mut summary = ExportSummary::new(config.output_path.clone(), tracks.len());
        let mut records = Vec::with_capacity(tracks.len());

        let pb = ProgressBar::new(tracks.len() as u64);
        if let Ok(style) =
            ProgressStyle::default_bar().template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            pb.set_style(style.progress_chars("#>-"));
        }

        for track in &tracks {
            pb.set_message(track.name.clone());
            match self.build_record(track, config.missing_features).await {
                Ok(Some(record)) => records.push(record),
                Ok(None) => summary.skipped.push(SkippedTrack::from(track)),
                Err(e) => {
                    pb.abandon();
                    return Err(e);
                }
            }
            pb.inc(1);
        }

        pb.finish_and_clear();
        summary.exported = records.len();

        Ok((records, summary))
    }

    async fn build_record(
        &self,
        track: &CatalogTrack,
        policy: MissingFeaturesPolicy,
    ) -> Result<Option<TrackRecord>> {
        let features = match &track.id {
            Some(id) => self.catalog.audio_features(id).await?,
            None => None,
        };

        let Some(features) = features else {
            return match policy {
                MissingFeaturesPolicy::Skip => {
                    warn!(
                        "No audio features for '{}' by {}, skipping",
                        track.name,
                        track.artist_names()
                    );
                    Ok(None)
                }
                MissingFeaturesPolicy::Abort => Err(AppError::NotFound(format!(
                    "audio features for '{}'",
                    track.name
                ))),
            };
        };

        let primary = track
            .primary_artist()
            .ok_or_else(|| AppError::NotFound(format!("artists for '{}'", track.name)))?;
        let artist_id = primary.id.as_deref().ok_or_else(|| {
            AppError::NotFound(format!("catalog ID for artist '{}'", primary.name))
        })?;

        let artist = self.catalog.artist(artist_id).await?;

        Ok(Some(TrackRecord::new(track, &features, &artist)))
    }
}
