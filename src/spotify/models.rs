use rspotify::model::{AudioFeatures, FullArtist, FullTrack, Modality, SimplifiedArtist};
use rspotify::prelude::*;

use crate::catalog::{ArtistProfile, ArtistRef, CatalogTrack, TrackFeatures};

impl From<&SimplifiedArtist> for ArtistRef {
    fn from(artist: &SimplifiedArtist) -> Self {
        Self {
            id: artist.id.as_ref().map(|id| id.id().to_string()),
            name: artist.name.clone(),
        }
    }
}

impl From<&FullTrack> for CatalogTrack {
    fn from(track: &FullTrack) -> Self {
        Self {
            id: track.id.as_ref().map(|id| id.id().to_string()),
            name: track.name.clone(),
            artists: track.artists.iter().map(ArtistRef::from).collect(),
            album: track.album.name.clone(),
            release_date: track.album.release_date.clone().unwrap_or_default(),
            popularity: track.popularity,
        }
    }
}

impl From<AudioFeatures> for TrackFeatures {
    fn from(features: AudioFeatures) -> Self {
        let mode = match features.mode {
            Modality::Major => 1,
            Modality::Minor => 0,
            Modality::NoResult => -1,
        };

        Self {
            danceability: features.danceability,
            energy: features.energy,
            tempo: features.tempo,
            valence: features.valence,
            loudness: features.loudness,
            key: features.key,
            mode,
            speechiness: features.speechiness,
            acousticness: features.acousticness,
            instrumentalness: features.instrumentalness,
            liveness: features.liveness,
            time_signature: features.time_signature,
        }
    }
}

impl From<FullArtist> for ArtistProfile {
    fn from(artist: FullArtist) -> Self {
        Self {
            popularity: artist.popularity,
            genres: artist.genres,
            followers: artist.followers.total,
        }
    }
}
