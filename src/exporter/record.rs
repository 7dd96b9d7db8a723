use crate::catalog::{ArtistProfile, CatalogTrack, TrackFeatures};

/// Column headers, in the order they are written.
pub const COLUMNS: [&str; 20] = [
    "Track Name",
    "Artists",
    "Album",
    "Release Date",
    "Track Popularity",
    "Danceability",
    "Energy",
    "Tempo",
    "Valence",
    "Loudness",
    "Key",
    "Mode",
    "Speechiness",
    "Acousticness",
    "Instrumentalness",
    "Liveness",
    "Time Signature",
    "Artist Popularity",
    "Artist Genre",
    "Artist Followers",
];

/// A single spreadsheet cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
}

/// One flattened output row: playlist item, audio features and primary
/// artist merged together.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackRecord {
    pub track_name: String,
    pub artists: String,
    pub album: String,
    pub release_date: String,
    pub track_popularity: u32,
    pub danceability: f32,
    pub energy: f32,
    pub tempo: f32,
    pub valence: f32,
    pub loudness: f32,
    pub key: i32,
    pub mode: i32,
    pub speechiness: f32,
    pub acousticness: f32,
    pub instrumentalness: f32,
    pub liveness: f32,
    pub time_signature: i32,
    pub artist_popularity: u32,
    pub artist_genre: String,
    pub artist_followers: u32,
}

impl TrackRecord {
    pub fn new(track: &CatalogTrack, features: &TrackFeatures, artist: &ArtistProfile) -> Self {
        Self {
            track_name: track.name.clone(),
            artists: track.artist_names(),
            album: track.album.clone(),
            release_date: track.release_date.clone(),
            track_popularity: track.popularity,
            danceability: features.danceability,
            energy: features.energy,
            tempo: features.tempo,
            valence: features.valence,
            loudness: features.loudness,
            key: features.key,
            mode: features.mode,
            speechiness: features.speechiness,
            acousticness: features.acousticness,
            instrumentalness: features.instrumentalness,
            liveness: features.liveness,
            time_signature: features.time_signature,
            artist_popularity: artist.popularity,
            artist_genre: artist.genres.join(", "),
            artist_followers: artist.followers,
        }
    }

    /// Cell values in [`COLUMNS`] order.
    pub fn cells(&self) -> [Cell<'_>; 20] {
        [
            Cell::Text(&self.track_name),
            Cell::Text(&self.artists),
            Cell::Text(&self.album),
            Cell::Text(&self.release_date),
            Cell::Number(self.track_popularity.into()),
            Cell::Number(self.danceability.into()),
            Cell::Number(self.energy.into()),
            Cell::Number(self.tempo.into()),
            Cell::Number(self.valence.into()),
            Cell::Number(self.loudness.into()),
            Cell::Number(self.key.into()),
            Cell::Number(self.mode.into()),
            Cell::Number(self.speechiness.into()),
            Cell::Number(self.acousticness.into()),
            Cell::Number(self.instrumentalness.into()),
            Cell::Number(self.liveness.into()),
            Cell::Number(self.time_signature.into()),
            Cell::Number(self.artist_popularity.into()),
            Cell::Text(&self.artist_genre),
            Cell::Number(self.artist_followers.into()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_merges_all_sources() {
        let track = CatalogTrack::mock("t1", "Song", &["A", "B"]);
        let features = TrackFeatures {
            danceability: 0.7,
            ..TrackFeatures::mock()
        };
        let artist = ArtistProfile::mock(80);

        let record = TrackRecord::new(&track, &features, &artist);

        assert_eq!(record.track_name, "Song");
        assert_eq!(record.artists, "A, B");
        assert_eq!(record.album, "Mock Album");
        assert_eq!(record.release_date, "2024-01-01");
        assert_eq!(record.danceability, 0.7);
        assert_eq!(record.artist_popularity, 80);
        assert_eq!(record.artist_genre, "pop, dance pop");
        assert_eq!(record.artist_followers, 1_000);
    }

    #[test]
    fn test_cells_follow_column_order() {
        let record = TrackRecord::new(
            &CatalogTrack::mock("t1", "Song", &["A"]),
            &TrackFeatures::mock(),
            &ArtistProfile::mock(42),
        );
        let cells = record.cells();

        let index = |name: &str| COLUMNS.iter().position(|c| *c == name).unwrap();
        assert_eq!(cells[index("Track Name")], Cell::Text("Song"));
        assert_eq!(cells[index("Key")], Cell::Number(5.0));
        assert_eq!(cells[index("Mode")], Cell::Number(1.0));
        assert_eq!(cells[index("Tempo")], Cell::Number(120.0));
        assert_eq!(cells[index("Artist Popularity")], Cell::Number(42.0));
        assert_eq!(cells[index("Artist Genre")], Cell::Text("pop, dance pop"));
    }

    #[test]
    fn test_artist_without_genres_is_empty_text() {
        let artist = ArtistProfile {
            genres: Vec::new(),
            ..ArtistProfile::mock(10)
        };
        let record = TrackRecord::new(
            &CatalogTrack::mock("t1", "Song", &["A"]),
            &TrackFeatures::mock(),
            &artist,
        );
        assert_eq!(record.artist_genre, "");
    }
}
