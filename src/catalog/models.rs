#[derive(Debug, Clone, PartialEq)]
pub struct ArtistRef {
    /// Absent for artists of local files
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogTrack {
    /// Absent for local files
    pub id: Option<String>,
    pub name: String,
    pub artists: Vec<ArtistRef>,
    pub album: String,
    pub release_date: String,
    pub popularity: u32,
}

impl CatalogTrack {
    pub fn primary_artist(&self) -> Option<&ArtistRef> {
        self.artists.first()
    }

    pub fn artist_names(&self) -> String {
        self.artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackFeatures {
    pub danceability: f32,
    pub energy: f32,
    pub tempo: f32,
    pub valence: f32,
    pub loudness: f32,
    pub key: i32,
    /// 1 = major, 0 = minor, -1 = undetermined
    pub mode: i32,
    pub speechiness: f32,
    pub acousticness: f32,
    pub instrumentalness: f32,
    pub liveness: f32,
    pub time_signature: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArtistProfile {
    pub popularity: u32,
    pub genres: Vec<String>,
    pub followers: u32,
}

#[cfg(test)]
impl CatalogTrack {
    pub fn mock(id: &str, name: &str, artists: &[&str]) -> Self {
        Self {
            id: Some(id.to_string()),
            name: name.to_string(),
            artists: artists
                .iter()
                .map(|artist| ArtistRef {
                    id: Some(format!("{}_id", artist)),
                    name: artist.to_string(),
                })
                .collect(),
            album: "Mock Album".to_string(),
            release_date: "2024-01-01".to_string(),
            popularity: 50,
        }
    }
}

#[cfg(test)]
impl TrackFeatures {
    pub fn mock() -> Self {
        Self {
            danceability: 0.5,
            energy: 0.6,
            tempo: 120.0,
            valence: 0.4,
            loudness: -6.5,
            key: 5,
            mode: 1,
            speechiness: 0.05,
            acousticness: 0.2,
            instrumentalness: 0.0,
            liveness: 0.1,
            time_signature: 4,
        }
    }
}

#[cfg(test)]
impl ArtistProfile {
    pub fn mock(popularity: u32) -> Self {
        Self {
            popularity,
            genres: vec!["pop".to_string(), "dance pop".to_string()],
            followers: 1_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artist_names_joined_in_order() {
        let track = CatalogTrack::mock("t1", "Song", &["A", "B", "C"]);
        assert_eq!(track.artist_names(), "A, B, C");
    }

    #[test]
    fn test_single_artist_has_no_separator() {
        let track = CatalogTrack::mock("t1", "Song", &["Solo"]);
        assert_eq!(track.artist_names(), "Solo");
        assert_eq!(track.primary_artist().map(|a| a.name.as_str()), Some("Solo"));
    }
}
