pub mod client;
pub mod models;

pub use client::{SpotifyCatalog, parse_playlist_id};
