pub mod orchestrator;
pub mod record;
pub mod report;

pub use orchestrator::PlaylistExporter;
pub use record::{COLUMNS, TrackRecord};
pub use report::{ExportSummary, SkippedTrack};
