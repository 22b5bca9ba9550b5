pub mod downloader;
pub mod hub;

pub use downloader::{FetchReport, Fetcher, SnapshotRequest, SnapshotSource};
pub use hub::HubSnapshot;

use std::path::{Path, PathBuf};

/// Folder name for a repository id: whatever follows the last `/`.
///
/// Ids without a separator are used whole; nothing is validated.
pub fn local_name(model_id: &str) -> &str {
    model_id.split('/').next_back().unwrap_or(model_id)
}

pub fn destination_path(models_dir: &Path, model_id: &str) -> PathBuf {
    models_dir.join(local_name(model_id))
}
