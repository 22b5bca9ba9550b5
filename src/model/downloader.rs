use crate::config::Config;
use crate::error::Result;
use crate::model::destination_path;
use serde::Serialize;
use std::path::PathBuf;

/// One "download snapshot of repo R at revision V into directory D" call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotRequest {
    pub repo_id: String,
    pub local_dir: PathBuf,
    pub use_symlinks: bool,
    pub revision: String,
}

/// Whatever actually moves the bytes.
///
/// Implementations own transport, retries, resume and the shared cache.
/// They return the materialized files relative to `local_dir`.
pub trait SnapshotSource {
    fn download_snapshot(&self, request: &SnapshotRequest) -> Result<Vec<PathBuf>>;
}

#[derive(Debug, Clone, Serialize)]
pub struct FetchReport {
    pub repo_id: String,
    pub revision: String,
    pub destination: PathBuf,
    pub files: Vec<PathBuf>,
    pub fetched_at: String,
}

pub struct Fetcher<S> {
    config: Config,
    source: S,
}

impl<S: SnapshotSource> Fetcher<S> {
    pub fn new(config: Config, source: S) -> Self {
        Self { config, source }
    }

    pub fn fetch(&self, model_id: &str) -> Result<FetchReport> {
        let destination = destination_path(&self.config.models_dir, model_id);
        println!("{}", destination.display());

        let request = SnapshotRequest {
            repo_id: model_id.to_string(),
            local_dir: destination.clone(),
            use_symlinks: false,
            revision: self.config.revision.clone(),
        };

        tracing::info!(
            "Fetching {} at revision '{}' into {:?}",
            request.repo_id,
            request.revision,
            request.local_dir
        );

        let files = self.source.download_snapshot(&request)?;

        tracing::info!("Fetched {} files for {}", files.len(), model_id);

        Ok(FetchReport {
            repo_id: request.repo_id,
            revision: request.revision,
            destination,
            files,
            fetched_at: chrono::Utc::now().to_rfc3339(),
        })
    }
}
