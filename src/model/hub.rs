use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::{SnapshotRequest, SnapshotSource};
use hf_hub::api::sync::{Api, ApiBuilder};
use hf_hub::{Repo, RepoType};
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Snapshot downloads through the Hugging Face hub sync client.
///
/// Files land in the shared hf-hub cache first and are then copied into
/// the destination, so a fetched model takes twice its size on disk until
/// the cache is pruned. Point `MODEL_FETCH_CACHE_DIR` at scratch space to
/// keep the cache copy off the target volume.
pub struct HubSnapshot {
    api: Api,
}

impl HubSnapshot {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = ApiBuilder::from_env();

        if let Some(cache_dir) = &config.cache_dir {
            tracing::debug!("Using hub cache at {:?}", cache_dir);
            builder = builder.with_cache_dir(cache_dir.clone());
        }
        if config.token.is_some() {
            builder = builder.with_token(config.token.clone());
        }

        let api = builder.build()?;
        Ok(Self { api })
    }
}

fn hub_repo(request: &SnapshotRequest) -> Repo {
    Repo::with_revision(
        request.repo_id.clone(),
        RepoType::Model,
        request.revision.clone(),
    )
}

impl SnapshotSource for HubSnapshot {
    fn download_snapshot(&self, request: &SnapshotRequest) -> Result<Vec<PathBuf>> {
        let repo = self.api.repo(hub_repo(request));

        let info = repo.info()?;
        tracing::info!(
            "{} has {} files at commit {}",
            request.repo_id,
            info.siblings.len(),
            info.sha
        );

        let files: Vec<String> = info.siblings.into_iter().map(|s| s.rfilename).collect();
        materialize_all(&files, request, |name| Ok(repo.get(name)?))
    }
}

/// Fetches each listed file through `get` and places it under `local_dir`.
fn materialize_all<F>(files: &[String], request: &SnapshotRequest, mut get: F) -> Result<Vec<PathBuf>>
where
    F: FnMut(&str) -> Result<PathBuf>,
{
    let relatives = files
        .iter()
        .map(|name| relative_hub_path(name))
        .collect::<Result<Vec<_>>>()?;

    fs::create_dir_all(&request.local_dir)?;

    let mut written = Vec::with_capacity(files.len());
    for (name, relative) in files.iter().zip(relatives) {
        let cached = get(name)?;
        let target = request.local_dir.join(&relative);

        tracing::debug!("{} -> {:?}", name, target);
        materialize(&cached, &target, request.use_symlinks)?;
        written.push(relative);
    }

    Ok(written)
}

/// Hub file names must stay inside the destination: plain components only.
fn relative_hub_path(name: &str) -> Result<PathBuf> {
    let path = PathBuf::from(name);
    let plain = path.components().next().is_some()
        && path.components().all(|c| matches!(c, Component::Normal(_)));
    if !plain {
        return Err(Error::UnsafePath(name.to_string()));
    }
    Ok(path)
}

/// Places a cached file at `target`, replacing whatever is there.
///
/// Without symlinks the bytes are copied, following the cache's own
/// snapshot link to its blob, so `target` ends up a regular file.
pub(crate) fn materialize(cached: &Path, target: &Path, use_symlinks: bool) -> io::Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }

    // symlink_metadata so a dangling link at the target still counts
    if fs::symlink_metadata(target).is_ok() {
        fs::remove_file(target)?;
    }

    if use_symlinks {
        link(cached, target)
    } else {
        fs::copy(cached, target).map(|_| ())
    }
}

#[cfg(unix)]
fn link(cached: &Path, target: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(cached, target)
}

#[cfg(not(unix))]
fn link(cached: &Path, target: &Path) -> io::Result<()> {
    tracing::warn!("Symlinks unsupported here, copying {:?}", target);
    fs::copy(cached, target).map(|_| ())
}
