use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Repository fetched when no model id is given on the command line.
pub const DEFAULT_MODEL_ID: &str = "meta-llama/Llama-2-7b-hf";
pub const DEFAULT_MODELS_DIR: &str = "./models";
pub const DEFAULT_REVISION: &str = "main";

pub const MODELS_DIR_ENV: &str = "MODEL_FETCH_MODELS_DIR";
pub const CACHE_DIR_ENV: &str = "MODEL_FETCH_CACHE_DIR";
pub const REVISION_ENV: &str = "MODEL_FETCH_REVISION";
pub const TOKEN_ENV: &str = "HF_TOKEN";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
	pub models_dir: PathBuf,
	pub revision: String,
	/// Overrides the hf-hub cache location; `None` leaves it to `HF_HOME` or the library default.
	pub cache_dir: Option<PathBuf>,
	#[serde(skip)]
	pub token: Option<String>,
}

impl Config {
	pub fn new() -> Self {
		Self {
			models_dir: PathBuf::from(DEFAULT_MODELS_DIR),
			revision: DEFAULT_REVISION.to_string(),
			cache_dir: None,
			token: None,
		}
	}

	pub fn from_env() -> crate::error::Result<Self> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	pub(crate) fn from_lookup<F>(lookup: F) -> crate::error::Result<Self>
	where
		F: Fn(&str) -> Option<String>,
	{
		let mut config = Self::new();

		if let Some(dir) = lookup(MODELS_DIR_ENV).filter(|v| !v.is_empty()) {
			config.models_dir = PathBuf::from(dir);
		}
		if let Some(dir) = lookup(CACHE_DIR_ENV).filter(|v| !v.is_empty()) {
			config.cache_dir = Some(PathBuf::from(dir));
		}
		if let Some(revision) = lookup(REVISION_ENV).filter(|v| !v.trim().is_empty()) {
			config = config.with_revision(revision)?;
		}
		config.token = lookup(TOKEN_ENV).filter(|v| !v.is_empty());

		Ok(config)
	}

	pub fn with_models_dir(mut self, models_dir: PathBuf) -> Self {
		self.models_dir = models_dir;
		self
	}

	pub fn with_revision(mut self, revision: String) -> crate::error::Result<Self> {
		let revision = revision.trim();
		if revision.is_empty() {
			return Err(crate::error::Error::Config("revision must not be empty".to_string()));
		}
		self.revision = revision.to_string();
		Ok(self)
	}
}

impl Default for Config {
	fn default() -> Self {
		Self::new()
	}
}
