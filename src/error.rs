use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
	/// Anything the hub client reports: network, auth, missing repo or revision.
	#[error(transparent)]
	Hub(#[from] hf_hub::api::sync::ApiError),

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Refusing to write hub file outside the destination: {0}")]
	UnsafePath(String),

	#[error("Configuration error: {0}")]
	Config(String),

	#[error("Serialization error: {0}")]
	Serialization(String),
}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Error::Serialization(err.to_string())
	}
}

pub type Result<T> = std::result::Result<T, Error>;
