use crate::config::DEFAULT_MODEL_ID;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "model-fetch")]
#[command(version, about = "Download a Hugging Face model snapshot as plain files", long_about = None)]
pub struct Cli {
	/// HuggingFace model repository ID (e.g., "meta-llama/Llama-2-7b-hf")
	#[arg(default_value = DEFAULT_MODEL_ID)]
	pub model: String,

	/// Revision to pin (branch, tag or commit) [env: MODEL_FETCH_REVISION]
	#[arg(long)]
	pub revision: Option<String>,

	/// Directory that receives one folder per model [env: MODEL_FETCH_MODELS_DIR]
	#[arg(long)]
	pub models_dir: Option<PathBuf>,

	/// Print the fetch report as JSON
	#[arg(long)]
	pub json: bool,
}
