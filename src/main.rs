mod cli;
mod config;
mod error;
mod model;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use config::Config;
use model::{FetchReport, Fetcher, HubSnapshot};

/// Command-line flags win over whatever `base` picked up from the environment.
fn load_config(cli: &Cli, base: Config) -> error::Result<Config> {
    let mut config = base;

    if let Some(models_dir) = &cli.models_dir {
        config = config.with_models_dir(models_dir.clone());
    }
    if let Some(revision) = &cli.revision {
        config = config.with_revision(revision.clone())?;
    }

    Ok(config)
}

fn print_summary(report: &FetchReport) {
    println!("✓ Successfully fetched model: {}", report.repo_id);
    println!("  Revision: {}", report.revision);
    println!("  Path: {:?}", report.destination);
    println!("  Files: {}", report.files.len());
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli, Config::from_env()?)?;

    let source = HubSnapshot::new(&config).context("failed to initialize hub client")?;
    let fetcher = Fetcher::new(config, source);
    let report = fetcher.fetch(&cli.model)?;

    if cli.json {
        let json = serde_json::to_string_pretty(&report).map_err(error::Error::from)?;
        println!("{}", json);
    } else {
        print_summary(&report);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn env_config(pairs: &[(&str, &str)]) -> Config {
        Config::from_lookup(|key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        })
        .unwrap()
    }

    #[test]
    fn cli_flags_override_config() {
        let cli = Cli::try_parse_from([
            "model-fetch",
            "org/model-x",
            "--revision",
            "v2",
            "--models-dir",
            "/srv/models",
        ])
        .unwrap();
        let base = env_config(&[
            (config::REVISION_ENV, "v1"),
            (config::MODELS_DIR_ENV, "/data/models"),
        ]);

        let config = load_config(&cli, base).unwrap();

        assert_eq!(config.revision, "v2");
        assert_eq!(config.models_dir, PathBuf::from("/srv/models"));
    }

    #[test]
    fn revision_flag_wins_over_blank_env_revision() {
        let cli =
            Cli::try_parse_from(["model-fetch", "org/model-x", "--revision", "v2"]).unwrap();
        let base = env_config(&[(config::REVISION_ENV, "")]);

        let config = load_config(&cli, base).unwrap();

        assert_eq!(config.revision, "v2");
    }

    #[test]
    fn env_values_apply_without_flags() {
        let cli = Cli::try_parse_from(["model-fetch"]).unwrap();
        let base = env_config(&[(config::REVISION_ENV, "v1")]);

        let config = load_config(&cli, base).unwrap();

        assert_eq!(config.revision, "v1");
        assert_eq!(config.models_dir, PathBuf::from("./models"));
    }
}
