//! Configuration and router assembly shared by the commands

use crate::cli::SourceArgs;
use crate::config::VitalisConfig;
use crate::dataset::Dataset;
use crate::fallback::{FallbackService, OpenRouterClient};
use crate::router::QuestionRouter;
use std::sync::Arc;

/// Load configuration: file (if present), then environment, then CLI flags.
pub fn load_config(source: &SourceArgs) -> Result<VitalisConfig, Box<dyn std::error::Error>> {
    let mut config = VitalisConfig::load_or_default(&source.config)?.with_env_overrides();

    if let Some(ref dataset) = source.dataset {
        config.dataset.path = dataset.clone();
    }
    if let Some(ref log_level) = source.log_level {
        config.logging.level = log_level.clone();
    }

    config.validate()?;
    Ok(config)
}

/// Load the dataset named by the configuration.
pub fn load_dataset(config: &VitalisConfig) -> Result<Arc<Dataset>, Box<dyn std::error::Error>> {
    Ok(Arc::new(Dataset::load(&config.dataset.path)?))
}

/// Build the fallback client and router.
///
/// A missing API key is reported here, once; the router still answers
/// dataset questions.
pub fn build_router(
    config: &VitalisConfig,
    dataset: Arc<Dataset>,
) -> Result<QuestionRouter, Box<dyn std::error::Error>> {
    let client = reqwest::Client::builder()
        .pool_max_idle_per_host(4)
        .build()?;
    let fallback = OpenRouterClient::from_config(&config.fallback, Arc::new(client));

    if !fallback.is_configured() {
        tracing::error!(
            env = %config.fallback.api_key_env,
            "Fallback API key not found; only dataset questions can be answered"
        );
    }

    Ok(QuestionRouter::new(dataset, Arc::new(fallback))
        .with_content_logging(config.logging.enable_content_logging))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn source(config: PathBuf) -> SourceArgs {
        SourceArgs {
            config,
            dataset: None,
            log_level: None,
        }
    }

    #[test]
    fn test_load_config_from_file() {
        let temp = NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), "[dataset]\npath = \"from-file.csv\"").unwrap();

        let config = load_config(&source(temp.path().to_path_buf())).unwrap();
        assert_eq!(config.dataset.path, PathBuf::from("from-file.csv"));
    }

    #[test]
    fn test_cli_dataset_overrides_config() {
        let temp = NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), "[dataset]\npath = \"from-file.csv\"").unwrap();

        let mut args = source(temp.path().to_path_buf());
        args.dataset = Some(PathBuf::from("from-cli.csv"));
        args.log_level = Some("debug".to_string());

        let config = load_config(&args).unwrap();
        assert_eq!(config.dataset.path, PathBuf::from("from-cli.csv"));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_load_config_without_file() {
        let config = load_config(&source(PathBuf::from("nonexistent.toml"))).unwrap();
        assert_eq!(config.fallback.api_key_env, "OPENROUTER_API_KEY");
    }

    #[test]
    fn test_load_config_rejects_invalid() {
        let temp = NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), "[fallback]\ntimeout_seconds = 0").unwrap();

        assert!(load_config(&source(temp.path().to_path_buf())).is_err());
    }

    #[test]
    fn test_build_router_without_key() {
        let temp = NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), "Country,Year,Life expectancy\nChad,2015,53.1\n").unwrap();

        let mut config = VitalisConfig::default();
        config.dataset.path = temp.path().to_path_buf();
        config.fallback.api_key_env = "VITALIS_TEST_UNSET_KEY".to_string();

        let dataset = load_dataset(&config).unwrap();
        let router = build_router(&config, dataset).unwrap();
        assert!(!router.fallback().is_configured());
        assert_eq!(router.dataset().len(), 1);
    }
}
