use anyhow::Context;
use chatmine_transcript::{load_config, KeywordConfig};
use std::path::Path;

/// Resolve the keyword config: the file when given, built-in defaults otherwise.
pub fn resolve(config: Option<&Path>) -> anyhow::Result<KeywordConfig> {
    match config {
        Some(path) => load_config(path).context("loading keyword config"),
        None => Ok(KeywordConfig::default()),
    }
}

/// `chatmine keywords [--config FILE]`
pub fn execute(config: Option<&Path>) -> anyhow::Result<()> {
    let config = resolve(config)?;
    print!("{}", serde_yaml::to_string(&config)?);
    Ok(())
}
