use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Upper bound in bytes on a line, once its CR+LF is stripped.
    pub max_line_length: Option<usize>,
    pub log_rejected_lines: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_line_length: None,
            log_rejected_lines: true,
        }
    }
}

impl Config {
    pub fn load_from_str(str: &str) -> Result<Self, anyhow::Error> {
        let config: Config = serde_yml::from_str(str)?;
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, anyhow::Error> {
        let string = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {path:?}"))?;
        Config::load_from_str(string.as_str())
            .with_context(|| format!("parsing config file {path:?}"))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::panic_in_result_fn)]

    use std::{path::PathBuf, str::FromStr};

    use crate::config::Config;

    fn default_yaml_path() -> anyhow::Result<PathBuf> {
        let workspace_path = env!("CARGO_MANIFEST_DIR");
        Ok(PathBuf::from_str(workspace_path)?.join("../config.yml"))
    }

    #[test]
    fn load_valid_config_from_path() -> anyhow::Result<()> {
        let config = Config::load_from_path(&default_yaml_path()?)?;
        assert_eq!(config.max_line_length, Some(510));
        assert!(config.log_rejected_lines);

        Ok(())
    }

    #[test]
    fn missing_keys_use_defaults() -> anyhow::Result<()> {
        let config = Config::load_from_str("log_rejected_lines: false\n")?;
        assert_eq!(config.max_line_length, None);
        assert!(!config.log_rejected_lines);

        Ok(())
    }

    #[test]
    fn missing_file() {
        let result = Config::load_from_path(&PathBuf::from("/nonexistent/ircline.yml"));
        assert!(result.is_err());
    }

    #[test]
    fn wrong_type() {
        let result = Config::load_from_str("max_line_length: lots\n");
        assert!(result.is_err());
    }
}
