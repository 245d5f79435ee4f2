//! Optional `myth-or-fact.toml` settings.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = "myth-or-fact.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuizConfig {
    /// Question bank JSON file. Relative paths resolve against the config file.
    pub questions: Option<PathBuf>,
    pub window_title: String,
    /// Default `tracing` directive when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            questions: None,
            window_title: "Myth or Fact".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Load config from an explicit path, or `myth-or-fact.toml` in the working
/// directory if present, or fall back to defaults.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let cwd = std::env::current_dir().context("failed to read the working directory")?;
    load_config_in(path, &cwd)
}

fn load_config_in(path: Option<&Path>, dir: &Path) -> Result<QuizConfig> {
    let config_path = match path {
        Some(p) if p.exists() => p.to_path_buf(),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => {
            let local = dir.join(CONFIG_FILE_NAME);
            if !local.exists() {
                return Ok(QuizConfig::default());
            }
            local
        }
    };

    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("failed to read {}", config_path.display()))?;
    let mut config: QuizConfig = toml::from_str(&content)
        .with_context(|| format!("failed to parse {}", config_path.display()))?;

    if let Some(questions) = config.questions.take() {
        let base = config_path.parent().unwrap_or(dir);
        config.questions = Some(if questions.is_relative() {
            base.join(questions)
        } else {
            questions
        });
    }

    Ok(config)
}
