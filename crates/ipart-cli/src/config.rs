use std::fs;
use std::path::Path;

use clap::ValueEnum;
use ipart_core::errors::{ErrorInfo, PartError};
use ipart_enum::DEFAULT_ADDEND_COUNT;
use serde::{Deserialize, Serialize};

/// Output encoding for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable lines.
    #[default]
    Text,
    /// Canonical pretty JSON.
    Json,
}

/// Inclusive bounds the shell accepts for n.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetRange {
    #[serde(default = "default_min")]
    pub min: u32,
    #[serde(default = "default_max")]
    pub max: u32,
}

fn default_min() -> u32 {
    3
}

fn default_max() -> u32 {
    7
}

impl Default for TargetRange {
    fn default() -> Self {
        Self {
            min: default_min(),
            max: default_max(),
        }
    }
}

impl TargetRange {
    /// Rejects targets outside `min..=max`.
    pub fn check(&self, target: u32) -> Result<(), PartError> {
        if (self.min..=self.max).contains(&target) {
            return Ok(());
        }
        Err(PartError::InvalidInput(
            ErrorInfo::new(
                "out-of-range",
                format!("n must be in the range {}..{}", self.min, self.max),
            )
            .with_context("n", target.to_string())
            .with_hint("pass --no-range-check to enumerate any n"),
        ))
    }
}

/// YAML-configurable shell policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Accepted range for interactive targets.
    #[serde(default)]
    pub range: TargetRange,
    /// Addend count used by the filtered listing.
    #[serde(default = "default_addend_count")]
    pub addend_count: usize,
    /// Default output format.
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_addend_count() -> usize {
    DEFAULT_ADDEND_COUNT
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            range: TargetRange::default(),
            addend_count: default_addend_count(),
            format: OutputFormat::default(),
        }
    }
}

impl ShellConfig {
    /// Parses and validates a YAML document.
    pub fn from_yaml(contents: &str) -> Result<Self, PartError> {
        let config: ShellConfig = serde_yaml::from_str(contents).map_err(|err| {
            PartError::Config(ErrorInfo::new("config-parse", err.to_string()))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates the YAML file at `path`.
    pub fn load(path: &Path) -> Result<Self, PartError> {
        let contents = fs::read_to_string(path).map_err(|err| {
            PartError::Config(
                ErrorInfo::new("config-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        Self::from_yaml(&contents).map_err(|err| match err {
            PartError::Config(info) => {
                PartError::Config(info.with_context("path", path.display().to_string()))
            }
            other => other,
        })
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, PartError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), PartError> {
        if self.range.min > self.range.max {
            return Err(PartError::Config(
                ErrorInfo::new("invalid-range", "range.min exceeds range.max")
                    .with_context("min", self.range.min.to_string())
                    .with_context("max", self.range.max.to_string()),
            ));
        }
        Ok(())
    }
}
