// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{bail, Context, Result};
use std::env;
use std::str::FromStr;

use crate::constants::{paging, DEFAULT_SECRET_PREFIX};

/// How the final cluster list is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => bail!("unknown output format '{}', expected 'table' or 'json'", other),
        }
    }
}

/// Binder configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Server-side name filter applied when listing secrets
    pub secret_prefix: String,
    /// Page size for every paginated AWS call
    pub page_size: i32,
    /// Region override, otherwise the SDK default chain decides
    pub region: Option<String>,
    /// Apply the computed change sets after presenting them
    pub apply: bool,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            secret_prefix: DEFAULT_SECRET_PREFIX.to_string(),
            page_size: paging::DEFAULT_PAGE_SIZE,
            region: None,
            apply: false,
            output: OutputFormat::Table,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let secret_prefix = lookup("SECRET_PREFIX").unwrap_or(defaults.secret_prefix);
        if secret_prefix.is_empty() {
            bail!("SECRET_PREFIX must not be empty");
        }

        let page_size = match lookup("PAGE_SIZE") {
            Some(v) => v
                .parse::<i32>()
                .with_context(|| format!("PAGE_SIZE '{}' is not a number", v))?,
            None => defaults.page_size,
        };
        if !(1..=paging::MAX_PAGE_SIZE).contains(&page_size) {
            bail!(
                "PAGE_SIZE must be between 1 and {}, got {}",
                paging::MAX_PAGE_SIZE,
                page_size
            );
        }

        let region = lookup("AWS_REGION").filter(|r| !r.is_empty());

        let apply = match lookup("APPLY") {
            Some(v) => v
                .parse::<bool>()
                .with_context(|| format!("APPLY '{}' must be 'true' or 'false'", v))?,
            None => defaults.apply,
        };

        let output = match lookup("OUTPUT_FORMAT") {
            Some(v) => v.parse()?,
            None => defaults.output,
        };

        Ok(Config {
            secret_prefix,
            page_size,
            region,
            apply,
            output,
        })
    }
}
