//! Environment-driven service configuration
//!
//! Everything is read once at startup; missing variables fall back to
//! logged defaults. Misconfiguration that would leave the service unable
//! to reach its backend (a `github` backend with no repository) fails at
//! boot, never per request.

use anyhow::anyhow;
use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;
use types::number::NumberFormat;

/// Which counter store backs the allocator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Local JSON file only.
    File,
    /// Remote GitHub-hosted document only.
    Github,
    /// Remote document with a local mirror for fallback reads.
    Hybrid,
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "file" => Ok(Self::File),
            "github" => Ok(Self::Github),
            "hybrid" => Ok(Self::Hybrid),
            other => Err(format!(
                "unknown backend '{other}' (expected file, github, or hybrid)"
            )),
        }
    }
}

pub struct Config {
    pub port: u16,
    pub backend: BackendKind,
    /// Local counter document path (file backend and hybrid mirror).
    pub counter_path: PathBuf,
    pub github_repo: Option<String>,
    pub github_file: String,
    pub github_branch: String,
    pub github_token: Option<String>,
    /// Display rule applied to allocated numbers.
    pub number_format: NumberFormat,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let backend: BackendKind = try_load("COUNTER_BACKEND", "file")?;

        let config = Self {
            port: try_load("ISSUER_PORT", "5000")?,
            backend,
            counter_path: PathBuf::from(try_load::<String>("COUNTER_PATH", "laudos.json")?),
            github_repo: var("GITHUB_REPO"),
            github_file: try_load("GITHUB_FILE", "laudos.json")?,
            github_branch: try_load("GITHUB_BRANCH", "main")?,
            github_token: var("GITHUB_TOKEN"),
            number_format: NumberFormat::new(
                var("NUMBER_PREFIX").unwrap_or_default(),
                try_load("NUMBER_WIDTH", "0")?,
            ),
        };

        if config.backend != BackendKind::File && config.github_repo.is_none() {
            return Err(anyhow!(
                "GITHUB_REPO is required for the {:?} backend",
                config.backend
            ));
        }

        Ok(config)
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.is_empty())
}

fn try_load<T: FromStr>(key: &str, default: &str) -> anyhow::Result<T>
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|err| anyhow!("invalid {key}: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_kind_parsing() {
        assert_eq!("file".parse::<BackendKind>().unwrap(), BackendKind::File);
        assert_eq!(
            "github".parse::<BackendKind>().unwrap(),
            BackendKind::Github
        );
        assert_eq!(
            "hybrid".parse::<BackendKind>().unwrap(),
            BackendKind::Hybrid
        );
        assert!("redis".parse::<BackendKind>().is_err());
    }
}
