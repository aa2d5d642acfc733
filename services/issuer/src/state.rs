use crate::config::{BackendKind, Config};
use anyhow::Context;
use counter::{Allocator, CounterStore, FileStore, GithubConfig, GithubStore, HybridStore};
use dashmap::DashMap;
use std::sync::Arc;
use types::certificate::Certificate;
use types::number::NumberFormat;

#[derive(Clone)]
pub struct AppState {
    pub allocator: Arc<Allocator>,
    /// Direct store handle for the read-only status endpoint.
    pub store: Arc<dyn CounterStore>,
    pub number_format: NumberFormat,
    /// Certificates issued by this process, keyed by raw number.
    pub issued: Arc<DashMap<u64, Certificate>>,
}

impl AppState {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let store = build_store(config)?;
        Ok(Self::with_store(store, config.number_format.clone()))
    }

    /// Assemble state around an explicit store; tests inject the in-memory
    /// fake through here.
    pub fn with_store(store: Arc<dyn CounterStore>, number_format: NumberFormat) -> Self {
        Self {
            allocator: Arc::new(Allocator::new(store.clone())),
            store,
            number_format,
            issued: Arc::new(DashMap::new()),
        }
    }
}

fn build_store(config: &Config) -> anyhow::Result<Arc<dyn CounterStore>> {
    Ok(match config.backend {
        BackendKind::File => Arc::new(FileStore::new(config.counter_path.clone())),
        BackendKind::Github => Arc::new(GithubStore::new(github_config(config)?)?),
        BackendKind::Hybrid => {
            let remote = Arc::new(GithubStore::new(github_config(config)?)?);
            let mirror = Arc::new(FileStore::new(config.counter_path.clone()));
            Arc::new(HybridStore::new(remote, mirror))
        }
    })
}

fn github_config(config: &Config) -> anyhow::Result<GithubConfig> {
    let repo = config
        .github_repo
        .clone()
        .context("GITHUB_REPO is required for the github backend")?;

    let mut github = GithubConfig::new(repo);
    github.path = config.github_file.clone();
    github.branch = config.github_branch.clone();
    github.token = config.github_token.clone();
    Ok(github)
}
