//! GitHub-hosted counter store
//!
//! The counter document lives as a JSON blob in a GitHub repository,
//! read and written through the REST contents API. A read yields the
//! base64-encoded blob together with its SHA, which doubles as the
//! version tag: handing it back on the next write lets GitHub reject a
//! stale update. Every call carries a fixed 10-second timeout; a
//! timed-out read looks exactly like any other unreachable backend and
//! is absorbed upstream by the allocator's fallback.

use crate::store::{CounterStore, Snapshot};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use types::counter::{CounterDocument, VersionTag};
use types::errors::StoreError;

const DEFAULT_API_BASE: &str = "https://api.github.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = "laudo-issuer";
const COMMIT_MESSAGE: &str = "Update laudo counter via web app";

/// Connection settings for the GitHub store
#[derive(Debug, Clone)]
pub struct GithubConfig {
    /// Repository in `owner/repo` form.
    pub repo: String,
    /// Path of the counter document within the repository.
    pub path: String,
    /// Branch holding the document.
    pub branch: String,
    /// Personal access token; reads of public repositories work without one,
    /// writes do not.
    pub token: Option<String>,
    /// API base URL, overridable for tests.
    pub api_base: String,
}

impl GithubConfig {
    pub fn new(repo: impl Into<String>) -> Self {
        Self {
            repo: repo.into(),
            path: "laudos.json".into(),
            branch: "main".into(),
            token: None,
            api_base: DEFAULT_API_BASE.into(),
        }
    }
}

/// Contents-API response for a file read
#[derive(Debug, Deserialize)]
struct ContentsResponse {
    content: String,
    sha: String,
}

/// Contents-API request body for a file update
#[derive(Debug, Serialize)]
struct UpdateRequest<'a> {
    message: &'a str,
    content: String,
    branch: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<&'a str>,
}

/// `CounterStore` backed by a file in a GitHub repository
pub struct GithubStore {
    client: Client,
    config: GithubConfig,
}

impl GithubStore {
    pub fn new(config: GithubConfig) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| StoreError::Unreachable(err.to_string()))?;

        Ok(Self { client, config })
    }

    fn contents_url(&self) -> String {
        format!(
            "{}/repos/{}/contents/{}",
            self.config.api_base, self.config.repo, self.config.path
        )
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.header("Accept", "application/vnd.github+json");
        match &self.config.token {
            Some(token) => request.header("Authorization", format!("token {token}")),
            None => request,
        }
    }
}

/// Decode contents-API base64, which arrives with embedded newlines.
fn decode_content(raw: &str) -> Result<Vec<u8>, StoreError> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    BASE64
        .decode(compact)
        .map_err(|err| StoreError::Malformed(format!("invalid base64 content: {err}")))
}

fn encode_content(document: &CounterDocument) -> Result<String, StoreError> {
    let json = serde_json::to_vec_pretty(document)
        .map_err(|err| StoreError::Malformed(err.to_string()))?;
    Ok(BASE64.encode(json))
}

#[async_trait]
impl CounterStore for GithubStore {
    async fn load(&self) -> Result<Snapshot, StoreError> {
        let response = self
            .authorize(self.client.get(self.contents_url()))
            .query(&[("ref", self.config.branch.as_str())])
            .send()
            .await
            .map_err(|err| StoreError::Unreachable(err.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(StoreError::NotFound),
            status if status.is_success() => {
                let body: ContentsResponse = response
                    .json()
                    .await
                    .map_err(|err| StoreError::Malformed(err.to_string()))?;

                let bytes = decode_content(&body.content)?;
                let document: CounterDocument = serde_json::from_slice(&bytes)
                    .map_err(|err| StoreError::Malformed(err.to_string()))?;

                Ok(Snapshot {
                    document,
                    version: Some(VersionTag::new(body.sha)),
                })
            }
            status => Err(StoreError::Unreachable(format!(
                "contents read returned {status}"
            ))),
        }
    }

    async fn save(
        &self,
        document: &CounterDocument,
        version: Option<&VersionTag>,
    ) -> Result<(), StoreError> {
        let payload = UpdateRequest {
            message: COMMIT_MESSAGE,
            content: encode_content(document)?,
            branch: &self.config.branch,
            sha: version.map(VersionTag::as_str),
        };

        let response = self
            .authorize(self.client.put(self.contents_url()))
            .json(&payload)
            .send()
            .await
            .map_err(|err| StoreError::Unreachable(err.to_string()))?;

        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => Err(StoreError::Conflict(
                format!("stale version tag {:?}", version.map(VersionTag::as_str)),
            )),
            status => Err(StoreError::Unreachable(format!(
                "contents write returned {status}"
            ))),
        }
    }
}
