//! GitHub REST API client.
//!
//! Only two read-only endpoints are used: the user lookup and the user's
//! repository list. A single page of repositories is requested; accounts
//! with more repositories than one page holds are silently truncated.

use crate::constants::{GITHUB_ACCEPT, GITHUB_API_URL, NOT_FOUND_MESSAGE, USER_AGENT};
use anyhow::Context;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::Deserialize;

/// A repository as returned by the repository list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositoryDescriptor {
    pub name: String,
}

impl RepositoryDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// The hosting provider operations the fetcher depends on.
pub trait RepoHost {
    fn user_exists(&self, user: &str) -> anyhow::Result<bool>;
    fn list_repos(&self, user: &str) -> anyhow::Result<Vec<RepositoryDescriptor>>;
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    message: Option<serde_json::Value>,
}

/// Interprets a user lookup body.
///
/// The account is missing only when the body carries `"message": "Not Found"`.
pub fn parse_user_lookup(body: &str) -> anyhow::Result<bool> {
    let response: LookupResponse =
        serde_json::from_str(body).context("Failed to parse user lookup response")?;
    let not_found = response
        .message
        .as_ref()
        .and_then(|m| m.as_str())
        .is_some_and(|m| m == NOT_FOUND_MESSAGE);
    Ok(!not_found)
}

pub fn parse_repo_list(body: &str) -> anyhow::Result<Vec<RepositoryDescriptor>> {
    serde_json::from_str(body).context("Failed to parse repository list response")
}

pub struct GitHubClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new() -> anyhow::Result<Self> {
        Self::with_base_url(GITHUB_API_URL)
    }

    /// Creates a client against another API root, e.g. a GitHub Enterprise host.
    pub fn with_base_url(base_url: &str) -> anyhow::Result<Self> {
        Self::from_builder(base_url, reqwest::blocking::Client::builder())
    }

    fn from_builder(
        base_url: &str,
        builder: reqwest::blocking::ClientBuilder,
    ) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));

        let client = builder
            .default_headers(headers)
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn user_url(&self, user: &str) -> String {
        format!("{}/users/{}", self.base_url, user)
    }

    pub fn repos_url(&self, user: &str) -> String {
        format!("{}/users/{}/repos", self.base_url, user)
    }

    fn get_body(&self, url: &str) -> anyhow::Result<String> {
        self.client
            .get(url)
            .send()
            .with_context(|| format!("Request to {} failed", url))?
            .text()
            .with_context(|| format!("Failed to read response from {}", url))
    }
}

impl RepoHost for GitHubClient {
    fn user_exists(&self, user: &str) -> anyhow::Result<bool> {
        let body = self.get_body(&self.user_url(user))?;
        parse_user_lookup(&body)
    }

    fn list_repos(&self, user: &str) -> anyhow::Result<Vec<RepositoryDescriptor>> {
        let body = self.get_body(&self.repos_url(user))?;
        parse_repo_list(&body).with_context(|| format!("Could not list repositories for {}", user))
    }
}
