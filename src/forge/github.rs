//! GitHub REST API forge client
//!
//! API endpoints:
//! - List tags: {api}/repos/{owner}/{repo}/tags?per_page=100&page={n}
//! - Get commit: {api}/repos/{owner}/{repo}/commits/{sha}

use crate::domain::Timestamp;
use crate::error::ForgeError;
use crate::forge::{Commit, ForgeClient, ForgeConfig, HttpClient, Tag, TAGS_PER_PAGE};
use async_trait::async_trait;
use serde::Deserialize;

/// Forge name used in errors and diagnostics
const FORGE_NAME: &str = "GitHub";

/// GitHub forge client
pub struct GitHubClient {
    client: HttpClient,
    api_url: String,
}

/// Tag list entry
#[derive(Debug, Deserialize)]
struct TagResponse {
    name: String,
    commit: TagCommitRef,
}

#[derive(Debug, Deserialize)]
struct TagCommitRef {
    sha: String,
}

/// Commit response
#[derive(Debug, Deserialize)]
struct CommitResponse {
    sha: String,
    commit: GitCommit,
}

#[derive(Debug, Deserialize)]
struct GitCommit {
    committer: Option<GitSignature>,
}

#[derive(Debug, Deserialize)]
struct GitSignature {
    date: Timestamp,
}

impl GitHubClient {
    /// Create a new GitHub client
    pub fn new(config: &ForgeConfig) -> Result<Self, ForgeError> {
        Ok(Self {
            client: HttpClient::new(config, FORGE_NAME)?,
            api_url: config.api_url.clone(),
        })
    }

    /// Build the URL for one page of tags
    fn build_tags_url(&self, owner: &str, repo: &str, page: u32) -> String {
        format!(
            "{}/repos/{}/{}/tags?per_page={}&page={}",
            self.api_url, owner, repo, TAGS_PER_PAGE, page
        )
    }

    /// Build the URL for a single commit
    fn build_commit_url(&self, owner: &str, repo: &str, sha: &str) -> String {
        format!("{}/repos/{}/{}/commits/{}", self.api_url, owner, repo, sha)
    }
}

#[async_trait]
impl ForgeClient for GitHubClient {
    fn forge_name(&self) -> &'static str {
        FORGE_NAME
    }

    fn page_size(&self) -> usize {
        TAGS_PER_PAGE
    }

    async fn list_tags(&self, owner: &str, repo: &str, page: u32) -> Result<Vec<Tag>, ForgeError> {
        let url = self.build_tags_url(owner, repo, page);
        let resource = format!("{}/{}", owner, repo);

        let tags: Vec<TagResponse> = self.client.get_json(&url, &resource).await?;

        Ok(tags
            .into_iter()
            .map(|t| Tag::new(t.name, t.commit.sha))
            .collect())
    }

    async fn get_commit(&self, owner: &str, repo: &str, sha: &str) -> Result<Commit, ForgeError> {
        let url = self.build_commit_url(owner, repo, sha);
        let resource = format!("{}/{}@{}", owner, repo, sha);

        let response: CommitResponse = self.client.get_json(&url, &resource).await?;

        let committer = response.commit.committer.ok_or_else(|| {
            ForgeError::invalid_response(&resource, FORGE_NAME, "commit has no committer")
        })?;

        Ok(Commit::new(response.sha, committer.date))
    }
}
