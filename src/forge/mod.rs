//! Forge adapters for looking up tags and commits
//!
//! This module provides:
//! - Explicit forge configuration (base URL, credentials, request spacing)
//! - HTTP client shared foundation
//! - GitHub REST API adapter

mod client;
mod config;
mod github;

pub use client::HttpClient;
pub use config::{
    ForgeConfig, DEFAULT_API_URL, DEFAULT_FORGE_HOST, DEFAULT_MAX_TAG_PAGES, DEFAULT_TIMEOUT,
    DEFAULT_USER_AGENT, TAGS_PER_PAGE,
};
pub use github::GitHubClient;

use crate::domain::Timestamp;
use crate::error::ForgeError;
use async_trait::async_trait;

/// A repository tag and the commit it points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Tag name (e.g., "v0.9.1")
    pub name: String,
    /// SHA of the tagged commit
    pub commit_sha: String,
}

impl Tag {
    /// Create a new Tag
    pub fn new(name: impl Into<String>, commit_sha: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            commit_sha: commit_sha.into(),
        }
    }
}

/// The parts of a commit needed for dating
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Commit SHA
    pub sha: String,
    /// When the commit was added to the history (not the author date)
    pub committer_date: Timestamp,
}

impl Commit {
    /// Create a new Commit
    pub fn new(sha: impl Into<String>, committer_date: Timestamp) -> Self {
        Self {
            sha: sha.into(),
            committer_date,
        }
    }
}

/// Trait for code-hosting API clients
#[async_trait]
pub trait ForgeClient: Send + Sync {
    /// Get the forge name
    fn forge_name(&self) -> &'static str;

    /// Number of tags a full page holds; a shorter page is the last one
    fn page_size(&self) -> usize;

    /// List one page (1-based) of tags of a repository
    async fn list_tags(&self, owner: &str, repo: &str, page: u32) -> Result<Vec<Tag>, ForgeError>;

    /// Look up a commit by SHA
    async fn get_commit(&self, owner: &str, repo: &str, sha: &str) -> Result<Commit, ForgeError>;
}
