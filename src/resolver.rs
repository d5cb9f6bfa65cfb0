//! Release date resolution through the forge
//!
//! A module path `host/owner/repo[/subpath]` is mapped to the repository
//! `owner/repo`. The tag list is scanned for an exact name match, and the
//! committer date of the tagged commit is the release date.

use crate::domain::Timestamp;
use crate::error::ForgeError;
use crate::forge::{ForgeClient, DEFAULT_FORGE_HOST, DEFAULT_MAX_TAG_PAGES};
use std::sync::Arc;
use tracing::debug;

/// Resolves release tags of forge-hosted modules to dates
pub struct ReleaseDateResolver {
    client: Arc<dyn ForgeClient>,
    host: String,
    max_tag_pages: u32,
}

impl ReleaseDateResolver {
    /// Create a resolver for modules under the default forge host
    pub fn new(client: Arc<dyn ForgeClient>) -> Self {
        Self {
            client,
            host: DEFAULT_FORGE_HOST.to_string(),
            max_tag_pages: DEFAULT_MAX_TAG_PAGES,
        }
    }

    /// Set the module host prefix served by the forge
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the maximum number of tag pages scanned per repository
    pub fn with_max_tag_pages(mut self, pages: u32) -> Self {
        self.max_tag_pages = pages.max(1);
        self
    }

    /// Returns true if the package lives on the forge
    pub fn is_forge_hosted(&self, package_identity: &str) -> bool {
        package_identity
            .strip_prefix(self.host.as_str())
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    }

    /// Splits `host/owner/repo[/subpath]` into `(owner, repo)`
    pub fn split_repository<'a>(
        &self,
        package_identity: &'a str,
    ) -> Result<(&'a str, &'a str), ForgeError> {
        let mut segments = package_identity.split('/').skip(1);
        match (segments.next(), segments.next()) {
            (Some(owner), Some(repo)) if !owner.is_empty() && !repo.is_empty() => {
                Ok((owner, repo))
            }
            _ => Err(ForgeError::invalid_package(
                package_identity,
                self.client.forge_name(),
            )),
        }
    }

    /// Resolve the date of `tag` in the repository hosting `package_identity`
    pub async fn resolve(&self, package_identity: &str, tag: &str) -> Result<Timestamp, ForgeError> {
        let (owner, repo) = self.split_repository(package_identity)?;
        debug!(owner, repo, tag, "looking up release tag");

        let page_size = self.client.page_size();
        for page in 1..=self.max_tag_pages {
            let tags = self.client.list_tags(owner, repo, page).await?;

            if let Some(found) = tags.iter().find(|t| t.name == tag) {
                let commit = self.client.get_commit(owner, repo, &found.commit_sha).await?;
                debug!(owner, repo, tag, date = %commit.committer_date, "tag resolved");
                return Ok(commit.committer_date);
            }

            if tags.len() < page_size {
                break;
            }
        }

        Err(ForgeError::tag_not_found(owner, repo, tag))
    }
}
