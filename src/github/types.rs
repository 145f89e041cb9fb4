//! GitHub GraphQL response types

use serde::Deserialize;

/// Placeholder recorded when a repository carries no SPDX license id.
/// Left for the recipe author to fill in by hand.
pub const LICENSE_PLACEHOLDER: &str = "FIXME";

/// Top-level GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse {
    pub data: Option<ResponseData>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseData {
    #[serde(rename = "repositoryOwner")]
    pub repository_owner: Option<RepositoryOwner>,
}

#[derive(Debug, Deserialize)]
pub struct RepositoryOwner {
    pub repository: Option<Repository>,
}

/// The repository fields requested by the metadata query.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    pub description: Option<String>,
    pub homepage_url: Option<String>,
    pub license_info: Option<LicenseInfo>,
    pub latest_release: Option<LatestRelease>,
    pub refs: TagConnection,
    pub repository_topics: TopicConnection,
}

#[derive(Debug, Deserialize)]
pub struct LicenseInfo {
    #[serde(rename = "spdxId")]
    pub spdx_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestRelease {
    pub tag: ReleaseTag,
    #[serde(default)]
    pub release_assets: Option<AssetConnection>,
}

#[derive(Debug, Deserialize)]
pub struct ReleaseTag {
    pub name: String,
    /// Only commit targets expose a tarball URL; other targets come back
    /// as an empty object.
    #[serde(default)]
    pub target: Option<TagTarget>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagTarget {
    #[serde(default)]
    pub tarball_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetConnection {
    pub total_count: u64,
    #[serde(default)]
    pub edges: Vec<AssetEdge>,
}

#[derive(Debug, Deserialize)]
pub struct AssetEdge {
    pub node: AssetNode,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetNode {
    pub download_url: String,
}

#[derive(Debug, Deserialize)]
pub struct TagConnection {
    #[serde(default)]
    pub edges: Vec<TagEdge>,
}

#[derive(Debug, Deserialize)]
pub struct TagEdge {
    pub node: TagNode,
}

#[derive(Debug, Deserialize)]
pub struct TagNode {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct TopicConnection {
    #[serde(default)]
    pub edges: Vec<TopicEdge>,
}

#[derive(Debug, Deserialize)]
pub struct TopicEdge {
    pub node: TopicNode,
}

#[derive(Debug, Deserialize)]
pub struct TopicNode {
    pub topic: Topic,
}

#[derive(Debug, Deserialize)]
pub struct Topic {
    pub name: String,
}

/// Repository metadata normalized for recipe scaffolding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoMetadata {
    pub description: Option<String>,
    pub homepage: String,
    pub license: String,
    pub topics: Vec<String>,
}

impl Repository {
    /// Tag name of the latest published release, if any.
    pub fn latest_release_tag(&self) -> Option<&str> {
        self.latest_release.as_ref().map(|r| r.tag.name.as_str())
    }

    /// Tag names in provider order (most recent tag commit first).
    pub fn tag_names(&self) -> Vec<String> {
        self.refs.edges.iter().map(|e| e.node.name.clone()).collect()
    }

    /// Topic names in provider order. Zero topic edges is a valid,
    /// empty result.
    pub fn topic_names(&self) -> Vec<String> {
        self.repository_topics
            .edges
            .iter()
            .map(|e| e.node.topic.name.clone())
            .collect()
    }

    /// Normalize the response into recipe metadata.
    ///
    /// The homepage falls back to `source_url` when the repository has no
    /// homepage (null or empty string). A missing SPDX id becomes the
    /// `FIXME` placeholder.
    pub fn metadata(&self, source_url: &str) -> RepoMetadata {
        let homepage = self
            .homepage_url
            .clone()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| source_url.to_string());

        let license = self
            .license_info
            .as_ref()
            .and_then(|info| info.spdx_id.clone())
            .unwrap_or_else(|| LICENSE_PLACEHOLDER.to_string());

        RepoMetadata {
            description: self.description.clone(),
            homepage,
            license,
            topics: self.topic_names(),
        }
    }
}
