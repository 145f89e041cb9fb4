//! GitHub GraphQL API client

use crate::core::{RecipeError, RecipeResult};
use crate::github::repo::RepoRef;
use crate::github::types::{GraphQlResponse, Repository};
use reqwest::{header, Client as HttpClient};
use serde::Serialize;
use std::time::Duration;

/// Default GraphQL endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com/graphql";

/// The one query this tool ever issues: repository metadata, the latest
/// release, the 100 most recent tags by tag-commit date, and topics.
const REPOSITORY_QUERY: &str = r#"
query ($login: String!, $name: String!) {
  repositoryOwner(login: $login) {
    repository(name: $name) {
      description
      homepageUrl
      licenseInfo {
        spdxId
      }
      latestRelease {
        tag {
          name
          target {
            ... on Commit {
              tarballUrl
            }
          }
        }
        releaseAssets(first: 100) {
          totalCount
          edges {
            node {
              downloadUrl
            }
          }
        }
      }
      refs(refPrefix: "refs/tags/", orderBy: {direction: DESC, field: TAG_COMMIT_DATE}, first: 100) {
        edges {
          node {
            name
          }
        }
      }
      repositoryTopics(first: 100) {
        edges {
          node {
            topic {
              name
            }
          }
        }
      }
    }
  }
}
"#;

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: QueryVariables<'a>,
}

#[derive(Serialize)]
struct QueryVariables<'a> {
    login: &'a str,
    name: &'a str,
}

/// Client for the GitHub GraphQL API.
///
/// The endpoint and bearer credential are injected at construction so the
/// client can be pointed at a mock server in tests.
pub struct MetadataClient {
    http_client: HttpClient,
    api_url: String,
}

impl MetadataClient {
    /// Create a new metadata client against `api_url`, authenticated with
    /// the given bearer token.
    pub fn new(api_url: impl Into<String>, token: &str) -> RecipeResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::USER_AGENT, header::HeaderValue::from_static("recipe-new"));

        let mut auth = header::HeaderValue::from_str(&format!("bearer {}", token))
            .map_err(|e| RecipeError::Config(format!("Invalid GitHub token: {}", e)))?;
        auth.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth);

        let http_client = HttpClient::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| RecipeError::Query(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            api_url: api_url.into(),
        })
    }

    /// Issue the single metadata query for a repository.
    ///
    /// Fails with `Query` on transport errors or a non-success status, and
    /// with `MalformedResponse` when the expected nested fields are absent.
    /// Neither case is retried.
    pub async fn query_repository(&self, repo: &RepoRef) -> RecipeResult<Repository> {
        let request = GraphQlRequest {
            query: REPOSITORY_QUERY,
            variables: QueryVariables {
                login: &repo.owner,
                name: &repo.name,
            },
        };

        tracing::debug!(repository = %repo, "querying repository metadata");

        let response = self
            .http_client
            .post(&self.api_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RecipeError::Timeout(format!("metadata query: {}", e))
                } else {
                    RecipeError::Query(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RecipeError::Query(format!(
                "request failed with status {}",
                status
            )));
        }

        let body: GraphQlResponse = response
            .json()
            .await
            .map_err(|e| RecipeError::MalformedResponse(e.to_string()))?;

        body.data
            .and_then(|data| data.repository_owner)
            .and_then(|owner| owner.repository)
            .ok_or_else(|| {
                RecipeError::MalformedResponse(format!("repository {} missing from response", repo))
            })
    }
}
