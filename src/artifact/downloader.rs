use crate::artifact::checksum::sha256_file;
use crate::core::{RecipeError, RecipeResult};
use std::io::Write;
use std::time::Duration;
use tempfile::TempDir;

/// A located and verified source artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactInfo {
    pub url: String,
    pub sha256: String,
}

/// Downloads release tarballs and verifies their content hash.
pub struct ArtifactFetcher {
    http_client: reqwest::Client,
}

impl ArtifactFetcher {
    /// Create a new fetcher. Only the connection is bounded by a timeout;
    /// large tarballs may legitimately take a long time to stream.
    pub fn new() -> RecipeResult<Self> {
        let http_client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| RecipeError::Download(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { http_client })
    }

    /// Derive the conventional source tarball URL for a tag.
    ///
    /// Always reconstructed from the repository URL; the asset URLs in the
    /// release payload are not consulted.
    pub fn tarball_url(repo_url: &str, tag: &str) -> String {
        format!("{}/archive/refs/tags/{}.tar.gz", repo_url, tag)
    }

    /// Fetch `url` into a private temporary directory and hash it.
    ///
    /// The response is streamed to disk chunk by chunk, then hashed from
    /// the file. The temporary directory owns the artifact for the whole
    /// call and is removed on every exit path, including hash failure.
    pub async fn fetch_and_hash(&self, url: &str) -> RecipeResult<ArtifactInfo> {
        let temp = TempDir::new()?;
        let artifact_path = temp.path().join("artifact.tar.gz");

        tracing::debug!(url, "downloading artifact");

        let mut response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RecipeError::Download(format!(
                "{} returned status {}",
                url, status
            )));
        }

        let mut file = std::fs::File::create(&artifact_path)?;
        while let Some(chunk) = response.chunk().await.map_err(map_transport_error)? {
            file.write_all(&chunk)?;
        }
        file.flush()?;
        drop(file);

        let sha256 = sha256_file(&artifact_path)?;

        Ok(ArtifactInfo {
            url: url.to_string(),
            sha256,
        })
    }
}

fn map_transport_error(e: reqwest::Error) -> RecipeError {
    if e.is_timeout() {
        RecipeError::Timeout(format!("artifact download: {}", e))
    } else {
        RecipeError::Download(e.to_string())
    }
}
