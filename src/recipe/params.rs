use crate::artifact::ArtifactInfo;
use crate::github::types::RepoMetadata;

/// Template parameters handed to the scaffolder, plus the package
/// reference they belong to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeParams {
    reference: String,
    params: Vec<(&'static str, String)>,
}

impl RecipeParams {
    /// Assemble the full parameter set.
    ///
    /// Called only once every upstream value is resolved; there is no
    /// partial construction.
    pub fn build(
        repo_name: &str,
        version: &str,
        metadata: &RepoMetadata,
        artifact: &ArtifactInfo,
    ) -> Self {
        let reference = format!("{}/{}", repo_name.to_lowercase(), version);

        let params = vec![
            ("description", metadata.description.clone().unwrap_or_default()),
            ("homepage", metadata.homepage.clone()),
            ("license", metadata.license.clone()),
            ("topics", format_topics(&metadata.topics)),
            ("url", artifact.url.clone()),
            ("sha256", artifact.sha256.clone()),
        ];

        Self { reference, params }
    }

    /// The `{lowercased name}/{version}` package reference.
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// The parameters as `name=value` definitions, in build order.
    pub fn definitions(&self) -> Vec<String> {
        self.params
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect()
    }
}

/// Render topics the way the recipe template expects: `'a', 'b', 'c'`.
fn format_topics(topics: &[String]) -> String {
    topics
        .iter()
        .map(|topic| format!("'{}'", topic))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> RepoMetadata {
        RepoMetadata {
            description: Some("A modern formatting library".to_string()),
            homepage: "https://fmt.dev".to_string(),
            license: "MIT".to_string(),
            topics: vec!["cpp".to_string(), "formatting".to_string()],
        }
    }

    fn artifact() -> ArtifactInfo {
        ArtifactInfo {
            url: "https://github.com/fmtlib/fmt/archive/refs/tags/v9.1.0.tar.gz".to_string(),
            sha256: "a".repeat(64),
        }
    }

    #[test]
    fn test_reference_lowercases_the_name() {
        let params = RecipeParams::build("Fmt", "9.1.0", &metadata(), &artifact());
        assert_eq!(params.reference(), "fmt/9.1.0");
    }

    #[test]
    fn test_definitions_in_build_order() {
        let params = RecipeParams::build("fmt", "9.1.0", &metadata(), &artifact());
        let definitions = params.definitions();

        assert_eq!(
            definitions,
            vec![
                "description=A modern formatting library".to_string(),
                "homepage=https://fmt.dev".to_string(),
                "license=MIT".to_string(),
                "topics='cpp', 'formatting'".to_string(),
                "url=https://github.com/fmtlib/fmt/archive/refs/tags/v9.1.0.tar.gz".to_string(),
                format!("sha256={}", "a".repeat(64)),
            ]
        );
    }

    #[test]
    fn test_missing_description_renders_empty() {
        let mut meta = metadata();
        meta.description = None;

        let params = RecipeParams::build("fmt", "9.1.0", &meta, &artifact());
        assert_eq!(params.definitions()[0], "description=");
    }

    #[test]
    fn test_empty_topics_render_empty() {
        let mut meta = metadata();
        meta.topics.clear();

        let params = RecipeParams::build("fmt", "9.1.0", &meta, &artifact());
        assert_eq!(params.definitions()[3], "topics=");
    }

    #[test]
    fn test_format_topics_single() {
        assert_eq!(format_topics(&["cpp".to_string()]), "'cpp'");
    }

    #[test]
    fn test_format_topics_preserves_order() {
        let topics = vec!["z".to_string(), "a".to_string(), "m".to_string()];
        assert_eq!(format_topics(&topics), "'z', 'a', 'm'");
    }
}
