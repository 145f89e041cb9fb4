use crate::core::{RecipeError, RecipeResult};
use regex::Regex;

/// A GitHub repository reference parsed from a source URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    /// Extract the (owner, name) pair from a GitHub repository URL.
    ///
    /// The pattern is searched for, not anchored, so trailing path segments
    /// are tolerated. This is the only validation the raw URL receives;
    /// anything without the `https://github.com/owner/repo` shape is
    /// rejected before any network traffic happens.
    pub fn parse(url: &str) -> RecipeResult<Self> {
        let pattern = Regex::new(r"https://github\.com/([\w-]+)/([\w-]+)")
            .map_err(|e| RecipeError::Config(format!("Invalid URL pattern: {}", e)))?;

        let captures = pattern
            .captures(url)
            .ok_or_else(|| RecipeError::InvalidInput(url.to_string()))?;

        Ok(Self {
            owner: captures[1].to_string(),
            name: captures[2].to_string(),
        })
    }
}

impl std::fmt::Display for RepoRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_repository_url() {
        let repo = RepoRef::parse("https://github.com/fmtlib/fmt").unwrap();
        assert_eq!(repo.owner, "fmtlib");
        assert_eq!(repo.name, "fmt");
    }

    #[test]
    fn test_parse_hyphenated_owner_and_name() {
        let repo = RepoRef::parse("https://github.com/some-org/my-cool-lib").unwrap();
        assert_eq!(repo.owner, "some-org");
        assert_eq!(repo.name, "my-cool-lib");
    }

    #[test]
    fn test_parse_tolerates_trailing_segments() {
        let repo = RepoRef::parse("https://github.com/fmtlib/fmt/releases/tag/9.1.0").unwrap();
        assert_eq!(repo.owner, "fmtlib");
        assert_eq!(repo.name, "fmt");
    }

    #[test]
    fn test_parse_rejects_http_scheme() {
        let result = RepoRef::parse("http://github.com/fmtlib/fmt");
        assert!(matches!(result, Err(RecipeError::InvalidInput(_))));
    }

    #[test]
    fn test_parse_rejects_other_hosts() {
        let result = RepoRef::parse("https://gitlab.com/fmtlib/fmt");
        assert!(matches!(result, Err(RecipeError::InvalidInput(_))));
    }

    #[test]
    fn test_parse_rejects_owner_only() {
        let result = RepoRef::parse("https://github.com/fmtlib");
        assert!(matches!(result, Err(RecipeError::InvalidInput(_))));
    }

    #[test]
    fn test_parse_rejects_arbitrary_text() {
        let result = RepoRef::parse("not a url at all");
        assert!(matches!(result, Err(RecipeError::InvalidInput(_))));
    }

    #[test]
    fn test_display() {
        let repo = RepoRef::parse("https://github.com/fmtlib/fmt").unwrap();
        assert_eq!(repo.to_string(), "fmtlib/fmt");
    }
}
