//! Release version resolution and normalization.

/// Substrings that mark a tag as a pre-release. Matched case-sensitively.
const PRERELEASE_MARKERS: [&str; 2] = ["beta", "rc"];

/// Pick the tag to package.
///
/// The latest published release wins unconditionally. Without one, the
/// newest tag (provider order, most recent tag commit first) whose name
/// carries no pre-release marker is used. `None` means no usable
/// candidate exists.
pub fn resolve_tag(latest_release_tag: Option<&str>, tag_names: &[String]) -> Option<String> {
    if let Some(tag) = latest_release_tag {
        return Some(tag.to_string());
    }

    tag_names
        .iter()
        .find(|name| !PRERELEASE_MARKERS.iter().any(|marker| name.contains(marker)))
        .cloned()
}

/// Normalize a tag name into a package version.
///
/// Strips one leading `v`, then a leading `{repo_name}-` prefix from the
/// already v-stripped string. Both comparisons are literal and
/// case-sensitive. A strip that would leave nothing is skipped, so the
/// result is never empty for a non-empty tag.
pub fn normalize_version(tag: &str, repo_name: &str) -> String {
    let mut version = tag;

    if let Some(stripped) = version.strip_prefix('v') {
        if !stripped.is_empty() {
            version = stripped;
        }
    }

    let name_prefix = format!("{}-", repo_name);
    if let Some(stripped) = version.strip_prefix(&name_prefix) {
        if !stripped.is_empty() {
            version = stripped;
        }
    }

    version.to_string()
}
