//! recipe-new
//!
//! Bootstraps a package-manager recipe from a GitHub repository URL:
//! queries repository metadata over the GraphQL API, resolves the most
//! appropriate release version, downloads and hashes the source tarball,
//! and invokes the external scaffolder with the collected values.

/// Core error types.
pub mod core;

/// GitHub metadata access and version resolution.
pub mod github;

/// Artifact download and content verification.
pub mod artifact;

/// Recipe parameter assembly and scaffolder invocation.
pub mod recipe;

pub use self::core::{RecipeError, RecipeResult};
