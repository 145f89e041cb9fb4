use recipe_new::artifact::ArtifactFetcher;
use recipe_new::core::{RecipeError, RecipeResult};
use recipe_new::github::{version, MetadataClient, RepoRef, DEFAULT_API_URL};
use recipe_new::recipe::{RecipeParams, Scaffolder};

/// Bootstrap a recipe for the repository at `url`.
///
/// Strictly sequential: parse the URL, query metadata, resolve a version,
/// download and hash the tarball, then hand everything to the scaffolder.
/// Every stage failure aborts the run; nothing is retried.
pub async fn run(url: String, token: String) -> RecipeResult<()> {
    let repo = RepoRef::parse(&url)?;
    println!("{} {}", repo.owner, repo.name);

    let client = MetadataClient::new(DEFAULT_API_URL, &token)?;
    let repository = client.query_repository(&repo).await?;

    let metadata = repository.metadata(&url);
    println!("description: {}", metadata.description.as_deref().unwrap_or(""));
    println!("homepage: {}", metadata.homepage);
    println!("license: {}", metadata.license);
    println!("topics: {}", metadata.topics.join(", "));

    let tag = version::resolve_tag(repository.latest_release_tag(), &repository.tag_names())
        .ok_or_else(|| RecipeError::NoReleaseFound(repo.to_string()))?;

    // The raw tag goes into the URL; normalization only shapes the version.
    let tarball_url = ArtifactFetcher::tarball_url(&url, &tag);
    println!("url: {}", tarball_url);

    let package_version = version::normalize_version(&tag, &repo.name);
    println!("version: {}", package_version);

    let fetcher = ArtifactFetcher::new()?;
    let artifact = fetcher.fetch_and_hash(&tarball_url).await?;
    println!("sha256: {}", artifact.sha256);

    let params = RecipeParams::build(&repo.name, &package_version, &metadata, &artifact);

    let scaffolder = Scaffolder::new();
    println!("{}", scaffolder.render(&params));
    scaffolder.run(&params)
}
