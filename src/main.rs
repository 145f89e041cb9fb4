use clap::Parser;
use recipe_new::core::RecipeError;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "recipe-new")]
#[command(about = "Bootstrap package-manager recipes from GitHub repositories")]
#[command(version)]
struct Cli {
    /// GitHub repository URL to bootstrap a recipe from
    url: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // The token is required before anything else happens, including
    // argument validation.
    let token = match std::env::var("GITHUB_TOKEN") {
        Ok(token) => token,
        Err(_) => {
            eprintln!("GITHUB_TOKEN must be set in the environment");
            return ExitCode::FAILURE;
        }
    };

    let cli = Cli::parse();

    match cli::new::run(cli.url, token).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(RecipeError::SubprocessExit(code)) => {
            // Scaffolder failed - exit with its code
            // No error message (the scaffolder already printed it)
            ExitCode::from(code as u8)
        }
        Err(e) => {
            eprintln!("\n{}", e);
            ExitCode::FAILURE
        }
    }
}
