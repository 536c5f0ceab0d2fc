//! Auth command - test and explain broadcast-service authentication

use anstream::println;
use owo_colors::OwoColorize;
use quill::auth::{self, AuthSource};
use quill::config::{self, Config};
use quill::error::Result;

/// Run the auth command
pub async fn run_auth(action: &str) -> Result<()> {
    match action {
        "test" => {
            let config = Config::load()?;
            let auth = auth::get_auth()?;
            let source = match auth.source {
                AuthSource::EnvVar => "QUILL_TOKEN environment variable",
                AuthSource::ConfigFile => "config file",
            };

            let account = auth::test_auth(&config.broadcast_url, &auth).await?;
            println!("{} authenticated as @{account} ({source})", "✓".green());
        }
        _ => {
            println!("Authentication setup:");
            println!();
            println!("  1. Generate an access token scoped to your posting authority");
            println!("     with your broadcast service (e.g. a SteemConnect app token).");
            println!("  2. Export it as {}, or add", "QUILL_TOKEN".bold());
            println!("     `token = \"...\"` to the config file.");
            if let Some(path) = config::config_file_path() {
                println!();
                println!("  Config file: {}", path.display());
            }
            println!();
            println!("  Verify with `quill auth test`.");
        }
    }

    Ok(())
}
