#![deny(elided_lifetimes_in_paths)]
#![warn(clippy::pedantic)]

use anyhow::{Context, Result};
use esa_sweep::{Client, Config};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(missing) => {
            // normal early exit, not a failure
            println!("{}", missing);
            return Ok(());
        }
    };

    println!("deleting posts matching {}", config.query);

    let client = Client::new(&config.team, config.token);
    let results = client
        .search_posts(&config.query)
        .await
        .context("failed to search posts")?;

    let ids = results.post_ids();
    if ids.is_empty() {
        println!("no matching posts");
        return Ok(());
    }

    client
        .delete_posts(&ids)
        .await
        .context("failed to delete posts")?;
    println!("deleted {} posts", ids.len());

    Ok(())
}
