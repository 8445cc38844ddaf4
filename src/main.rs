/// Movie Catalog server binary
use movie_catalog::{config::ServerConfig, context::AppContext, logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::from_env()?;

    // Initialize logging
    logging::init(&config.logging)?;
    tracing::info!(config = %config.summary(), "configuration loaded");

    print_banner(&config.service.version);

    // Create application context
    let ctx = AppContext::new(config)?;
    tracing::info!(movies = ctx.movies.count().await, "catalog ready");

    // Start server
    server::serve(ctx).await?;

    Ok(())
}

fn print_banner(version: &str) {
    println!(
        r#"
   __  ___         _         _____       __        __
  /  |/  /__ _  __(_)__     / ___/___ _ / /_ ___ _/ /__  ___ _
 / /|_/ / _ \ |/ / / -_)   / /__/ _ `// __// _ `/ / _ \/ _ `/
/_/  /_/\___/___/_/\__/    \___/\_,_/ \__/ \_,_/_/\___/\_, /
                                                      /___/
        Movie Catalog API v{}
        "#,
        version
    );
}
