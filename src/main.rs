use repository::init_repository;
use tracing::info;
use util::load_secrets;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let secrets = load_secrets("Secrets.toml")?;
    let Some(db_url) = secrets.get("DATABASE_URL").and_then(|v| v.as_str()) else {
        anyhow::bail!("DATABASE_URL was not found in Secrets.toml");
    };
    let bind_addr = secrets
        .get("BIND_ADDR")
        .and_then(|v| v.as_str())
        .unwrap_or("0.0.0.0:8000");

    let repository = init_repository(db_url).await?;
    let router = api::serve(repository).await?;

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!(task = "start server", addr = bind_addr);
    axum::serve(listener, router).await?;

    Ok(())
}
