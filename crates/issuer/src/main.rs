#[tokio::main]
async fn main() -> anyhow::Result<()> {
    trustgate_observability::init();

    let cfg = trustgate_issuer::IssuerConfig::from_env()?;
    let app = trustgate_issuer::build_app(&cfg)?;

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8081").await?;
    tracing::info!("issuer listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
