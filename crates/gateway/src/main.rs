#[tokio::main]
async fn main() -> anyhow::Result<()> {
    trustgate_observability::init();

    let cfg = trustgate_gateway::GatewayConfig::from_env()?;
    let app = trustgate_gateway::app::build_app(cfg)?;

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
    tracing::info!("gateway listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
