use anyhow::Result;

/// Build the relay client from configuration and probe the endpoint once.
///
/// Useful after editing configuration or before putting a deployment behind
/// traffic, so a broken relay address surfaces here instead of on the first
/// visitor submission.
pub async fn check(config: crate::config::Config) -> Result<()> {
    let relay = reachout_contact::RelayClient::new(config.relay.client_config())?;

    tracing::info!(endpoint = %relay.endpoint(), "Probing relay endpoint...");

    let status = relay.probe().await?;
    tracing::info!(%status, "Relay endpoint reachable");

    Ok(())
}
