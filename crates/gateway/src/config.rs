use anyhow::Context;
use chrono::Duration;

use crate::allowlist::PublicPaths;

/// Gateway configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base64-encoded shared HMAC secret (`JWT_SECRET`), identical to the
    /// issuer's.
    pub jwt_secret: String,

    /// Lifetime of tokens minted by the in-process issuer mount
    /// (`TOKEN_TTL_SECS`, default 3600).
    pub token_ttl: Duration,

    /// Paths exempt from authentication (`PUBLIC_PATHS`, comma-separated;
    /// defaults to login/docs/health/discovery).
    pub public_paths: PublicPaths,
}

impl GatewayConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set; using insecure dev default");
            "ZGV2LXNlY3JldC1kby1ub3QtdXNl".to_string()
        });

        let token_ttl = match std::env::var("TOKEN_TTL_SECS") {
            Ok(v) => Duration::seconds(
                v.parse::<i64>()
                    .context("TOKEN_TTL_SECS must be an integer number of seconds")?,
            ),
            Err(_) => Duration::seconds(3600),
        };

        let public_paths = match std::env::var("PUBLIC_PATHS") {
            Ok(v) => PublicPaths::new(v.split(',').map(String::from)),
            Err(_) => PublicPaths::defaults(),
        };

        Ok(Self {
            jwt_secret,
            token_ttl,
            public_paths,
        })
    }
}
