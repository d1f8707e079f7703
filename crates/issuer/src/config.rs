use anyhow::Context;
use chrono::Duration;

/// Issuer configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct IssuerConfig {
    /// Base64-encoded shared HMAC secret (`JWT_SECRET`), identical to the
    /// gateway's.
    pub jwt_secret: String,

    /// Token lifetime (`TOKEN_TTL_SECS`, default 3600).
    pub token_ttl: Duration,
}

impl IssuerConfig {
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

        Ok(Self {
            jwt_secret,
            token_ttl,
        })
    }
}
