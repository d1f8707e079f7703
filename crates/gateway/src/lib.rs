//! Perimeter gateway: verifies bearer tokens once per request, derives an
//! identity, and propagates it downstream without re-running password checks.

pub mod allowlist;
pub mod app;
pub mod authz;
pub mod config;
pub mod errors;
pub mod middleware;

pub use config::GatewayConfig;
