//! `trustgate-auth` — pure claims/token boundary (zero-trust).
//!
//! This crate is intentionally decoupled from HTTP and storage: it only knows
//! how to model a claim set, sign it into a compact token, and verify one back.

pub mod claims;
pub mod codec;
pub mod identity;
pub mod key;
pub mod roles;

pub use claims::ClaimSet;
pub use codec::{TokenError, decode, encode};
pub use identity::VerifiedIdentity;
pub use key::{KeyError, SigningKey};
pub use roles::Role;
