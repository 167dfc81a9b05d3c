//! Authentication primitives for BigCommerce apps.
//!
//! # Overview
//!
//! - [`oauth`]: Authorization code exchange for the install callback
//! - [`signed_payload`]: Verification of `signed_payload_jwt` tokens sent to the
//!   load, uninstall, and remove-user callbacks
//! - [`AuthSession`]: Result of an install exchange
//! - [`SignedPayloadClaims`]: Claims of a verified signed payload
//! - [`clock`]: Injectable time source for lifetime checks
//! - [`hmac`]: HMAC-SHA256 and constant-time comparison helpers

mod claims;
pub mod clock;
pub mod hmac;
pub mod oauth;
mod session;
pub mod signed_payload;

pub use claims::{ClaimsOwner, ClaimsUser, SignedPayloadClaims};
pub use session::{AuthSession, SessionUser};
