//! Configuration modules for the Tutorhive API.
//!
//! Each submodule owns one aspect of configuration and loads it from
//! environment variables through a `from_env()` constructor.
//!
//! # Modules
//!
//! - [`cors`]: CORS allowed-origin configuration
//! - [`jwt`]: JWT signing secret and token expiry
//! - [`notifications`]: SSE keep-alive tuning

pub mod cors;
pub mod jwt;
pub mod notifications;
