//! Shared utilities for the Tutorhive API.
//!
//! - [`errors`]: Application error types and handling
//! - [`jwt`]: JWT token creation and verification

pub mod errors;
pub mod jwt;
