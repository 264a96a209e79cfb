//! Test utilities for Larder services.
//!
//! Import from `[dev-dependencies]` only.

pub mod auth;
