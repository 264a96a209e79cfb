//! Service plumbing shared by Larder services: configuration, tracing,
//! request ids, health checks and wire formats.

pub mod config;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
