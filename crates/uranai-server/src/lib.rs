//! Uranai Server - Divination HTTP API
//!
//! A small web service over the Uranai engines. Exposes the 369 numerology
//! grid, the flower fortune reading, and an analysis endpoint that turns the
//! six special numbers into a prose reading - via an outbound generative-text
//! provider when configured, or a local fallback built from the same
//! interpretation tables when not.
//!
//! # Architecture
//!
//! - **Config**: environment-driven settings (listen address, persona,
//!   optional provider credentials)
//! - **API**: axum router and request/response types
//! - **Analysis**: orchestration of provider call and fallback
//! - **Prompt**: persona-templated prompt construction
//! - **Provider**: the single outbound HTTP call

pub mod analysis;
pub mod api;
pub mod config;
pub mod error;
pub mod prompt;
pub mod provider;

pub use api::{build_router, AppState};
pub use config::{AiConfig, ServerConfig};
pub use error::{Error, Result};
pub use prompt::Persona;
