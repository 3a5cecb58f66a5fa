//! API Layer
//!
//! Backend REST transport: configuration, session context and the shared
//! HTTP client the entity adapters are built on.

mod config;
mod http;

pub use config::{ApiConfig, Session};
pub use http::HttpClient;
