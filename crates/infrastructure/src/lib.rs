//! Reqres Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, the layered configuration and
//! report rendering.

pub mod adapters;
pub mod auth;
pub mod bootstrap;
pub mod config;
pub mod report;

pub use adapters::{ReqwestHttpClient, SystemClock};
pub use auth::{HttpTokenProvider, StaticTokenProvider};
pub use bootstrap::build_context;
pub use crate::config::{
    AuthConfig, BalanceConfig, ConfigError, HttpConfig, ReqresConfig, SuiteConfig,
};
pub use report::{ReportError, ReportFormat, render, render_text, to_json_stable};
