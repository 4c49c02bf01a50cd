//! Abstraction layers for external dependencies
//!
//! This module provides trait-based abstractions for the HTTP transport and
//! the host environment lookup to enable better testing and dependency
//! injection.

pub mod env;
pub mod http;

pub use env::{EnvInfo, MockEnvInfo, SystemEnvInfo};
pub use http::{HttpFetcher, HttpResponse, MockHttpFetcher, ReqwestFetcher};
