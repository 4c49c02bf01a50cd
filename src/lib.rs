//! # Hopcount
//!
//! A small CLI tool that counts breweries per U.S. state through the Open
//! Brewery DB paged listing API and races a concurrent fetch pass against a
//! serial one.
//!
//! ## Usage
//!
//! ```bash
//! hopcount [--states a,b,c] [--base-url URL] [--timeout SECONDS] [-o PATH]
//! ```
//!
//! ## Modules
//!
//! - `abstractions` - Trait-based seams for external dependencies (HTTP transport, host lookup)
//! - `api` - Brewery directory listing client with tagged page-fetch outcomes
//! - `bench` - Concurrent vs serial timing harness
//! - `config` - Defaults for the demonstration run
//! - `counter` - Paged per-state counting and the ordered concurrent fan-out
//! - `error` - Crate-wide error type
//! - `report` - Run summary artifact persistence
pub mod abstractions;
pub mod api;
pub mod bench;
pub mod config;
pub mod counter;
pub mod error;
pub mod report;
