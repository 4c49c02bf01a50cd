//! Open Brewery DB listing client
//!
//! Builds paged listing requests and folds the transport, status, and decode
//! outcomes of each request into a single tagged page-fetch result, so the
//! pagination loop has exactly three cases to interpret.

use crate::abstractions::HttpFetcher;
use crate::config::Config;
use crate::error::Error;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Outcome of fetching one listing page.
#[derive(Debug)]
pub enum PageFetch {
    /// The page held records; pagination continues.
    Records(Vec<Value>),
    /// The server returned an empty list: the expected last-page signal.
    EndOfData,
    /// Transport failure, non-success status, or undecodable body. The
    /// pagination loop stops exactly as for `EndOfData`, but the cause is
    /// logged distinctly.
    Fatal(Error),
}

/// Client for the brewery directory's paged listing endpoint.
pub struct BreweryApi {
    base_url: String,
    per_page: u32,
    fetcher: Arc<dyn HttpFetcher>,
}

impl BreweryApi {
    pub fn new(config: &Config, fetcher: Arc<dyn HttpFetcher>) -> Self {
        Self {
            base_url: config.base_url.clone(),
            per_page: config.per_page,
            fetcher,
        }
    }

    /// Listing URL for one page of one state's breweries.
    fn page_url(&self, state: &str, page: u32) -> String {
        format!(
            "{}?by_state={}&per_page={}&page={}",
            self.base_url, state, self.per_page, page
        )
    }

    /// Fetch one listing page for `state` and classify the outcome.
    ///
    /// The record schema is opaque here; callers only ever look at how many
    /// records a page holds.
    pub async fn fetch_page(&self, state: &str, page: u32) -> PageFetch {
        let url = self.page_url(state, page);
        debug!("Fetching page {} for {}", page, state);

        let response = match self.fetcher.get(&url).await {
            Ok(response) => response,
            Err(e) => return PageFetch::Fatal(e),
        };

        if !response.is_success() {
            return PageFetch::Fatal(Error::HttpStatus(response.status));
        }

        match serde_json::from_slice::<Vec<Value>>(&response.body) {
            Ok(records) if records.is_empty() => PageFetch::EndOfData,
            Ok(records) => PageFetch::Records(records),
            Err(e) => PageFetch::Fatal(Error::Decode(e.to_string())),
        }
    }
}
