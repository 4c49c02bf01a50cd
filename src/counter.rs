//! Paged brewery counting
//!
//! Walks the directory's page-based listing for one state until exhaustion,
//! summing record counts, and fans the per-state walks out concurrently
//! with results assembled in input order.

use crate::api::{BreweryApi, PageFetch};
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Number of breweries counted for one state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreweryCount {
    pub state: String,
    pub brewery_count: u64,
}

/// Count the breweries listed for one state.
///
/// Pages through the listing from page 1 until the server signals the end
/// of data with an empty list. Any failed page fetch is absorbed here: the
/// loop stops and whatever count has accumulated so far is returned. A
/// state whose first request fails therefore reports 0, indistinguishable
/// in the result from a state with no breweries; the cause is visible only
/// in the logs. Correctness also assumes the directory never serves
/// overlapping pages, which is not verified.
pub async fn count_breweries(api: &BreweryApi, state: &str) -> BreweryCount {
    info!("Counting breweries for {}", state);

    let mut count: u64 = 0;
    let mut page: u32 = 1;

    loop {
        match api.fetch_page(state, page).await {
            PageFetch::Records(records) => {
                count += records.len() as u64;
                page += 1;
            }
            PageFetch::EndOfData => break,
            PageFetch::Fatal(e) => {
                warn!("Stopping pagination for {} at page {}: {}", state, page, e);
                break;
            }
        }
    }

    info!("Counted {} breweries for {}", count, state);
    BreweryCount {
        state: state.to_string(),
        brewery_count: count,
    }
}

/// Count breweries for every state concurrently.
///
/// Dispatches one counting future per state and joins them all; the result
/// order matches the input order regardless of which fetch completes first.
/// Per-state failures never escape [`count_breweries`], so every state
/// contributes a result.
pub async fn count_breweries_for_states(api: &BreweryApi, states: &[String]) -> Vec<BreweryCount> {
    let tasks = states.iter().map(|state| count_breweries(api, state));
    join_all(tasks).await
}
