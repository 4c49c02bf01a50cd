//! Defaults for the demonstration run
//!
//! Everything here can be overridden from the command line; the values match
//! the public Open Brewery DB deployment and the four-state demonstration
//! the tool runs when invoked without arguments.

use std::path::PathBuf;
use std::time::Duration;

/// Listing endpoint of the public brewery directory.
pub const DEFAULT_BASE_URL: &str = "https://api.openbrewerydb.org/v1/breweries";

/// Page size used for every request; 200 is the maximum the directory
/// API accepts.
pub const MAX_PER_PAGE: u32 = 200;

/// Per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default path of the run summary artifact.
pub const DEFAULT_OUTPUT: &str = "async.json";

/// State identifiers the demonstration run counts, comma separated.
pub const DEFAULT_STATES: &str = "district_of_columbia,maryland,new_york,virginia";

/// Settings for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listing endpoint the page URLs are built from.
    pub base_url: String,
    /// Records requested per page.
    pub per_page: u32,
    /// Timeout applied to each individual request.
    pub timeout: Duration,
    /// Where the run summary artifact is written.
    pub output: PathBuf,
    /// States to count, in the order results are reported.
    pub states: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            per_page: MAX_PER_PAGE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            output: PathBuf::from(DEFAULT_OUTPUT),
            states: default_states(),
        }
    }
}

/// The four state identifiers of the demonstration run.
pub fn default_states() -> Vec<String> {
    DEFAULT_STATES.split(',').map(String::from).collect()
}
