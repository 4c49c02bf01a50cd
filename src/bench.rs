//! Concurrent vs serial timing harness
//!
//! Runs the same counting workload both ways and measures wall-clock
//! duration for each. The speedup figure is a demonstration measurement
//! that varies with network conditions, but the counts from the two
//! passes must always agree.

use crate::api::BreweryApi;
use crate::counter::{count_breweries, count_breweries_for_states, BreweryCount};
use std::time::{Duration, Instant};
use tracing::info;

/// Timed results of the concurrent and serial passes.
#[derive(Debug)]
pub struct Comparison {
    pub concurrent: Vec<BreweryCount>,
    pub serial: Vec<BreweryCount>,
    pub concurrent_elapsed: Duration,
    pub serial_elapsed: Duration,
}

impl Comparison {
    /// Percentage by which the concurrent pass beat the serial pass.
    ///
    /// Negative when the concurrent pass was slower. Returns 0.0 when the
    /// serial pass took no measurable time at all, since the ratio is
    /// meaningless then.
    pub fn speedup_percent(&self) -> f64 {
        let serial = self.serial_elapsed.as_secs_f64();
        if serial == 0.0 {
            return 0.0;
        }
        let concurrent = self.concurrent_elapsed.as_secs_f64();
        100.0 * (serial - concurrent) / serial
    }

    /// One-line human-readable summary of the comparison.
    pub fn summary(&self) -> String {
        format!(
            "async version was {:.2}% faster than the serial version",
            self.speedup_percent()
        )
    }
}

/// Run the counting workload concurrently, then serially, timing both.
pub async fn run_comparison(api: &BreweryApi, states: &[String]) -> Comparison {
    let start = Instant::now();
    let concurrent = count_breweries_for_states(api, states).await;
    let concurrent_elapsed = start.elapsed();
    info!(
        "Concurrent pass finished in {:.2}s",
        concurrent_elapsed.as_secs_f64()
    );

    let start = Instant::now();
    let mut serial = Vec::with_capacity(states.len());
    for state in states {
        serial.push(count_breweries(api, state).await);
    }
    let serial_elapsed = start.elapsed();
    info!("Serial pass finished in {:.2}s", serial_elapsed.as_secs_f64());

    Comparison {
        concurrent,
        serial,
        concurrent_elapsed,
        serial_elapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comparison(concurrent: Duration, serial: Duration) -> Comparison {
        Comparison {
            concurrent: Vec::new(),
            serial: Vec::new(),
            concurrent_elapsed: concurrent,
            serial_elapsed: serial,
        }
    }

    #[test]
    fn test_speedup_percent() {
        let c = comparison(Duration::from_secs(1), Duration::from_secs(2));
        assert!((c.speedup_percent() - 50.0).abs() < f64::EPSILON);

        let c = comparison(Duration::from_secs(3), Duration::from_secs(2));
        assert!((c.speedup_percent() + 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_speedup_percent_guards_zero_serial_duration() {
        let c = comparison(Duration::from_secs(1), Duration::ZERO);
        assert_eq!(c.speedup_percent(), 0.0);
    }

    #[test]
    fn test_summary_formats_two_decimal_places() {
        let c = comparison(Duration::from_secs(1), Duration::from_secs(2));
        assert_eq!(
            c.summary(),
            "async version was 50.00% faster than the serial version"
        );
    }
}
