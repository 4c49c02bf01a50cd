//! Run summary persistence
//!
//! The artifact written at the end of a run: the timing summary line plus
//! the network name of the machine that produced it.

use crate::abstractions::EnvInfo;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Terminal record of one run, serialized as `{"result": .., "host": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub result: String,
    pub host: String,
}

impl RunSummary {
    /// Build a summary for this run, resolving the host name through the
    /// injected environment lookup.
    pub fn new(result: String, env: &dyn EnvInfo) -> Self {
        Self {
            result,
            host: env.hostname(),
        }
    }
}

/// Write the run summary to `path`, overwriting any prior content.
///
/// Writes to a temp file in the same directory and renames it into place,
/// so the artifact is never observed half-written.
pub fn write_summary(path: &Path, summary: &RunSummary) -> Result<()> {
    let temp_file = path.with_extension("tmp");

    let json = serde_json::to_string(summary)?;
    fs::write(&temp_file, json)?;
    fs::rename(&temp_file, path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstractions::MockEnvInfo;
    use tempfile::TempDir;

    #[test]
    fn test_summary_resolves_host_through_env_lookup() {
        let env = MockEnvInfo::new("bench-runner.local");
        let summary = RunSummary::new("async version was 12.00% faster".to_string(), &env);
        assert_eq!(summary.host, "bench-runner.local");
    }

    #[test]
    fn test_write_summary_roundtrips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("async.json");

        let summary = RunSummary {
            result: "async version was 41.27% faster than the serial version".to_string(),
            host: "bench-runner.local".to_string(),
        };
        write_summary(&path, &summary).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let loaded: RunSummary = serde_json::from_str(&contents).unwrap();
        assert_eq!(loaded, summary);

        // Exactly the two documented keys on the wire
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 2);
        assert!(value.get("result").is_some());
        assert!(value.get("host").is_some());
    }

    #[test]
    fn test_write_summary_overwrites_prior_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("async.json");

        let first = RunSummary {
            result: "first run".to_string(),
            host: "a".to_string(),
        };
        let second = RunSummary {
            result: "second run".to_string(),
            host: "b".to_string(),
        };
        write_summary(&path, &first).unwrap();
        write_summary(&path, &second).unwrap();

        let loaded: RunSummary =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded, second);
    }
}
