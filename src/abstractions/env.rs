//! Host environment lookup
//!
//! The run summary embeds the network name of the machine that produced it.
//! The lookup sits behind a trait so tests can fix the value.

/// Trait for host environment lookups
pub trait EnvInfo: Send + Sync {
    /// Network name of the executing machine.
    fn hostname(&self) -> String;
}

/// Real implementation reading the system hostname
pub struct SystemEnvInfo;

impl EnvInfo for SystemEnvInfo {
    fn hostname(&self) -> String {
        hostname::get()
            .ok()
            .and_then(|h| h.into_string().ok())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

/// Mock implementation returning a fixed name for testing
pub struct MockEnvInfo {
    pub hostname: String,
}

impl MockEnvInfo {
    pub fn new(hostname: &str) -> Self {
        Self {
            hostname: hostname.to_string(),
        }
    }
}

impl EnvInfo for MockEnvInfo {
    fn hostname(&self) -> String {
        self.hostname.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_hostname_is_never_empty() {
        // Falls back to "unknown" when the lookup fails, so this holds on
        // any machine
        assert!(!SystemEnvInfo.hostname().is_empty());
    }

    #[test]
    fn test_mock_returns_fixed_hostname() {
        let env = MockEnvInfo::new("build-box-07");
        assert_eq!(env.hostname(), "build-box-07");
    }
}
