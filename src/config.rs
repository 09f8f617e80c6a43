//! Engine configuration.

#[cfg(feature = "config")]
use serde::Deserialize;

/// Tunables for a [`crate::resolver::Resolver`].
///
/// # Examples
///
/// ```rust
/// use rc_depend::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.synthetic_services, vec!["net".to_string()]);
/// assert_eq!(config.max_services, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct EngineConfig {
    /// Service names the resolver guarantees to exist before sweeping, even
    /// if the adapter never declared them. Generalizes the historical
    /// hardcoded `net` carve-out in the original `BEFORE`/`AFTER`
    /// unknown-peer policy; `net` remains the sole default member so
    /// out-of-the-box behavior is unchanged.
    pub synthetic_services: Vec<String>,
    /// If set, `resolve_all()` refuses to run (returning
    /// [`crate::error::DepError::Fatal`]) once the registry holds more than
    /// this many services. `None` means unbounded.
    pub max_services: Option<usize>,
    /// Whether a second `PROVIDE` of a virtual already bound to another
    /// service is treated as a fatal error rather than a warning. The
    /// resolution rules in §4.3 call for a warning; this exists for hosts
    /// that want to fail closed during development.
    pub strict_virtual_conflicts: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            synthetic_services: vec!["net".to_string()],
            max_services: None,
            strict_virtual_conflicts: false,
        }
    }
}

impl EngineConfig {
    /// A config with no synthetic services and no limits, useful for tests
    /// that want to assert on the unknown-peer policy directly rather than
    /// have `net` pre-seeded.
    pub fn bare() -> Self {
        Self {
            synthetic_services: Vec::new(),
            max_services: None,
            strict_virtual_conflicts: false,
        }
    }

    /// Whether `name` is one of the configured synthetic services.
    pub fn is_synthetic(&self, name: &str) -> bool {
        self.synthetic_services.iter().any(|s| s == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_net_as_sole_synthetic_service() {
        let config = EngineConfig::default();
        assert!(config.is_synthetic("net"));
        assert!(!config.is_synthetic("dbus"));
    }

    #[test]
    fn bare_config_has_no_synthetic_services() {
        let config = EngineConfig::bare();
        assert!(!config.is_synthetic("net"));
        assert_eq!(config.max_services, None);
    }
}
