//! Configuration read from the environment.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `ENDPOINTS_FIXTURES` | `fixtures` | Directory served by [`FixtureDir`](crate::source::FixtureDir) |
//! | `RUST_LOG` | unset | Log filter, see [`setup_tracing`](super::setup_tracing) |

use std::path::PathBuf;

/// Environment variable naming the fixture directory.
pub const FIXTURES_ENV: &str = "ENDPOINTS_FIXTURES";

/// Fixture directory used when [`FIXTURES_ENV`] is unset or empty.
pub const DEFAULT_FIXTURES_DIR: &str = "fixtures";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub fixtures_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fixtures_dir: PathBuf::from(DEFAULT_FIXTURES_DIR),
        }
    }
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let fixtures_dir = lookup(FIXTURES_ENV)
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FIXTURES_DIR));
        Self { fixtures_dir }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(Config::from_lookup(|_| None), Config::default());
    }

    #[test]
    fn test_fixtures_dir_override() {
        let config = Config::from_lookup(|key| {
            (key == FIXTURES_ENV).then(|| "/srv/documents".to_string())
        });
        assert_eq!(config.fixtures_dir, PathBuf::from("/srv/documents"));
    }

    #[test]
    fn test_blank_value_falls_back() {
        let config = Config::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config.fixtures_dir, PathBuf::from(DEFAULT_FIXTURES_DIR));
    }
}
