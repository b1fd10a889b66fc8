//! Build-mode configuration.
//!
//! The mode decides one thing: whether diagnostic display-name labels are
//! computed. Rendering behavior is identical either way.

use std::str::FromStr;
use std::sync::OnceLock;

use thiserror::Error;

/// Environment variable consulted by [`BuildMode::current`].
pub const MODE_ENV_VAR: &str = "RENEST_MODE";

static CURRENT: OnceLock<BuildMode> = OnceLock::new();

/// Whether diagnostic extras are computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BuildMode {
    /// Diagnostic labels on. The default.
    #[default]
    Development,
    /// Diagnostic labels off.
    Production,
}

impl BuildMode {
    /// Process-wide mode, resolved once from `RENEST_MODE` on first use.
    ///
    /// Unset or unparsable values fall back to `Development`. Prefer the
    /// explicit-mode constructors (e.g.
    /// [`nest_in_mode`](crate::nest::nest_in_mode)) where an ambient value
    /// would make tests order-dependent.
    pub fn current() -> Self {
        *CURRENT.get_or_init(|| {
            std::env::var(MODE_ENV_VAR)
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or_default()
        })
    }

    /// True when diagnostic labels should be computed.
    pub fn diagnostics(self) -> bool {
        self == Self::Development
    }
}

/// Error returned when parsing an unrecognized build-mode string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized build mode '{0}' (expected 'development' or 'production')")]
pub struct ParseBuildModeError(String);

impl FromStr for BuildMode {
    type Err = ParseBuildModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" | "debug" => Ok(Self::Development),
            "production" | "prod" | "release" => Ok(Self::Production),
            other => Err(ParseBuildModeError(other.to_string())),
        }
    }
}
