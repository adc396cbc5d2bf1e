//! Report configuration.
//!
//! The only setting the engine needs is the timezone to fall back to when a
//! request names none, or names one that is not a valid IANA identifier.

use chrono_tz::Tz;

use crate::error::{HoursError, Result};

/// Timezone used when nothing else is configured.
pub const DEFAULT_TIMEZONE: Tz = Tz::UTC;

/// Explicit configuration passed into report generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    default_timezone: Tz,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            default_timezone: DEFAULT_TIMEZONE,
        }
    }
}

impl ReportConfig {
    pub fn new(default_timezone: Tz) -> Self {
        Self { default_timezone }
    }

    /// Build a configuration from an IANA timezone name.
    ///
    /// # Errors
    ///
    /// Returns [`HoursError::InvalidTimezone`] if `name` is not a known zone.
    pub fn from_timezone_name(name: &str) -> Result<Self> {
        parse_timezone(name).map(Self::new)
    }

    pub fn default_timezone(&self) -> Tz {
        self.default_timezone
    }

    /// Resolve a request's timezone identifier, falling back to the configured
    /// default when it is missing, blank, or unrecognized. Never fails.
    pub fn resolve_timezone(&self, requested: Option<&str>) -> Tz {
        let Some(name) = requested.map(str::trim).filter(|s| !s.is_empty()) else {
            return self.default_timezone;
        };
        match parse_timezone(name) {
            Ok(tz) => tz,
            Err(err) => {
                tracing::warn!(
                    requested = name,
                    fallback = self.default_timezone.name(),
                    "{err}; using default timezone"
                );
                self.default_timezone
            }
        }
    }
}

/// Parse an IANA timezone string into `Tz`.
pub(crate) fn parse_timezone(s: &str) -> Result<Tz> {
    s.trim()
        .parse::<Tz>()
        .map_err(|_| HoursError::InvalidTimezone(format!("'{}'", s)))
}
