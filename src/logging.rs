//! Tracing setup for the application.
//!
//! The default level comes from the `verbosity` key of `student_records.json`;
//! `RUST_LOG` overrides it when set.

use serde::{Deserialize, Serialize};
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// How chatty the log output is.
///
/// Written in the config file either by name (`"verbose"`) or by the tracing
/// level it maps to (`"debug"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Errors only, e.g. a failed confirmation dialog.
    #[serde(alias = "error")]
    Quiet,
    /// Startup, added/updated/deleted students.
    #[default]
    #[serde(alias = "info")]
    Normal,
    /// Also refused edits and cancelled deletes.
    #[serde(alias = "debug")]
    Verbose,
    /// Everything, including iced internals when `RUST_LOG` allows it.
    Trace,
}

impl Verbosity {
    #[must_use]
    pub fn to_level_filter(&self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::INFO,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Filter directive limited to this crate's own events.
    fn directive(&self) -> String {
        format!("{}={}", env!("CARGO_CRATE_NAME"), self.to_level_filter())
    }
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over `verbosity`.
/// Calling it again is harmless.
pub fn init_logging(verbosity: Verbosity) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false),
        );

    let _ = subscriber.try_init();
}

#[cfg(test)]
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_to_level() {
        assert_eq!(Verbosity::Quiet.to_level_filter(), Level::ERROR);
        assert_eq!(Verbosity::Normal.to_level_filter(), Level::INFO);
        assert_eq!(Verbosity::Verbose.to_level_filter(), Level::DEBUG);
        assert_eq!(Verbosity::Trace.to_level_filter(), Level::TRACE);
    }

    #[test]
    fn test_directive_targets_this_crate() {
        assert_eq!(Verbosity::Verbose.directive(), "student_records=DEBUG");
    }

    #[test]
    fn test_verbosity_from_config_names_and_levels() {
        let parse = |raw: &str| serde_json::from_str::<Verbosity>(raw).unwrap();
        assert_eq!(parse(r#""quiet""#), Verbosity::Quiet);
        assert_eq!(parse(r#""error""#), Verbosity::Quiet);
        assert_eq!(parse(r#""info""#), Verbosity::Normal);
        assert_eq!(parse(r#""debug""#), Verbosity::Verbose);
        assert_eq!(parse(r#""trace""#), Verbosity::Trace);
        assert!(serde_json::from_str::<Verbosity>(r#""loud""#).is_err());
    }

    #[test]
    fn test_verbosity_default() {
        assert_eq!(Verbosity::default(), Verbosity::Normal);
    }

    #[test]
    fn test_init_logging_twice_does_not_panic() {
        init_logging(Verbosity::Verbose);
        init_logging(Verbosity::Quiet);
        init_test_logging();
    }
}
