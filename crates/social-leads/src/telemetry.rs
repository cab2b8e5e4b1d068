use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Crates whose events follow the configured level; everything else stays at `warn`.
const LEAD_TARGETS: [&str; 2] = ["social_leads", "social_leads_api"];

#[derive(Debug)]
pub enum TelemetryError {
    EnvFilter { value: String, source: ParseError },
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::EnvFilter { value, .. } => {
                write!(f, "log filter '{}' could not be parsed", value)
            }
            TelemetryError::Subscriber(err) => {
                write!(f, "tracing subscriber already installed: {err}")
            }
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::EnvFilter { source, .. } => Some(source),
            TelemetryError::Subscriber(err) => Some(&**err),
        }
    }
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => build_filter(&config.log_level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(config.show_targets)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

fn build_filter(level: &str) -> Result<EnvFilter, TelemetryError> {
    let directives = scoped_directives(level);
    EnvFilter::try_new(&directives).map_err(|source| TelemetryError::EnvFilter {
        value: level.to_string(),
        source,
    })
}

/// A bare level such as `debug` is scoped to the lead crates. Full directives pass through.
fn scoped_directives(level: &str) -> String {
    let level = level.trim();
    if level.contains('=') || level.contains(',') {
        return level.to_string();
    }

    let mut directives = String::from("warn");
    for target in LEAD_TARGETS {
        directives.push_str(&format!(",{target}={level}"));
    }
    directives
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_levels_are_scoped_to_lead_crates() {
        assert_eq!(
            scoped_directives("debug"),
            "warn,social_leads=debug,social_leads_api=debug"
        );
        assert_eq!(scoped_directives("hyper=info,social_leads=trace"), "hyper=info,social_leads=trace");
    }

    #[test]
    fn rejects_malformed_filter_directives() {
        match build_filter("social_leads=loud") {
            Err(TelemetryError::EnvFilter { value, .. }) => {
                assert_eq!(value, "social_leads=loud");
            }
            other => panic!("expected env filter error, got {other:?}"),
        }
    }

    #[test]
    fn accepts_plain_levels() {
        assert!(build_filter("debug").is_ok());
    }
}
