//! Merchant configuration and gateway mode selection.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Gateway environment selection.
/// This determines whether signed requests target Buckaroo's test environment
/// or the live payment environment, and supplies the numeric boolean literal
/// that participates in the request signature.
/// - Test: Buckaroo's sandbox; transactions are simulated.
/// - Live: the production environment; transactions move real money.
/// # Examples
/// ```rust
/// use std::str::FromStr;
/// use buckaroo_ideal::config::Mode;
///
/// let mode = Mode::from_str("live")?;
/// assert_eq!(mode, Mode::Live);
/// # Ok::<(), buckaroo_ideal::ModeParseError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Test,
    Live,
}

/// Error returned when parsing a [`Mode`] from a string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModeParseError {
    #[error("invalid gateway mode: {input}")]
    Invalid { input: String },
}

impl FromStr for Mode {
    type Err = ModeParseError;
    fn from_str(mode: &str) -> Result<Mode, ModeParseError> {
        match mode.to_ascii_lowercase().as_str() {
            "test" => Ok(Mode::Test),
            "live" => Ok(Mode::Live),
            _ => Err(ModeParseError::Invalid {
                input: mode.to_string(),
            }),
        }
    }
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Test => "test",
            Mode::Live => "live",
        }
    }

    /// The numeric boolean literal the gateway expects in signed material:
    /// `"1"` for test mode, `"0"` for live. The gateway recomputes signatures
    /// with these exact literals, so `"true"`/`"false"` would never match.
    pub fn numeric_str(&self) -> &'static str {
        match self {
            Mode::Test => "1",
            Mode::Live => "0",
        }
    }

    pub fn is_test(&self) -> bool {
        matches!(self, Mode::Test)
    }
}

/// Merchant credentials and environment for signing requests.
///
/// Constructed once at application startup and passed to the signature
/// calculator; there is no process-global configuration.
///
/// # Examples
/// ```rust
/// use buckaroo_ideal::config::{Config, Mode};
///
/// let config = Config::new("MERCHANT1", "SECRET1", Mode::Test);
/// assert_eq!(config.merchant_key(), "MERCHANT1");
/// assert!(config.test_mode());
/// ```
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    merchant_key: String,
    secret_key: String,
    #[serde(default)]
    mode: Mode,
}

impl Config {
    pub fn new(
        merchant_key: impl Into<String>,
        secret_key: impl Into<String>,
        mode: Mode,
    ) -> Self {
        Self {
            merchant_key: merchant_key.into(),
            secret_key: secret_key.into(),
            mode,
        }
    }

    pub fn merchant_key(&self) -> &str {
        &self.merchant_key
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn test_mode(&self) -> bool {
        self.mode.is_test()
    }
}

// The secret key must never reach logs, so Debug is written by hand.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("merchant_key", &self.merchant_key)
            .field("secret_key", &"<redacted>")
            .field("mode", &self.mode)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!(Mode::from_str("TEST").unwrap(), Mode::Test);
        assert_eq!(Mode::from_str("Live").unwrap(), Mode::Live);
        assert!(matches!(
            Mode::from_str("sandbox"),
            Err(ModeParseError::Invalid { .. })
        ));
    }

    #[test]
    fn mode_numeric_literals_are_not_booleans() {
        assert_eq!(Mode::Test.numeric_str(), "1");
        assert_eq!(Mode::Live.numeric_str(), "0");
    }

    #[test]
    fn debug_output_redacts_secret_key() {
        let config = Config::new("MERCHANT1", "SECRET1", Mode::Test);
        let rendered = format!("{config:?}");
        assert!(rendered.contains("MERCHANT1"));
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("SECRET1"));
    }

    #[test]
    fn config_deserializes_with_default_mode() {
        let config: Config = serde_json::from_str(
            r#"{"merchant_key": "MERCHANT1", "secret_key": "SECRET1"}"#,
        )
        .unwrap();
        assert_eq!(config.mode(), Mode::Test);
    }
}
