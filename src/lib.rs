//! Rust toolkit for signing Buckaroo iDEAL payment requests.
//!
//! Buckaroo authenticates merchant requests with a deterministic MD5
//! signature over the order fields and merchant credentials. This crate
//! models the order and configuration and computes that signature.
//!
//! # Examples
//! ```rust
//! use buckaroo_ideal::config::{Config, Mode};
//! use buckaroo_ideal::order::Order;
//! use buckaroo_ideal::signature::RequestSignature;
//! use iso_currency::Currency;
//!
//! let config = Config::new("MERCHANT1", "SECRET1", Mode::Test);
//! let order = Order::new("EETNU-123", 100.0, Currency::EUR);
//!
//! let signature = RequestSignature::compute(&order, &config)?;
//! assert_eq!(signature.to_string().len(), 32);
//! # Ok::<(), buckaroo_ideal::SignatureError>(())
//! ```
pub mod config;
pub mod order;
pub mod signature;

use thiserror::Error;

pub use config::ModeParseError;
pub use signature::{
    SignatureError, SignatureField, ValidationError, ValidationIssue, ValidationKind,
};

/// Top-level error wrapper for crate operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Signature(#[from] signature::SignatureError),
    #[error(transparent)]
    ModeParse(#[from] config::ModeParseError),
}

#[cfg(test)]
mod tests {
    use super::Error;
    use crate::config::ModeParseError;
    use crate::signature::{
        SignatureError, SignatureField, ValidationError, ValidationIssue, ValidationKind,
    };

    #[test]
    fn error_conversions_cover_variants() {
        let signature_err = SignatureError::Validation(ValidationError::new(vec![
            ValidationIssue {
                field: SignatureField::SecretKey,
                kind: ValidationKind::Empty,
            },
        ]));
        let err: Error = signature_err.into();
        assert!(matches!(err, Error::Signature(_)));

        let err: Error = ModeParseError::Invalid {
            input: "sandbox".into(),
        }
        .into();
        assert!(matches!(err, Error::ModeParse(_)));
    }
}
