//! Request signature computation.
//!
//! Buckaroo validates every incoming iDEAL request by recomputing its
//! signature from the same material: the merchant key, the normalized
//! invoice number, the amount in cents, the currency code, the numeric
//! test-mode literal, and the shared secret key, concatenated in that order
//! with no separators and hashed with MD5. Any divergence from those
//! encodings makes the gateway reject the request, so the rules here are an
//! external contract rather than a local choice.
use crate::config::Config;
use crate::order::Order;
use md5::{Digest, Md5};
use std::fmt;
use std::fmt::Write;
use thiserror::Error;

/// Signature computation errors.
#[derive(Debug, Error)]
pub enum SignatureError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Structured validation error with field-level issues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("request signature validation failed")]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationError {
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }
}

/// Single validation issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: SignatureField,
    pub kind: ValidationKind,
}

#[non_exhaustive]
/// Field associated with a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureField {
    MerchantKey,
    SecretKey,
    InvoiceNumber,
    Amount,
}

#[non_exhaustive]
/// Classification of validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    Empty,
    InvalidFormat,
    OutOfRange,
}

/// Digital signature for an iDEAL payment request.
///
/// The signature proves to Buckaroo that a request originated from the
/// configured merchant and was not tampered with in transit. It is a pure
/// function of the order fields and merchant configuration: identical inputs
/// always produce the identical 32-character lowercase hex digest.
///
/// # Examples
/// ```rust
/// use buckaroo_ideal::config::{Config, Mode};
/// use buckaroo_ideal::order::Order;
/// use buckaroo_ideal::signature::RequestSignature;
/// use iso_currency::Currency;
///
/// let config = Config::new("MERCHANT1", "SECRET1", Mode::Test);
/// let order = Order::new("EETNU-123", 100.0, Currency::EUR);
///
/// let signature = RequestSignature::compute(&order, &config)?;
/// assert_eq!(signature.digest(), "2de040b9b19502508acda3e71d8d8a97");
/// # Ok::<(), buckaroo_ideal::SignatureError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSignature<'a> {
    order: &'a Order,
    digest: String,
}

impl<'a> RequestSignature<'a> {
    /// Validate the order and configuration, then compute the digest.
    ///
    /// All six signed fields are checked before any hashing happens. A
    /// missing field never ends up hashed as a placeholder; the gateway
    /// would reject the resulting digest without a diagnostic.
    ///
    /// # Errors
    /// Returns [`SignatureError::Validation`] listing every offending field
    /// when the merchant key, secret key, or invoice number is empty, or the
    /// amount is not finite or rounds to less than one cent.
    pub fn compute(order: &'a Order, config: &Config) -> Result<Self, SignatureError> {
        validate(order, config)?;

        let mut salt = String::new();
        salt.push_str(config.merchant_key());
        salt.push_str(&normalized_invoice_number(order.invoice_number()));
        let _ = write!(&mut salt, "{}", amount_in_cents(order.amount()));
        salt.push_str(order.currency().code());
        salt.push_str(config.mode().numeric_str());
        salt.push_str(config.secret_key());

        let digest = hash_to_lower_hex(salt.as_bytes());
        Ok(Self { order, digest })
    }

    /// The order this signature was computed from.
    pub fn order(&self) -> &Order {
        self.order
    }

    /// Lowercase hexadecimal MD5 digest, 32 characters.
    pub fn digest(&self) -> &str {
        &self.digest
    }
}

impl fmt::Display for RequestSignature<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digest)
    }
}

fn validate(order: &Order, config: &Config) -> Result<(), ValidationError> {
    let mut issues = Vec::new();

    if config.merchant_key().trim().is_empty() {
        issues.push(ValidationIssue {
            field: SignatureField::MerchantKey,
            kind: ValidationKind::Empty,
        });
    }
    if config.secret_key().trim().is_empty() {
        issues.push(ValidationIssue {
            field: SignatureField::SecretKey,
            kind: ValidationKind::Empty,
        });
    }
    if normalized_invoice_number(order.invoice_number()).is_empty() {
        issues.push(ValidationIssue {
            field: SignatureField::InvoiceNumber,
            kind: ValidationKind::Empty,
        });
    }
    if !order.amount().is_finite() {
        issues.push(ValidationIssue {
            field: SignatureField::Amount,
            kind: ValidationKind::InvalidFormat,
        });
    } else if amount_in_cents(order.amount()) <= 0 {
        // Sub-cent amounts round to zero cents and would be hashed as "0",
        // which the gateway rejects without a diagnostic.
        issues.push(ValidationIssue {
            field: SignatureField::Amount,
            kind: ValidationKind::OutOfRange,
        });
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(issues))
    }
}

/// Reduce an invoice number to the character set the gateway accepts:
/// ASCII letters and digits plus `-`, `.` and `_`. Everything else,
/// whitespace and non-ASCII included, is stripped. The gateway applies the
/// same reduction before recomputing the signature on its side.
fn normalized_invoice_number(invoice_number: &str) -> String {
    invoice_number
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_'))
        .collect()
}

/// Convert a major-unit amount to integer cents, rounding halves away from
/// zero as the gateway does.
fn amount_in_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

fn hash_to_lower_hex(bytes: &[u8]) -> String {
    let hash = Md5::digest(bytes);
    let mut hex = String::with_capacity(hash.len() * 2);
    for byte in hash {
        let _ = write!(&mut hex, "{:02x}", byte);
    }
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_keeps_safe_characters() {
        assert_eq!(normalized_invoice_number("EETNU-123"), "EETNU-123");
        assert_eq!(normalized_invoice_number("order_2024.01"), "order_2024.01");
    }

    #[test]
    fn normalization_strips_disallowed_characters() {
        assert_eq!(normalized_invoice_number("EETNU 123!"), "EETNU123");
        assert_eq!(normalized_invoice_number("fakturanr: #42"), "fakturanr42");
        assert_eq!(normalized_invoice_number("bestelling-β-7"), "bestelling--7");
    }

    #[test]
    fn cents_conversion_rounds_half_away_from_zero() {
        assert_eq!(amount_in_cents(100.0), 10000);
        assert_eq!(amount_in_cents(19.99), 1999);
        assert_eq!(amount_in_cents(0.01), 1);
        assert_eq!(amount_in_cents(2.675), 268);
    }

    #[test]
    fn lower_hex_rendering_is_32_chars() {
        let hex = hash_to_lower_hex(b"abc");
        assert_eq!(hex.len(), 32);
        assert_eq!(hex, hex.to_lowercase());
    }
}
