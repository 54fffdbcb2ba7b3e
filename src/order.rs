//! Order value type consumed by the signature calculator.
use iso_currency::Currency;
use serde::{Deserialize, Serialize};

/// The fields of a payment request that participate in its signature.
///
/// Amounts are in major currency units (`100.0` is EUR 100.00); conversion to
/// the gateway's integer-cents representation happens during signing. The
/// currency is typed, so an order can never carry an unset or unknown
/// currency code.
///
/// # Examples
/// ```rust
/// use buckaroo_ideal::order::Order;
/// use iso_currency::Currency;
///
/// let order = Order::new("EETNU-123", 100.0, Currency::EUR);
/// assert_eq!(order.invoice_number(), "EETNU-123");
/// assert_eq!(order.currency().code(), "EUR");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    invoice_number: String,
    amount: f64,
    currency: Currency,
}

impl Order {
    pub fn new(invoice_number: impl Into<String>, amount: f64, currency: Currency) -> Self {
        Self {
            invoice_number: invoice_number.into(),
            amount,
            currency,
        }
    }

    pub fn invoice_number(&self) -> &str {
        &self.invoice_number
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }
}
