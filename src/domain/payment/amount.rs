//! Checkout amounts.

use serde_json::Value;

use crate::domain::foundation::ValidationError;

/// A positive amount in major currency units (rupees for INR).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaymentAmount(f64);

impl PaymentAmount {
    /// Accepts a positive finite number, or a string holding one.
    ///
    /// # Errors
    ///
    /// `InvalidFormat` on `amount` for anything else, including zero.
    pub fn new(amount: f64) -> Result<Self, ValidationError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ValidationError::invalid_format("amount", "Invalid amount"));
        }
        Ok(Self(amount))
    }

    /// Parses the `amount` field of a request body.
    pub fn from_json(value: Option<&Value>) -> Result<Self, ValidationError> {
        let amount = value
            .and_then(lenient_number)
            .ok_or_else(|| ValidationError::invalid_format("amount", "Invalid amount"))?;
        Self::new(amount)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Amount in minor units (paise), rounded to the nearest unit.
    pub fn to_minor_units(&self) -> i64 {
        (self.0 * 100.0).round() as i64
    }
}

/// Reads a JSON number, or a string that parses as one.
pub fn lenient_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}
