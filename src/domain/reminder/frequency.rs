//! Reminder recurrence frequency.
//!
//! Only the field is persisted; nothing advances a paid reminder to its next
//! occurrence.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// How often a bill recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    OneTime,
    #[default]
    Monthly,
    Quarterly,
    Yearly,
}

impl Frequency {
    /// Returns the stored/wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::OneTime => "one-time",
            Frequency::Monthly => "monthly",
            Frequency::Quarterly => "quarterly",
            Frequency::Yearly => "yearly",
        }
    }
}

impl FromStr for Frequency {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "one-time" => Ok(Frequency::OneTime),
            "monthly" => Ok(Frequency::Monthly),
            "quarterly" => Ok(Frequency::Quarterly),
            "yearly" => Ok(Frequency::Yearly),
            other => Err(ValidationError::invalid_format(
                "frequency",
                format!("unknown frequency '{}'", other),
            )),
        }
    }
}
