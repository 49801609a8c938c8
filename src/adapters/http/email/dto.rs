//! HTTP DTOs for email endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a sweep request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SendDueRemindersRequest {
    #[serde(default, rename = "daysAhead")]
    pub days_ahead: Option<Value>,
}

impl SendDueRemindersRequest {
    /// Reads a request body leniently; an empty or non-JSON body is an empty request.
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    /// `daysAhead` when it is a JSON number; anything else falls back to the default.
    pub fn days_ahead(&self) -> Option<i64> {
        match self.days_ahead.as_ref()? {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SendDueRemindersResponse {
    pub success: bool,
    pub sent: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SendTestEmailRequest {
    #[serde(default)]
    pub to: Option<String>,
}
