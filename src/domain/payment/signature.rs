//! Razorpay signature verification.
//!
//! Razorpay signs two things with HMAC-SHA256, hex encoded:
//!
//! - checkout results: `"{order_id}|{payment_id}"` with the key secret
//! - webhook deliveries: the raw request body with the webhook secret
//!
//! Supplied signatures must equal the lowercase hex digest exactly; the
//! comparison runs in constant time.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::gateway_event::GatewayEvent;
use super::webhook_errors::WebhookError;

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 signer/verifier bound to one shared secret.
#[derive(Clone)]
pub struct SignatureVerifier {
    secret: String,
}

impl std::fmt::Debug for SignatureVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignatureVerifier").finish_non_exhaustive()
    }
}

impl SignatureVerifier {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Hex-encoded HMAC-SHA256 of `message`.
    pub fn sign(&self, message: &[u8]) -> String {
        hex::encode(self.compute(message))
    }

    /// Signs a checkout result the way Razorpay does.
    pub fn sign_payment(&self, order_id: &str, payment_id: &str) -> String {
        self.sign(payment_message(order_id, payment_id).as_bytes())
    }

    /// Checks a checkout signature over `order_id|payment_id`.
    pub fn verify_payment(&self, order_id: &str, payment_id: &str, signature: &str) -> bool {
        self.matches(payment_message(order_id, payment_id).as_bytes(), signature)
    }

    /// Verifies a webhook delivery and parses its event.
    ///
    /// # Errors
    ///
    /// - `MissingSignature` - no signature header was sent
    /// - `InvalidSignature` - signature does not cover `payload`
    /// - `ParseError` - signature valid but the body is not a JSON event
    pub fn verify_webhook(
        &self,
        payload: &[u8],
        signature: Option<&str>,
    ) -> Result<GatewayEvent, WebhookError> {
        let signature = signature
            .filter(|s| !s.trim().is_empty())
            .ok_or(WebhookError::MissingSignature)?;

        if !self.matches(payload, signature) {
            return Err(WebhookError::InvalidSignature);
        }

        serde_json::from_slice(payload).map_err(|e| WebhookError::ParseError(e.to_string()))
    }

    fn matches(&self, message: &[u8], signature: &str) -> bool {
        let expected = hex::encode(self.compute(message));
        constant_time_compare(expected.as_bytes(), signature.as_bytes())
    }

    fn compute(&self, message: &[u8]) -> Vec<u8> {
        // HMAC accepts keys of any length, so this only fails on a broken build.
        match HmacSha256::new_from_slice(self.secret.as_bytes()) {
            Ok(mut mac) => {
                mac.update(message);
                mac.finalize().into_bytes().to_vec()
            }
            Err(_) => Vec::new(),
        }
    }
}

fn payment_message(order_id: &str, payment_id: &str) -> String {
    format!("{}|{}", order_id, payment_id)
}

fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.is_empty() || a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY_SECRET: &str = "rzp_test_secret";

    // ══════════════════════════════════════════════════════════════
    // Checkout signatures
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn known_vector_matches() {
        // echo -n "order_1|pay_1" | openssl dgst -sha256 -hmac "secret"
        let verifier = SignatureVerifier::new("secret");
        let signature = verifier.sign_payment("order_1", "pay_1");

        assert_eq!(
            signature,
            "52115a0d3400de9e86aade1f1b6eba9e8974604f4e267a9e9a16633a4c8dd2cb"
        );
        assert!(verifier.verify_payment("order_1", "pay_1", &signature));
    }

    #[test]
    fn signature_must_match_exactly() {
        let verifier = SignatureVerifier::new(KEY_SECRET);
        let signature = verifier.sign_payment("order_A", "pay_B");

        assert!(!verifier.verify_payment("order_A", "pay_B", &signature.to_uppercase()));
        assert!(!verifier.verify_payment("order_A", "pay_B", &format!("  {}  ", signature)));
        assert!(!verifier.verify_payment("order_A", "pay_B", &format!("{}\n", signature)));
    }

    #[test]
    fn padded_webhook_signature_is_rejected() {
        let verifier = SignatureVerifier::new("whsec");
        let body = br#"{"event":"order.paid"}"#;
        let signature = format!(" {} ", verifier.sign(body));

        assert!(matches!(
            verifier.verify_webhook(body, Some(&signature)),
            Err(WebhookError::InvalidSignature)
        ));
    }

    #[test]
    fn signature_for_other_payment_is_rejected() {
        let verifier = SignatureVerifier::new(KEY_SECRET);
        let signature = verifier.sign_payment("order_A", "pay_B");

        assert!(!verifier.verify_payment("order_A", "pay_C", &signature));
    }

    #[test]
    fn signature_from_other_secret_is_rejected() {
        let signature = SignatureVerifier::new("other").sign_payment("order_A", "pay_B");

        assert!(!SignatureVerifier::new(KEY_SECRET).verify_payment("order_A", "pay_B", &signature));
    }

    #[test]
    fn non_hex_signature_is_rejected() {
        let verifier = SignatureVerifier::new(KEY_SECRET);
        assert!(!verifier.verify_payment("order_A", "pay_B", "not-hex"));
        assert!(!verifier.verify_payment("order_A", "pay_B", ""));
    }

    // ══════════════════════════════════════════════════════════════
    // Webhook signatures
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn webhook_with_valid_signature_parses() {
        let verifier = SignatureVerifier::new("whsec");
        let body = br#"{"event":"payment.captured","payload":{"payment":{"entity":{"id":"pay_1","order_id":"order_1"}}}}"#;
        let signature = verifier.sign(body);

        let event = verifier.verify_webhook(body, Some(&signature)).unwrap();

        assert_eq!(event.event, "payment.captured");
    }

    #[test]
    fn webhook_signature_covers_exact_bytes() {
        let verifier = SignatureVerifier::new("whsec");
        let signed = br#"{"event":"payment.captured"}"#;
        let reformatted = br#"{ "event": "payment.captured" }"#;
        let signature = verifier.sign(signed);

        let result = verifier.verify_webhook(reformatted, Some(&signature));

        assert!(matches!(result, Err(WebhookError::InvalidSignature)));
    }

    #[test]
    fn webhook_without_signature_is_rejected() {
        let verifier = SignatureVerifier::new("whsec");

        assert!(matches!(
            verifier.verify_webhook(b"{}", None),
            Err(WebhookError::MissingSignature)
        ));
        assert!(matches!(
            verifier.verify_webhook(b"{}", Some("  ")),
            Err(WebhookError::MissingSignature)
        ));
    }

    #[test]
    fn signed_non_json_body_is_a_parse_error() {
        let verifier = SignatureVerifier::new("whsec");
        let body = b"not json";
        let signature = verifier.sign(body);

        assert!(matches!(
            verifier.verify_webhook(body, Some(&signature)),
            Err(WebhookError::ParseError(_))
        ));
    }

    #[test]
    fn constant_time_compare_rejects_length_mismatch() {
        assert!(!constant_time_compare(&[1, 2, 3], &[1, 2]));
        assert!(constant_time_compare(&[1, 2, 3], &[1, 2, 3]));
    }
}
