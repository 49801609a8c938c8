//! HandleGatewayWebhookHandler - authenticates and acknowledges gateway events.
//!
//! Deliveries are verified against the raw body before anything is parsed.
//! Captured payments are logged; reminders are settled through the checkout
//! verification path, so the webhook never writes to the store.

use crate::domain::payment::{GatewayEventType, SignatureVerifier, WebhookError};

#[derive(Debug, Clone)]
pub struct HandleGatewayWebhookCommand {
    /// Raw request body exactly as received.
    pub payload: Vec<u8>,
    /// Value of the `X-Razorpay-Signature` header.
    pub signature: Option<String>,
}

/// What the delivery turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookOutcome {
    PaymentCaptured {
        payment_id: String,
        order_id: Option<String>,
    },
    Acknowledged {
        event: String,
    },
}

pub struct HandleGatewayWebhookHandler {
    verifier: SignatureVerifier,
}

impl HandleGatewayWebhookHandler {
    pub fn new(verifier: SignatureVerifier) -> Self {
        Self { verifier }
    }

    pub fn handle(&self, cmd: HandleGatewayWebhookCommand) -> Result<WebhookOutcome, WebhookError> {
        let event = self
            .verifier
            .verify_webhook(&cmd.payload, cmd.signature.as_deref())
            .inspect_err(|e| tracing::warn!(error = %e, "Rejected gateway webhook"))?;

        if event.event_type() == GatewayEventType::PaymentCaptured {
            match event.payment_entity() {
                Some(payment) => {
                    tracing::info!(
                        payment_id = %payment.id,
                        order_id = ?payment.order_id,
                        "Payment captured"
                    );
                    return Ok(WebhookOutcome::PaymentCaptured {
                        payment_id: payment.id,
                        order_id: payment.order_id,
                    });
                }
                None => tracing::warn!("payment.captured event without a readable payment entity"),
            }
        } else {
            tracing::debug!(event = %event.event, "Ignoring gateway event");
        }

        Ok(WebhookOutcome::Acknowledged { event: event.event })
    }
}
