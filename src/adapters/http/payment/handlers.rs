//! HTTP handlers for payment endpoints.

use axum::body::Bytes;
use axum::extract::{Json, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::adapters::http::error::ReminderApiError;
use crate::adapters::http::extract::JsonBody;
use crate::adapters::http::reminder::ReminderResponse;
use crate::adapters::http::state::AppState;
use crate::application::handlers::payment::HandleGatewayWebhookCommand;

use super::dto::{
    CreateOrderRequest, CreateOrderResponse, DemoSuccessRequest, PaymentUpdateResponse, VerifyPaymentRequest,
};
use super::SIGNATURE_HEADER;

/// POST /api/payments/create-order - Open a checkout order
pub async fn create_order(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateOrderRequest>,
) -> Result<impl IntoResponse, ReminderApiError> {
    let result = state
        .create_order_handler()
        .handle(req.into())
        .await
        .map_err(|e| ReminderApiError::from(e).with_failure_message("Failed to create order"))?;

    Ok(Json(CreateOrderResponse {
        success: true,
        order: result.order,
        key: result.key_id,
    }))
}

/// POST /api/payments/verify - Verify a checkout signature and settle the reminder
pub async fn verify_payment(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<VerifyPaymentRequest>,
) -> Result<impl IntoResponse, ReminderApiError> {
    let result = state
        .verify_payment_handler()
        .handle(req.into())
        .await
        .map_err(|e| ReminderApiError::from(e).with_failure_message("Verification failed"))?;

    Ok(Json(PaymentUpdateResponse {
        success: true,
        validated: Some(true),
        updated: ReminderResponse::from(result.reminder),
    }))
}

/// POST /api/payments/demo-success - Mark a reminder paid without the gateway
pub async fn demo_success(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<DemoSuccessRequest>,
) -> Result<impl IntoResponse, ReminderApiError> {
    let result = state
        .confirm_demo_payment_handler()
        .handle(req.into())
        .await
        .map_err(|e| ReminderApiError::from(e).with_failure_message("Demo payment failed"))?;

    Ok(Json(PaymentUpdateResponse {
        success: true,
        validated: None,
        updated: ReminderResponse::from(result.reminder),
    }))
}

/// POST /api/payments/webhook - Gateway webhook intake
///
/// Takes the raw body; the signature covers the exact bytes sent.
pub async fn handle_webhook(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let cmd = HandleGatewayWebhookCommand {
        payload: body.to_vec(),
        signature,
    };

    match state.webhook_handler().handle(cmd) {
        Ok(_) => Json(json!({ "status": "ok" })).into_response(),
        Err(e) => (e.status_code(), e.to_string()).into_response(),
    }
}

