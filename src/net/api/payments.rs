//! Payment-gateway order endpoints.
//!
//! The gateway checkout itself is an external collaborator; this client only
//! creates orders ahead of checkout and verifies the gateway's signature
//! afterwards. Amounts are transmitted in paise (rupees x 100).

#[cfg(test)]
#[path = "payments_test.rs"]
mod payments_test;

use serde::{Deserialize, Serialize};

use crate::net::error::{ApiError, ApiResult, require_id};
use crate::net::http::Http;
use crate::net::types::PaymentOrder;
use crate::util::money;

#[derive(Debug, Serialize)]
struct OrderBody {
    /// Paise.
    amount: u64,
    currency: &'static str,
}

/// Gateway callback fields handed back after checkout.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentProof {
    pub order_id: String,
    pub payment_id: String,
    pub signature: String,
}

#[derive(Debug, Deserialize)]
struct VerifiedFlag {
    verified: bool,
}

/// Build the order body from a user-entered rupee amount.
///
/// # Errors
///
/// `ApiError::Validation` when the amount is malformed, zero, or more
/// precise than one paisa.
fn order_body(amount_rupees: &str) -> ApiResult<OrderBody> {
    let paise = money::parse_rupees_to_paise(amount_rupees)
        .map_err(|msg| ApiError::Validation(msg.to_owned()))?;
    Ok(OrderBody { amount: paise, currency: "INR" })
}

#[derive(Clone)]
pub struct PaymentsClient {
    http: Http,
}

impl PaymentsClient {
    pub(crate) fn new(http: Http) -> Self {
        Self { http }
    }

    /// Create a gateway order for a rupee amount entered by the donor.
    pub async fn create_order(&self, amount_rupees: &str) -> ApiResult<PaymentOrder> {
        let body = order_body(amount_rupees)?;
        self.http.post_auth("/api/payment/create", &body).await
    }

    /// Ask the backend to check the gateway signature for a completed
    /// checkout.
    pub async fn verify_payment(&self, proof: &PaymentProof) -> ApiResult<bool> {
        require_id("orderId", &proof.order_id)?;
        require_id("paymentId", &proof.payment_id)?;
        require_id("signature", &proof.signature)?;
        let flag: VerifiedFlag = self.http.post_auth("/api/payment/verify", proof).await?;
        Ok(flag.verified)
    }
}
