use futures::executor::block_on;

use super::*;
use crate::net::http::Http;
use crate::session::Session;

// =============================================================
// Rupee -> paise wire conversion
// =============================================================

#[test]
fn ten_rupees_transmits_as_one_thousand_paise() {
    let body = order_body("10").unwrap();
    assert_eq!(body.amount, 1000);
    assert_eq!(body.currency, "INR");
}

#[test]
fn two_decimal_amounts_transmit_exactly() {
    assert_eq!(order_body("19.99").unwrap().amount, 1999);
    assert_eq!(order_body("0.01").unwrap().amount, 1);
}

#[test]
fn malformed_amounts_fail_validation() {
    assert!(matches!(order_body("ten"), Err(ApiError::Validation(_))));
    assert!(matches!(order_body("0"), Err(ApiError::Validation(_))));
}

#[test]
fn order_body_serializes_minor_units() {
    let value = serde_json::to_value(order_body("12.50").unwrap()).unwrap();
    assert_eq!(value, serde_json::json!({"amount": 1250, "currency": "INR"}));
}

// =============================================================
// Verification proof
// =============================================================

#[test]
fn verify_rejects_blank_proof_fields() {
    let client = PaymentsClient::new(Http::new(Session::in_memory()));
    let proof = PaymentProof {
        order_id: "ord-1".to_owned(),
        payment_id: String::new(),
        signature: "sig".to_owned(),
    };
    assert!(matches!(block_on(client.verify_payment(&proof)), Err(ApiError::Validation(_))));
}

#[test]
fn proof_serializes_camel_case() {
    let proof = PaymentProof {
        order_id: "ord-1".to_owned(),
        payment_id: "pay-1".to_owned(),
        signature: "sig".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&proof).unwrap(),
        serde_json::json!({"orderId": "ord-1", "paymentId": "pay-1", "signature": "sig"})
    );
}
