/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::OperatingMode;
use super::models::{
    DifferentialPricing, Payer, PaymentIntentAdditionalInfo, PaymentIntentPayment,
    PreferenceBackUrls, PreferenceItem, PreferencePayer, PreferencePaymentMethods,
    PreferenceShipments, PreferenceTax, PreferenceTrack,
};

/// Parameters to create a payment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentCreateRequest {
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installments: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binary_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_expiration: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer: Option<Payer>,
}

/// Parameters to create or update a checkout preference
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferenceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_return: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketplace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binary_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires: Option<bool>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketplace_fee: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_modes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_expiration: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date_from: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date_to: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_urls: Option<PreferenceBackUrls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub differential_pricing: Option<DifferentialPricing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer: Option<PreferencePayer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_methods: Option<PreferencePaymentMethods>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipments: Option<PreferenceShipments>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<PreferenceItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxes: Option<Vec<PreferenceTax>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracks: Option<Vec<PreferenceTrack>>,
}

/// Parameters to open a payment intent on a Point device.
///
/// `amount` is in the currency's minor unit (cents).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentIntentRequest {
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<PaymentIntentAdditionalInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<PaymentIntentPayment>,
}

/// Parameters to switch a Point device's operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingModeRequest {
    pub operating_mode: OperatingMode,
}

/// Filters and pagination for search endpoints.
///
/// Turned into a query string before dispatch; never serialized as JSON.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchRequest {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub filters: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_optional_fields_are_absent_when_unset() {
        let request = PreferenceRequest {
            external_reference: Some("ref-1".to_string()),
            ..Default::default()
        };

        let serialized = serde_json::to_value(&request).expect("serialize");
        assert_eq!(serialized, json!({"external_reference": "ref-1"}));
    }

    #[test]
    fn test_payment_intent_request_minimal_body() {
        let request = PaymentIntentRequest {
            amount: 1500,
            ..Default::default()
        };

        let serialized = serde_json::to_value(&request).expect("serialize");
        assert_eq!(serialized, json!({"amount": 1500}));
    }

    #[test]
    fn test_nested_objects_serialize_with_snake_case_keys() {
        let request = PreferenceRequest {
            back_urls: Some(PreferenceBackUrls {
                success: Some("https://shop.test/ok".to_string()),
                ..Default::default()
            }),
            items: Some(vec![PreferenceItem {
                title: Some("Coffee".to_string()),
                quantity: Some(2),
                unit_price: Some("12.5".parse().expect("unit_price")),
                ..Default::default()
            }]),
            ..Default::default()
        };

        let serialized = serde_json::to_value(&request).expect("serialize");
        assert_eq!(
            serialized,
            json!({
                "back_urls": {"success": "https://shop.test/ok"},
                "items": [{"title": "Coffee", "quantity": 2, "unit_price": 12.5}]
            })
        );
    }
}
