/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::OperatingMode;
use super::models::{
    Device, Paging, Payer, PaymentIntentAdditionalInfo, PaymentIntentPayment, PreferenceBackUrls,
    PreferenceItem, PreferencePayer, PreferencePaymentMethods, PreferenceShipments, RefundSource,
};

/// A payment as returned by the payments API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentResponse {
    pub id: i64,
    pub status: Option<String>,
    pub status_detail: Option<String>,
    pub operation_type: Option<String>,
    pub description: Option<String>,
    pub external_reference: Option<String>,
    pub currency_id: Option<String>,
    pub payment_method_id: Option<String>,
    pub payment_type_id: Option<String>,
    pub installments: Option<u32>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub transaction_amount: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub transaction_amount_refunded: Option<Decimal>,
    pub captured: Option<bool>,
    pub binary_mode: Option<bool>,
    pub live_mode: Option<bool>,
    pub date_created: Option<DateTime<Utc>>,
    pub date_approved: Option<DateTime<Utc>>,
    pub date_last_updated: Option<DateTime<Utc>>,
    pub money_release_date: Option<DateTime<Utc>>,
    pub payer: Option<Payer>,
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
    pub refunds: Option<Vec<RefundResponse>>,
}

/// One page of payment search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentSearchPage {
    pub paging: Paging,
    pub results: Vec<PaymentResponse>,
}

/// A checkout preference as returned by the preferences API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceResponse {
    pub id: String,
    pub init_point: Option<String>,
    pub sandbox_init_point: Option<String>,
    pub client_id: Option<String>,
    pub collector_id: Option<i64>,
    pub operation_type: Option<String>,
    pub additional_info: Option<String>,
    pub auto_return: Option<String>,
    pub external_reference: Option<String>,
    pub marketplace: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub marketplace_fee: Option<Decimal>,
    pub notification_url: Option<String>,
    pub statement_descriptor: Option<String>,
    pub binary_mode: Option<bool>,
    pub expires: Option<bool>,
    pub date_created: Option<DateTime<Utc>>,
    pub date_of_expiration: Option<DateTime<Utc>>,
    pub expiration_date_from: Option<DateTime<Utc>>,
    pub expiration_date_to: Option<DateTime<Utc>>,
    pub back_urls: Option<PreferenceBackUrls>,
    pub payer: Option<PreferencePayer>,
    pub payment_methods: Option<PreferencePaymentMethods>,
    pub shipments: Option<PreferenceShipments>,
    pub items: Option<Vec<PreferenceItem>>,
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

/// One page of preference search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceSearchPage {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub next_offset: u32,
    pub elements: Vec<PreferenceSearchResult>,
}

/// A slim preference projection returned by the search endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceSearchResult {
    pub id: String,
    pub client_id: Option<String>,
    pub collector_id: Option<i64>,
    pub external_reference: Option<String>,
    pub expires: Option<bool>,
    pub date_created: Option<DateTime<Utc>>,
    pub items: Option<Vec<String>>,
}

/// A refund of a payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefundResponse {
    pub id: i64,
    pub payment_id: Option<i64>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub amount: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub adjustment_amount: Option<Decimal>,
    pub status: Option<String>,
    pub refund_mode: Option<String>,
    pub reason: Option<String>,
    pub unique_sequence_number: Option<String>,
    pub date_created: Option<DateTime<Utc>>,
    pub source: Option<RefundSource>,
}

/// A payment intent opened on a Point device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentIntentResponse {
    pub id: String,
    pub device_id: Option<String>,
    pub amount: i64,
    pub state: Option<String>,
    pub additional_info: Option<PaymentIntentAdditionalInfo>,
    pub payment: Option<PaymentIntentPayment>,
}

/// Acknowledgement of a cancelled payment intent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentIntentCancelResponse {
    pub id: String,
}

/// Devices registered to the account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevicesResponse {
    pub devices: Vec<Device>,
    pub paging: Option<Paging>,
}

/// Operating mode reported after a device update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingModeResponse {
    pub operating_mode: OperatingMode,
}
