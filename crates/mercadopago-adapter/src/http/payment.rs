/*
[INPUT]:  Payment requests and search filters
[OUTPUT]: Payment resources from the payments API
[POS]:    HTTP layer - payment endpoints
[UPDATE]: When adding new payment endpoints or changing response format
*/

use rust_decimal::Decimal;
use serde::Serialize;

use crate::http::client::{MercadoPagoClient, RequestOptions};
use crate::http::error::Result;
use crate::http::query;
use crate::types::{PaymentCreateRequest, PaymentResponse, PaymentSearchPage, SearchRequest};

const URL_PAYMENTS: &str = "/v1/payments";
const URL_PAYMENTS_SEARCH: &str = "/v1/payments/search";
const URL_PAYMENTS_WITH_ID: &str = "/v1/payments/:id";

#[derive(Serialize)]
struct CancelBody {
    status: &'static str,
}

#[derive(Serialize)]
struct CaptureBody {
    capture: bool,
    #[serde(with = "rust_decimal::serde::float_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    transaction_amount: Option<Decimal>,
}

impl MercadoPagoClient {
    /// Create a payment
    ///
    /// POST /v1/payments
    pub async fn create_payment(&self, request: PaymentCreateRequest) -> Result<PaymentResponse> {
        self.post(URL_PAYMENTS, &request, RequestOptions::new()).await
    }

    /// Get a payment by id
    ///
    /// GET /v1/payments/{id}
    pub async fn get_payment(&self, payment_id: i64) -> Result<PaymentResponse> {
        let options = RequestOptions::new().path_param("id", payment_id.to_string());
        self.get(URL_PAYMENTS_WITH_ID, options).await
    }

    /// Search payments through filters and pagination
    ///
    /// GET /v1/payments/search
    pub async fn search_payments(&self, request: SearchRequest) -> Result<PaymentSearchPage> {
        let endpoint = format!("{}?{}", URL_PAYMENTS_SEARCH, query::search_query(&request));
        self.get(&endpoint, RequestOptions::new()).await
    }

    /// Cancel a pending or in-process payment
    ///
    /// PUT /v1/payments/{id}
    pub async fn cancel_payment(&self, payment_id: i64) -> Result<PaymentResponse> {
        let options = RequestOptions::new().path_param("id", payment_id.to_string());
        let body = CancelBody {
            status: "cancelled",
        };
        self.put(URL_PAYMENTS_WITH_ID, &body, options).await
    }

    /// Capture an authorized payment for its full amount
    ///
    /// PUT /v1/payments/{id}
    pub async fn capture_payment(&self, payment_id: i64) -> Result<PaymentResponse> {
        self.capture(payment_id, None).await
    }

    /// Capture an authorized payment for part of its amount
    pub async fn capture_payment_partial(
        &self,
        payment_id: i64,
        amount: Decimal,
    ) -> Result<PaymentResponse> {
        self.capture(payment_id, Some(amount)).await
    }

    async fn capture(&self, payment_id: i64, amount: Option<Decimal>) -> Result<PaymentResponse> {
        let options = RequestOptions::new().path_param("id", payment_id.to_string());
        let body = CaptureBody {
            capture: true,
            transaction_amount: amount,
        };
        self.put(URL_PAYMENTS_WITH_ID, &body, options).await
    }
}
