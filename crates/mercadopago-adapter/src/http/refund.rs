/*
[INPUT]:  Payment identifiers and optional partial amounts
[OUTPUT]: Refund resources from the payments API
[POS]:    HTTP layer - refund endpoints
[UPDATE]: When adding new refund endpoints or changing response format
*/

use reqwest::Method;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::http::client::{MercadoPagoClient, RequestOptions};
use crate::http::error::Result;
use crate::types::RefundResponse;

const URL_REFUNDS: &str = "/v1/payments/:payment_id/refunds";
const URL_REFUNDS_WITH_ID: &str = "/v1/payments/:payment_id/refunds/:refund_id";

#[derive(Serialize)]
struct PartialRefundBody {
    #[serde(with = "rust_decimal::serde::float")]
    amount: Decimal,
}

impl MercadoPagoClient {
    /// Get a specific refund of a payment
    ///
    /// GET /v1/payments/{payment_id}/refunds/{refund_id}
    pub async fn get_refund(&self, payment_id: i64, refund_id: i64) -> Result<RefundResponse> {
        let options = RequestOptions::new()
            .path_param("payment_id", payment_id.to_string())
            .path_param("refund_id", refund_id.to_string());
        self.get(URL_REFUNDS_WITH_ID, options).await
    }

    /// List every refund of a payment
    ///
    /// GET /v1/payments/{payment_id}/refunds
    pub async fn list_refunds(&self, payment_id: i64) -> Result<Vec<RefundResponse>> {
        let options = RequestOptions::new().path_param("payment_id", payment_id.to_string());
        self.get(URL_REFUNDS, options).await
    }

    /// Refund a payment for its full amount
    ///
    /// POST /v1/payments/{payment_id}/refunds
    pub async fn create_refund(&self, payment_id: i64) -> Result<RefundResponse> {
        let options = RequestOptions::new().path_param("payment_id", payment_id.to_string());
        // full refunds carry no body
        self.execute(Method::POST, URL_REFUNDS, None::<&()>, options).await
    }

    /// Refund part of a payment's amount
    ///
    /// POST /v1/payments/{payment_id}/refunds
    pub async fn create_partial_refund(
        &self,
        payment_id: i64,
        amount: Decimal,
    ) -> Result<RefundResponse> {
        let options = RequestOptions::new().path_param("payment_id", payment_id.to_string());
        self.post(URL_REFUNDS, &PartialRefundBody { amount }, options).await
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::http::client::{ClientConfig, MercadoPagoClient};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> MercadoPagoClient {
        let config = Config::new("TEST-access-token").expect("config");
        MercadoPagoClient::with_config_and_base_url(config, ClientConfig::default(), &server.uri())
            .expect("client init")
    }

    fn refund_body(id: i64) -> serde_json::Value {
        json!({
            "id": id,
            "payment_id": 12344555,
            "amount": 50.0,
            "status": "approved",
            "refund_mode": "standard",
            "date_created": "2024-02-10T12:00:00Z",
            "source": {"id": "1003", "name": "Test Collector", "type": "collector"}
        })
    }

    #[tokio::test]
    async fn test_get_refund_resolves_both_placeholders() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("GET"))
            .and(path("/v1/payments/12344555/refunds/890"))
            .respond_with(ResponseTemplate::new(200).set_body_json(refund_body(890)))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let refund = client
            .get_refund(12344555, 890)
            .await
            .expect("get_refund failed");

        assert_eq!(refund.id, 890);
        assert_eq!(refund.payment_id, Some(12344555));
        assert_eq!(refund.amount, Some("50".parse().expect("amount")));
        assert_eq!(
            refund.source.as_ref().and_then(|source| source.r#type.as_deref()),
            Some("collector")
        );
    }

    #[tokio::test]
    async fn test_list_refunds() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("GET"))
            .and(path("/v1/payments/12344555/refunds"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([refund_body(890), refund_body(891)])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let refunds = client.list_refunds(12344555).await.expect("list_refunds failed");

        assert_eq!(refunds.len(), 2);
        assert_eq!(refunds[1].id, 891);
    }

    #[tokio::test]
    async fn test_create_refund_sends_no_body() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("POST"))
            .and(path("/v1/payments/12344555/refunds"))
            .respond_with(ResponseTemplate::new(201).set_body_json(refund_body(892)))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let refund = client
            .create_refund(12344555)
            .await
            .expect("create_refund failed");
        assert_eq!(refund.id, 892);
    }

    #[tokio::test]
    async fn test_create_partial_refund_sends_amount() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("POST"))
            .and(path("/v1/payments/12344555/refunds"))
            .and(body_json(json!({"amount": 25.5})))
            .respond_with(ResponseTemplate::new(201).set_body_json(refund_body(893)))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let refund = client
            .create_partial_refund(12344555, "25.5".parse().expect("amount"))
            .await
            .expect("create_partial_refund failed");
        assert_eq!(refund.id, 893);
    }
}
