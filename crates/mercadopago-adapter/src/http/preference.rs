/*
[INPUT]:  Checkout preference requests and search filters
[OUTPUT]: Preference resources from the checkout API
[POS]:    HTTP layer - checkout preference endpoints
[UPDATE]: When adding new preference endpoints or changing response format
*/

use crate::http::client::{MercadoPagoClient, RequestOptions};
use crate::http::error::Result;
use crate::http::query;
use crate::types::{PreferenceRequest, PreferenceResponse, PreferenceSearchPage, SearchRequest};

const URL_PREFERENCES: &str = "/checkout/preferences";
const URL_PREFERENCES_SEARCH: &str = "/checkout/preferences/search";
const URL_PREFERENCES_WITH_ID: &str = "/checkout/preferences/:id";

impl MercadoPagoClient {
    /// Create a checkout preference and obtain the URL that starts the
    /// payment flow
    ///
    /// POST /checkout/preferences
    pub async fn create_preference(&self, request: PreferenceRequest) -> Result<PreferenceResponse> {
        self.post(URL_PREFERENCES, &request, RequestOptions::new()).await
    }

    /// Get a preference by id
    ///
    /// GET /checkout/preferences/{id}
    pub async fn get_preference(&self, preference_id: &str) -> Result<PreferenceResponse> {
        let options = RequestOptions::new().path_param("id", preference_id);
        self.get(URL_PREFERENCES_WITH_ID, options).await
    }

    /// Update an existing preference
    ///
    /// PUT /checkout/preferences/{id}
    pub async fn update_preference(
        &self,
        preference_id: &str,
        request: PreferenceRequest,
    ) -> Result<PreferenceResponse> {
        let options = RequestOptions::new().path_param("id", preference_id);
        self.put(URL_PREFERENCES_WITH_ID, &request, options).await
    }

    /// Search preferences through filters and pagination
    ///
    /// GET /checkout/preferences/search
    pub async fn search_preferences(&self, request: SearchRequest) -> Result<PreferenceSearchPage> {
        let endpoint = format!("{}?{}", URL_PREFERENCES_SEARCH, query::search_query(&request));
        self.get(&endpoint, RequestOptions::new()).await
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::http::client::{ClientConfig, MercadoPagoClient};
    use crate::types::{PreferenceItem, PreferenceRequest, SearchRequest};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> MercadoPagoClient {
        let config = Config::new("TEST-access-token").expect("config");
        MercadoPagoClient::with_config_and_base_url(config, ClientConfig::default(), &server.uri())
            .expect("client init")
    }

    #[tokio::test]
    async fn test_create_preference() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("POST"))
            .and(path("/checkout/preferences"))
            .and(body_json(json!({
                "external_reference": "order-12",
                "items": [{"title": "Coffee", "quantity": 1, "unit_price": 9.5}]
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "pref-1",
                "init_point": "https://www.mercadopago.com/init/pref-1",
                "external_reference": "order-12",
                "items": [{"title": "Coffee", "quantity": 1, "unit_price": 9.5}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let request = PreferenceRequest {
            external_reference: Some("order-12".to_string()),
            items: Some(vec![PreferenceItem {
                title: Some("Coffee".to_string()),
                quantity: Some(1),
                unit_price: Some("9.5".parse().expect("unit_price")),
                ..Default::default()
            }]),
            ..Default::default()
        };

        let response = client
            .create_preference(request)
            .await
            .expect("create_preference failed");

        assert_eq!(response.id, "pref-1");
        assert_eq!(
            response.init_point.as_deref(),
            Some("https://www.mercadopago.com/init/pref-1")
        );
    }

    #[tokio::test]
    async fn test_get_preference_resolves_id_template() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("GET"))
            .and(path("/checkout/preferences/123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "123",
                "external_reference": "order-12"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let response = client
            .get_preference("123")
            .await
            .expect("get_preference failed");

        assert_eq!(response.id, "123");
        assert_eq!(response.external_reference.as_deref(), Some("order-12"));
    }

    #[tokio::test]
    async fn test_update_preference() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("PUT"))
            .and(path("/checkout/preferences/pref-1"))
            .and(body_json(json!({"external_reference": "order-13"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "pref-1",
                "external_reference": "order-13"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let request = PreferenceRequest {
            external_reference: Some("order-13".to_string()),
            ..Default::default()
        };

        let response = client
            .update_preference("pref-1", request)
            .await
            .expect("update_preference failed");

        assert_eq!(response.external_reference.as_deref(), Some("order-13"));
    }

    #[tokio::test]
    async fn test_search_preferences() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("GET"))
            .and(path("/checkout/preferences/search"))
            .and(query_param("limit", "10"))
            .and(query_param("offset", "20"))
            .and(query_param("external_reference", "order-12"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "total": 1,
                "next_offset": 21,
                "elements": [{
                    "id": "pref-1",
                    "external_reference": "order-12",
                    "expires": false,
                    "items": ["Coffee"]
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let request = SearchRequest {
            limit: Some(10),
            offset: Some(20),
            filters: [("external_reference".to_string(), "order-12".to_string())]
                .into_iter()
                .collect(),
        };

        let page = client
            .search_preferences(request)
            .await
            .expect("search_preferences failed");

        assert_eq!(page.total, 1);
        assert_eq!(page.elements.len(), 1);
        assert_eq!(page.elements[0].id, "pref-1");
        assert_eq!(page.elements[0].items, Some(vec!["Coffee".to_string()]));
    }
}
