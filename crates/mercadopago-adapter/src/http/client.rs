/*
[INPUT]:  HTTP configuration (base URL, timeouts, credentials)
[OUTPUT]: Typed API results from the shared request pipeline
[POS]:    HTTP layer - core client and request executor
[UPDATE]: When adding connection options or changing request dispatch
*/

use std::collections::HashMap;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use uuid::Uuid;

use crate::config::Config;
use crate::http::error::{MercadoPagoError, Result};
use crate::http::path::PathTemplate;

/// Base URL for the Mercado Pago API
const API_BASE_URL: &str = "https://api.mercadopago.com";

/// Idempotency header generated for mutating requests
const IDEMPOTENCY_HEADER: &str = "X-Idempotency-Key";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Per-request customization: path parameters and extra headers
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    path_params: HashMap<String, String>,
    headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply a value for a `:name` placeholder in the endpoint template
    pub fn path_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_params.insert(name.into(), value.into());
        self
    }

    /// Attach an extra header to the request
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    fn has_header(&self, name: &str) -> bool {
        self.headers
            .iter()
            .any(|(header, _)| header.eq_ignore_ascii_case(name))
    }
}

/// Main HTTP client for the Mercado Pago API
#[derive(Debug)]
pub struct MercadoPagoClient {
    http_client: Client,
    base_url: Url,
    config: Config,
}

impl MercadoPagoClient {
    /// Create a new client with default configuration
    pub fn new(config: Config) -> Result<Self> {
        Self::with_config(config, ClientConfig::default())
    }

    /// Create a new client with custom timeouts
    pub fn with_config(config: Config, client_config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, client_config, API_BASE_URL)
    }

    /// Create a new client against a custom base URL (tests, mock servers)
    pub fn with_config_and_base_url(
        config: Config,
        client_config: ClientConfig,
        base_url: &str,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(client_config.timeout)
            .connect_timeout(client_config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// GET an endpoint and decode the JSON response
    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T> {
        self.execute(Method::GET, endpoint, None::<&()>, options).await
    }

    /// POST a JSON body and decode the JSON response
    pub async fn post<T, B>(&self, endpoint: &str, body: &B, options: RequestOptions) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(Method::POST, endpoint, Some(body), options).await
    }

    /// PUT a JSON body and decode the JSON response
    pub async fn put<T, B>(&self, endpoint: &str, body: &B, options: RequestOptions) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(Method::PUT, endpoint, Some(body), options).await
    }

    /// PATCH a JSON body and decode the JSON response
    pub async fn patch<T, B>(&self, endpoint: &str, body: &B, options: RequestOptions) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(Method::PATCH, endpoint, Some(body), options).await
    }

    /// DELETE an endpoint and decode the JSON response
    pub async fn delete<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T> {
        self.execute(Method::DELETE, endpoint, None::<&()>, options).await
    }

    /// Shared request pipeline: resolve the endpoint template, attach
    /// headers and body, send, and decode the response.
    pub(crate) async fn execute<T, B>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
        options: RequestOptions,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let resolved = PathTemplate::new(endpoint).resolve(&options.path_params)?;
        let url = self.base_url.join(&resolved)?;
        debug!(method = %method, url = %url, "dispatching request");

        let mut builder = self.http_client.request(method.clone(), url);
        builder = self.apply_headers(builder, &method, &options);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        self.send_json(builder).await
    }

    fn apply_headers(
        &self,
        mut builder: RequestBuilder,
        method: &Method,
        options: &RequestOptions,
    ) -> RequestBuilder {
        builder = builder.bearer_auth(self.config.access_token());

        if let Some(corporation_id) = self.config.corporation_id() {
            builder = builder.header("X-Corporation-Id", corporation_id);
        }
        if let Some(integrator_id) = self.config.integrator_id() {
            builder = builder.header("X-Integrator-Id", integrator_id);
        }
        if let Some(platform_id) = self.config.platform_id() {
            builder = builder.header("X-Platform-Id", platform_id);
        }

        for (name, value) in &options.headers {
            builder = builder.header(name, value);
        }

        // The platform expects an idempotency key on mutating verbs; a
        // caller-supplied header wins over the generated one.
        if is_mutating(method) && !options.has_header(IDEMPOTENCY_HEADER) {
            builder = builder.header(IDEMPOTENCY_HEADER, Uuid::new_v4().to_string());
        }

        builder
    }

    /// Send the request and decode the JSON response body, mapping non-2xx
    /// responses to the platform's structured error
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            debug!(status = status.as_u16(), "api request failed");
            return Err(MercadoPagoError::from_error_body(status, &body));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

fn is_mutating(method: &Method) -> bool {
    *method == Method::POST || *method == Method::PUT || *method == Method::PATCH
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::assert_ok;

    fn test_config() -> Config {
        Config::new("TEST-access-token").expect("config")
    }

    #[test]
    fn test_client_creation() {
        let _client = assert_ok!(MercadoPagoClient::new(test_config()));
    }

    #[test]
    fn test_client_with_config() {
        let client_config = ClientConfig::default();
        assert_eq!(client_config.timeout, Duration::from_secs(30));
        assert_eq!(client_config.connect_timeout, Duration::from_secs(10));
        let _client = assert_ok!(MercadoPagoClient::with_config(test_config(), client_config));
    }

    #[test]
    fn test_client_rejects_invalid_base_url() {
        let result = MercadoPagoClient::with_config_and_base_url(
            test_config(),
            ClientConfig::default(),
            "not a url",
        );
        assert!(matches!(result, Err(MercadoPagoError::UrlParse(_))));
    }

    #[test]
    fn test_request_options_header_lookup_is_case_insensitive() {
        let options = RequestOptions::new().header("x-idempotency-key", "fixed");
        assert!(options.has_header("X-Idempotency-Key"));
    }

    #[test]
    fn test_mutating_verbs() {
        assert!(is_mutating(&Method::POST));
        assert!(is_mutating(&Method::PUT));
        assert!(is_mutating(&Method::PATCH));
        assert!(!is_mutating(&Method::GET));
        assert!(!is_mutating(&Method::DELETE));
    }
}
