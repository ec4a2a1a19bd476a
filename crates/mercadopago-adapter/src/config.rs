/*
[INPUT]:  Access token and platform integration identifiers
[OUTPUT]: Immutable configuration shared by every client call
[POS]:    Configuration layer - credentials and integration headers
[UPDATE]: When the platform adds new integration headers
*/

use crate::http::error::{MercadoPagoError, Result};

/// Configuration for the Mercado Pago API.
///
/// Immutable after construction; `Clone` and safe to share across
/// concurrently issued calls.
#[derive(Debug, Clone)]
pub struct Config {
    access_token: String,
    corporation_id: Option<String>,
    integrator_id: Option<String>,
    platform_id: Option<String>,
}

impl Config {
    /// Create a configuration from an access token.
    ///
    /// The token is sent as `Authorization: Bearer <token>` on every request.
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        let access_token = access_token.into();
        if access_token.trim().is_empty() {
            return Err(MercadoPagoError::Config(
                "access token must not be empty".to_string(),
            ));
        }

        Ok(Self {
            access_token,
            corporation_id: None,
            integrator_id: None,
            platform_id: None,
        })
    }

    /// Set the corporation identifier (sent as `X-Corporation-Id`)
    pub fn with_corporation_id(mut self, corporation_id: impl Into<String>) -> Self {
        self.corporation_id = Some(corporation_id.into());
        self
    }

    /// Set the integrator identifier (sent as `X-Integrator-Id`)
    pub fn with_integrator_id(mut self, integrator_id: impl Into<String>) -> Self {
        self.integrator_id = Some(integrator_id.into());
        self
    }

    /// Set the platform identifier (sent as `X-Platform-Id`)
    pub fn with_platform_id(mut self, platform_id: impl Into<String>) -> Self {
        self.platform_id = Some(platform_id.into());
        self
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn corporation_id(&self) -> Option<&str> {
        self.corporation_id.as_deref()
    }

    pub fn integrator_id(&self) -> Option<&str> {
        self.integrator_id.as_deref()
    }

    pub fn platform_id(&self) -> Option<&str> {
        self.platform_id.as_deref()
    }
}
