/*
[INPUT]:  Device identifiers and payment intent requests
[OUTPUT]: Point device and payment intent resources
[POS]:    HTTP layer - Point in-person payment endpoints
[UPDATE]: When adding new Point endpoints or changing response format
*/

use crate::http::client::{MercadoPagoClient, RequestOptions};
use crate::http::error::Result;
use crate::types::{
    DevicesResponse, OperatingMode, OperatingModeRequest, OperatingModeResponse,
    PaymentIntentCancelResponse, PaymentIntentRequest, PaymentIntentResponse,
};

const URL_DEVICES: &str = "/point/integration-api/devices";
const URL_DEVICES_WITH_ID: &str = "/point/integration-api/devices/:device_id";
const URL_PAYMENT_INTENT: &str = "/point/integration-api/devices/:device_id/payment-intents";
const URL_PAYMENT_INTENT_GET: &str = "/point/integration-api/payment-intents/:payment_intent_id";
const URL_PAYMENT_INTENT_CANCEL: &str =
    "/point/integration-api/devices/:device_id/payment-intents/:payment_intent_id";

impl MercadoPagoClient {
    /// Open a payment intent on a device
    ///
    /// POST /point/integration-api/devices/{device_id}/payment-intents
    pub async fn create_payment_intent(
        &self,
        device_id: &str,
        request: PaymentIntentRequest,
    ) -> Result<PaymentIntentResponse> {
        let options = RequestOptions::new().path_param("device_id", device_id);
        self.post(URL_PAYMENT_INTENT, &request, options).await
    }

    /// Get a payment intent by id
    ///
    /// GET /point/integration-api/payment-intents/{payment_intent_id}
    pub async fn get_payment_intent(
        &self,
        payment_intent_id: &str,
    ) -> Result<PaymentIntentResponse> {
        let options = RequestOptions::new().path_param("payment_intent_id", payment_intent_id);
        self.get(URL_PAYMENT_INTENT_GET, options).await
    }

    /// Cancel a payment intent on a device
    ///
    /// DELETE /point/integration-api/devices/{device_id}/payment-intents/{payment_intent_id}
    pub async fn cancel_payment_intent(
        &self,
        device_id: &str,
        payment_intent_id: &str,
    ) -> Result<PaymentIntentCancelResponse> {
        let options = RequestOptions::new()
            .path_param("device_id", device_id)
            .path_param("payment_intent_id", payment_intent_id);
        self.delete(URL_PAYMENT_INTENT_CANCEL, options).await
    }

    /// List the devices registered to the account
    ///
    /// GET /point/integration-api/devices
    pub async fn list_devices(&self) -> Result<DevicesResponse> {
        self.get(URL_DEVICES, RequestOptions::new()).await
    }

    /// Switch a device between integration-driven and standalone operation
    ///
    /// PATCH /point/integration-api/devices/{device_id}
    pub async fn update_device_operating_mode(
        &self,
        device_id: &str,
        operating_mode: OperatingMode,
    ) -> Result<OperatingModeResponse> {
        let options = RequestOptions::new().path_param("device_id", device_id);
        let body = OperatingModeRequest { operating_mode };
        self.patch(URL_DEVICES_WITH_ID, &body, options).await
    }
}
