/*
[INPUT]:  Access token and a registered Point device id
[OUTPUT]: A payment intent pushed to the device, then cancelled
[POS]:    Examples - Point payment intent lifecycle
[UPDATE]: When the Point integration API changes
*/

use mercadopago_adapter::*;

/// Example: drive a Point device through a payment intent
#[tokio::main]
async fn main() {
    let access_token = "{{ACCESS_TOKEN}}";

    let config = match Config::new(access_token) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to build config: {}", e);
            return;
        }
    };

    let client = match MercadoPagoClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    // Pick the first device registered to the account
    let device_id = match client.list_devices().await {
        Ok(devices) => match devices.devices.into_iter().next() {
            Some(device) => device.id,
            None => {
                println!("No Point devices registered");
                return;
            }
        },
        Err(e) => {
            println!("Device listing failed: {}", e);
            return;
        }
    };

    let request = PaymentIntentRequest {
        amount: 1500,
        additional_info: Some(PaymentIntentAdditionalInfo {
            external_reference: Some("ticket-9".to_string()),
            print_on_terminal: Some(true),
        }),
        ..Default::default()
    };

    match client.create_payment_intent(&device_id, request).await {
        Ok(intent) => {
            println!("Payment intent {} opened on {}", intent.id, device_id);
            match client.cancel_payment_intent(&device_id, &intent.id).await {
                Ok(cancelled) => println!("Payment intent {} cancelled", cancelled.id),
                Err(e) => println!("Cancel failed: {}", e),
            }
        }
        Err(e) => println!("Create failed: {}", e),
    }
}
