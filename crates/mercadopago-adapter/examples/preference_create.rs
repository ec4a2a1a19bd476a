/*
[INPUT]:  Access token and item data
[OUTPUT]: A checkout preference with its init point URL
[POS]:    Examples - preference creation
[UPDATE]: When the preference API changes
*/

use mercadopago_adapter::*;

/// Example: create a checkout preference and print the payment flow URL
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

    let request = PreferenceRequest {
        external_reference: Some("order-12".to_string()),
        items: Some(vec![PreferenceItem {
            title: Some("Coffee".to_string()),
            quantity: Some(2),
            unit_price: Some("12.5".parse().expect("unit price")),
            currency_id: Some("BRL".to_string()),
            ..Default::default()
        }]),
        back_urls: Some(PreferenceBackUrls {
            success: Some("https://shop.test/success".to_string()),
            pending: Some("https://shop.test/pending".to_string()),
            failure: Some("https://shop.test/failure".to_string()),
        }),
        ..Default::default()
    };

    match client.create_preference(request).await {
        Ok(preference) => {
            println!("Preference {} created", preference.id);
            if let Some(init_point) = preference.init_point {
                println!("Start the payment flow at: {}", init_point);
            }
        }
        Err(e) => println!("Creation failed: {}", e),
    }
}
