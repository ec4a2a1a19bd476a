/*
[INPUT]:  Access token, payment id and refund id
[OUTPUT]: A single refund of a payment
[POS]:    Examples - refund lookup
[UPDATE]: When the refund API changes
*/

use mercadopago_adapter::*;

/// Example: fetch one refund of a payment
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

    let payment_id: i64 = 12344555;
    let refund_id: i64 = 12344555;

    match client.get_refund(payment_id, refund_id).await {
        Ok(refund) => println!("Refund {}: {:?} ({:?})", refund.id, refund.amount, refund.status),
        Err(e) => println!("Lookup failed: {}", e),
    }
}
