/*
[INPUT]:  Access token and search filters
[OUTPUT]: Payments matching an external reference
[POS]:    Examples - payment search
[UPDATE]: When the search API or filters change
*/

use mercadopago_adapter::*;

/// Example: search payments by external reference
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

    let request = SearchRequest {
        filters: [(
            "external_reference".to_string(),
            "abc_def_ghi_123_456123".to_string(),
        )]
        .into_iter()
        .collect(),
        ..Default::default()
    };

    match client.search_payments(request).await {
        Ok(page) => {
            println!("Found {} payments", page.paging.total);
            for payment in page.results {
                println!("  {} ({:?})", payment.id, payment.status);
            }
        }
        Err(e) => println!("Search failed: {}", e),
    }
}
