/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod path;
pub mod payment;
pub mod point;
pub mod preference;
pub mod query;
pub mod refund;

pub use error::{MercadoPagoError, Result};
pub use path::PathTemplate;

pub use client::{ClientConfig, MercadoPagoClient, RequestOptions};
