/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Mercado Pago adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod config;
pub mod http;
pub mod types;

// Re-export commonly used types from config
pub use config::Config;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    MercadoPagoClient,
    MercadoPagoError,
    PathTemplate,
    RequestOptions,
    Result,
};

// Re-export all types
pub use types::*;
