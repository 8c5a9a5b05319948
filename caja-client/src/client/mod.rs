//! Client module - transports and the typestate session wrapper.

mod caja_client;
pub mod http;
pub mod http_oneshot;

pub use caja_client::CajaClient;
pub use http::{HttpClient, NetworkHttpClient};
pub use http_oneshot::OneshotHttpClient;
