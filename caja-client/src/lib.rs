//! Caja Client - REST client for the POS backend
//!
//! Typed access to every backend resource (productos, categorías,
//! clientes, pedidos, boletas, inventario) behind a bearer-token session.
//!
//! Two transports implement [`HttpClient`]:
//! - [`NetworkHttpClient`]: reqwest over the network
//! - [`OneshotHttpClient`]: an in-process `axum::Router`, no sockets

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod session;
pub mod types;

pub use client::{CajaClient, HttpClient, NetworkHttpClient, OneshotHttpClient};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use session::{SessionStorage, StoredSession};
pub use types::{Anonymous, Authenticated, SessionData, SessionState};

// Re-export shared types for convenience
pub use shared::client::{LoginRequest, LoginResponse, Usuario};
