//! Shared types for Caja
//!
//! Entities mirrored from the backend, request payloads, and the
//! client-local logic (cart pricing, search, dashboard and sales
//! aggregation) used by `caja-client` and `caja-cli`.

pub mod cart;
pub mod client;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod money;
pub mod response;
pub mod search;
pub mod util;
pub mod validation;
pub mod ventas;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use cart::{Carrito, LineaCarrito, TotalesCarrito};
pub use error::{CartError, ValidationError};
pub use response::{ApiResponse, Envelope};
pub use search::{Buscable, filtrar};
