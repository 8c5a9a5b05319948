//! MetodoPago Model

use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// Payment method (efectivo, tarjeta, yape, ...)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetodoPago {
    pub id: i64,
    pub nombre: String,
    #[serde(default = "default_true")]
    pub activo: bool,
}
