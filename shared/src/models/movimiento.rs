//! Movimiento Model (inventory movements)

use serde::{Deserialize, Serialize};

/// Movement type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TipoMovimiento {
    /// Stock received
    Entrada,
    /// Stock leaving (sale, waste)
    Salida,
    /// Manual correction; `cantidad` is the counted stock
    Ajuste,
}

impl TipoMovimiento {
    pub fn as_str(&self) -> &'static str {
        match self {
            TipoMovimiento::Entrada => "entrada",
            TipoMovimiento::Salida => "salida",
            TipoMovimiento::Ajuste => "ajuste",
        }
    }
}

impl std::fmt::Display for TipoMovimiento {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TipoMovimiento {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "entrada" => Ok(TipoMovimiento::Entrada),
            "salida" => Ok(TipoMovimiento::Salida),
            "ajuste" => Ok(TipoMovimiento::Ajuste),
            other => Err(format!("tipo de movimiento desconocido: {other}")),
        }
    }
}

/// Inventory movement entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movimiento {
    pub id: i64,
    pub producto_id: i64,
    #[serde(default)]
    pub producto_nombre: Option<String>,
    pub tipo: TipoMovimiento,
    pub cantidad: i32,
    #[serde(default)]
    pub stock_anterior: Option<i32>,
    #[serde(default)]
    pub stock_nuevo: Option<i32>,
    #[serde(default)]
    pub motivo: Option<String>,
    #[serde(default)]
    pub usuario: Option<String>,
    #[serde(default)]
    pub fecha: Option<String>,
}

/// Register movement payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovimientoCreate {
    pub producto_id: i64,
    pub tipo: TipoMovimiento,
    pub cantidad: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motivo: Option<String>,
}
