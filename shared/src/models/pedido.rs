//! Pedido Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::money::{de_amount, de_amount_or_zero, to_decimal};
use crate::util::parse_fecha;

/// Order status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum EstadoPedido {
    #[default]
    Pendiente,
    EnPreparacion,
    Completado,
    Cancelado,
}

impl EstadoPedido {
    pub const ALL: [EstadoPedido; 4] = [
        EstadoPedido::Pendiente,
        EstadoPedido::EnPreparacion,
        EstadoPedido::Completado,
        EstadoPedido::Cancelado,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoPedido::Pendiente => "pendiente",
            EstadoPedido::EnPreparacion => "en_preparacion",
            EstadoPedido::Completado => "completado",
            EstadoPedido::Cancelado => "cancelado",
        }
    }

    /// Final states accept no further transitions
    pub fn es_final(&self) -> bool {
        matches!(self, EstadoPedido::Completado | EstadoPedido::Cancelado)
    }
}

impl std::fmt::Display for EstadoPedido {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EstadoPedido {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase().replace([' ', '-'], "_");
        EstadoPedido::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| format!("estado de pedido desconocido: {s}"))
    }
}

/// Order line as returned by the server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetallePedido {
    pub producto_id: i64,
    #[serde(default)]
    pub producto_nombre: Option<String>,
    pub cantidad: i32,
    #[serde(deserialize_with = "de_amount")]
    pub precio_unitario: f64,
    #[serde(default, deserialize_with = "de_amount_or_zero")]
    pub subtotal: f64,
}

impl DetallePedido {
    /// Line amount, falling back to `cantidad × precio_unitario` when the
    /// server omitted `subtotal`.
    pub fn importe(&self) -> rust_decimal::Decimal {
        if self.subtotal != 0.0 {
            to_decimal(self.subtotal)
        } else {
            to_decimal(self.precio_unitario) * rust_decimal::Decimal::from(self.cantidad)
        }
    }
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pedido {
    pub id: i64,
    #[serde(default)]
    pub numero: Option<String>,
    #[serde(default)]
    pub cliente_id: Option<i64>,
    #[serde(default)]
    pub cliente_nombre: Option<String>,
    #[serde(default)]
    pub metodo_pago_id: Option<i64>,
    #[serde(default)]
    pub metodo_pago_nombre: Option<String>,
    #[serde(default)]
    pub estado: EstadoPedido,
    #[serde(default, deserialize_with = "de_amount_or_zero")]
    pub subtotal: f64,
    #[serde(default, deserialize_with = "de_amount_or_zero")]
    pub igv: f64,
    #[serde(deserialize_with = "de_amount")]
    pub total: f64,
    #[serde(default)]
    pub notas: Option<String>,
    #[serde(default)]
    pub detalles: Vec<DetallePedido>,
    /// Creation timestamp as sent by the server
    #[serde(default)]
    pub fecha: Option<String>,
}

impl Pedido {
    /// Calendar day of the order, if the timestamp is parseable
    pub fn dia(&self) -> Option<NaiveDate> {
        self.fecha.as_deref().and_then(parse_fecha)
    }

    /// Display label: server number or `#id`
    pub fn etiqueta(&self) -> String {
        self.numero.clone().unwrap_or_else(|| format!("#{}", self.id))
    }
}

/// Order line payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetallePedidoCreate {
    pub producto_id: i64,
    pub cantidad: i32,
    pub precio_unitario: f64,
}

/// Create order payload
///
/// Totals are informative; the server recomputes them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PedidoCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cliente_id: Option<i64>,
    pub metodo_pago_id: i64,
    pub detalles: Vec<DetallePedidoCreate>,
    pub subtotal: f64,
    pub igv: f64,
    pub total: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notas: Option<String>,
}

/// Update status payload
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PedidoEstadoUpdate {
    pub estado: EstadoPedido,
}
