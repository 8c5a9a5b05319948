//! Producto Model

use serde::{Deserialize, Serialize};

use crate::money::{de_amount, de_amount_opt};

fn default_true() -> bool {
    true
}

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Producto {
    pub id: i64,
    /// Internal or barcode reference
    #[serde(default)]
    pub codigo: Option<String>,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    /// Unit price in soles
    #[serde(deserialize_with = "de_amount")]
    pub precio: f64,
    /// Stock as reported by the server
    #[serde(default)]
    pub stock: i32,
    #[serde(default)]
    pub stock_minimo: Option<i32>,
    #[serde(default)]
    pub categoria_id: Option<i64>,
    #[serde(default)]
    pub categoria_nombre: Option<String>,
    #[serde(default)]
    pub imagen: Option<String>,
    #[serde(default = "default_true")]
    pub activo: bool,
}

impl Producto {
    /// Whether stock is at or below the alert threshold.
    ///
    /// The product's own `stock_minimo` wins over `umbral_por_defecto`.
    pub fn stock_bajo(&self, umbral_por_defecto: i32) -> bool {
        self.stock <= self.stock_minimo.unwrap_or(umbral_por_defecto)
    }
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductoCreate {
    pub nombre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codigo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    pub precio: f64,
    pub stock: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_minimo: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoria_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imagen: Option<String>,
}

/// Update product payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductoUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codigo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de_amount_opt"
    )]
    pub precio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_minimo: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoria_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imagen: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
}
