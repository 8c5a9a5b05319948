//! Categoria Models
//!
//! Products and customers are grouped by two independent category lists.

use serde::{Deserialize, Serialize};

use crate::money::de_amount_opt;

fn default_true() -> bool {
    true
}

/// Product category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoriaProducto {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default = "default_true")]
    pub activo: bool,
}

/// Customer category (e.g. frecuente, mayorista)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoriaCliente {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    /// Discount in percent granted to customers of this category
    #[serde(default, deserialize_with = "de_amount_opt")]
    pub descuento_porcentaje: Option<f64>,
    #[serde(default = "default_true")]
    pub activo: bool,
}

/// Create/update payload shared by both category kinds
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CategoriaCreate {
    pub nombre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    /// Only meaningful for customer categories
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descuento_porcentaje: Option<f64>,
}

/// Update category payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CategoriaUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descuento_porcentaje: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
}
