//! Domain errors raised by client-local logic

use thiserror::Error;

/// Cart errors
///
/// Any error leaves the cart exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("Stock insuficiente para {producto}: solicitado {solicitado}, disponible {disponible}")]
    StockInsuficiente {
        producto: String,
        solicitado: i32,
        disponible: i32,
    },

    #[error("Producto inactivo: {0}")]
    ProductoInactivo(String),

    #[error("Cantidad inválida: {0}")]
    CantidadInvalida(i32),

    #[error("Producto {0} no está en el carrito")]
    LineaNoEncontrada(i64),

    #[error("El carrito está vacío")]
    CarritoVacio,
}

/// Payload validation errors, checked before anything is sent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{campo}: {mensaje}")]
pub struct ValidationError {
    pub campo: &'static str,
    pub mensaje: String,
}

impl ValidationError {
    pub fn new(campo: &'static str, mensaje: impl Into<String>) -> Self {
        Self {
            campo,
            mensaje: mensaje.into(),
        }
    }
}
