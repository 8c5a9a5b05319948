//! Data models
//!
//! Mirrors of the backend's JSON response shapes. The server owns validity,
//! uniqueness and lifecycle; these types only carry data.

pub mod boleta;
pub mod categoria;
pub mod cliente;
pub mod metodo_pago;
pub mod movimiento;
pub mod pedido;
pub mod producto;

// Re-exports
pub use boleta::*;
pub use categoria::*;
pub use cliente::*;
pub use metodo_pago::*;
pub use movimiento::*;
pub use pedido::*;
pub use producto::*;
