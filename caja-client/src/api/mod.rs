//! Resource APIs, one module per backend area.
//!
//! Every method lives on `CajaClient<_, Authenticated>`. Payloads are
//! validated locally first; a rejected payload never reaches the network.

mod boletas;
mod categorias;
mod clientes;
mod inventario;
mod metodos_pago;
mod pedidos;
mod productos;

pub use categorias::TipoCategoria;
