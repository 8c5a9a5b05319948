//! Shopping cart for the POS, Pedidos and Ventas screens
//!
//! The cart is purely client-local: it is built line by line, priced with
//! `Decimal`, turned into a [`PedidoCreate`] and discarded by the caller
//! once the server accepts the order. Stock is checked optimistically
//! against the last fetched product data; the server re-validates.

use rust_decimal::prelude::*;
use serde::Serialize;

use crate::error::CartError;
use crate::models::{DetallePedidoCreate, PedidoCreate, Producto};
use crate::money::{TASA_IGV, round_money, to_decimal, to_f64};

/// One cart line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineaCarrito {
    pub producto_id: i64,
    pub nombre: String,
    pub cantidad: i32,
    pub precio_unitario: f64,
    /// Stock reported by the server when the product was added
    pub stock_disponible: i32,
}

impl LineaCarrito {
    /// `cantidad × precio_unitario`, unrounded
    pub fn importe(&self) -> Decimal {
        to_decimal(self.precio_unitario) * Decimal::from(self.cantidad)
    }
}

/// Cart totals, rounded to 2 decimal places
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TotalesCarrito {
    pub subtotal: Decimal,
    pub igv: Decimal,
    pub total: Decimal,
}

/// Ordered list of lines, unique by product
#[derive(Debug, Clone, PartialEq)]
pub struct Carrito {
    lineas: Vec<LineaCarrito>,
    tasa_igv: Decimal,
}

impl Default for Carrito {
    fn default() -> Self {
        Self::new()
    }
}

impl Carrito {
    /// Empty cart taxed at the standard IGV rate
    pub fn new() -> Self {
        Self::con_tasa(TASA_IGV)
    }

    /// Empty cart with a custom tax rate (0.18 = 18%)
    pub fn con_tasa(tasa_igv: Decimal) -> Self {
        Self {
            lineas: Vec::new(),
            tasa_igv,
        }
    }

    pub fn tasa_igv(&self) -> Decimal {
        self.tasa_igv
    }

    pub fn lineas(&self) -> &[LineaCarrito] {
        &self.lineas
    }

    pub fn len(&self) -> usize {
        self.lineas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lineas.is_empty()
    }

    /// Total units across all lines
    pub fn unidades(&self) -> i32 {
        self.lineas.iter().map(|l| l.cantidad).sum()
    }

    /// Add `cantidad` units of a product.
    ///
    /// An existing line for the same product grows in place and keeps its
    /// position; its stock snapshot is refreshed from `producto`.
    pub fn agregar(&mut self, producto: &Producto, cantidad: i32) -> Result<(), CartError> {
        if cantidad <= 0 {
            return Err(CartError::CantidadInvalida(cantidad));
        }
        if !producto.activo {
            return Err(CartError::ProductoInactivo(producto.nombre.clone()));
        }

        let actual = self
            .posicion(producto.id)
            .map(|i| self.lineas[i].cantidad)
            .unwrap_or(0);
        let solicitado = actual.saturating_add(cantidad);
        check_stock(&producto.nombre, solicitado, producto.stock)?;

        match self.posicion(producto.id) {
            Some(i) => {
                let linea = &mut self.lineas[i];
                linea.cantidad = solicitado;
                linea.stock_disponible = producto.stock;
            }
            None => self.lineas.push(LineaCarrito {
                producto_id: producto.id,
                nombre: producto.nombre.clone(),
                cantidad,
                precio_unitario: producto.precio,
                stock_disponible: producto.stock,
            }),
        }
        tracing::debug!(producto_id = producto.id, cantidad = solicitado, "cart line updated");
        Ok(())
    }

    /// Set the quantity of an existing line. `0` removes the line.
    pub fn establecer_cantidad(
        &mut self,
        producto_id: i64,
        cantidad: i32,
    ) -> Result<(), CartError> {
        if cantidad < 0 {
            return Err(CartError::CantidadInvalida(cantidad));
        }
        let i = self
            .posicion(producto_id)
            .ok_or(CartError::LineaNoEncontrada(producto_id))?;
        if cantidad == 0 {
            self.lineas.remove(i);
            return Ok(());
        }
        let linea = &mut self.lineas[i];
        check_stock(&linea.nombre, cantidad, linea.stock_disponible)?;
        linea.cantidad = cantidad;
        Ok(())
    }

    /// Remove a line, returning it
    pub fn quitar(&mut self, producto_id: i64) -> Result<LineaCarrito, CartError> {
        let i = self
            .posicion(producto_id)
            .ok_or(CartError::LineaNoEncontrada(producto_id))?;
        Ok(self.lineas.remove(i))
    }

    pub fn vaciar(&mut self) {
        self.lineas.clear();
    }

    /// `subtotal = Σ cantidad × precio`, `igv = subtotal × tasa`,
    /// `total = subtotal + igv`. IGV is rounded once, on the subtotal.
    pub fn totales(&self) -> TotalesCarrito {
        let subtotal = round_money(self.lineas.iter().map(LineaCarrito::importe).sum());
        let igv = round_money(subtotal * self.tasa_igv);
        TotalesCarrito {
            subtotal,
            igv,
            total: subtotal + igv,
        }
    }

    /// Build the order payload. The cart itself is left untouched so that a
    /// failed submit can be retried by the user.
    pub fn a_pedido(
        &self,
        metodo_pago_id: i64,
        cliente_id: Option<i64>,
        notas: Option<String>,
    ) -> Result<PedidoCreate, CartError> {
        if self.is_empty() {
            return Err(CartError::CarritoVacio);
        }
        let totales = self.totales();
        Ok(PedidoCreate {
            cliente_id,
            metodo_pago_id,
            detalles: self
                .lineas
                .iter()
                .map(|l| DetallePedidoCreate {
                    producto_id: l.producto_id,
                    cantidad: l.cantidad,
                    precio_unitario: l.precio_unitario,
                })
                .collect(),
            subtotal: to_f64(totales.subtotal),
            igv: to_f64(totales.igv),
            total: to_f64(totales.total),
            notas: notas.filter(|n| !n.trim().is_empty()),
        })
    }

    fn posicion(&self, producto_id: i64) -> Option<usize> {
        self.lineas.iter().position(|l| l.producto_id == producto_id)
    }
}

fn check_stock(nombre: &str, solicitado: i32, disponible: i32) -> Result<(), CartError> {
    if solicitado > disponible {
        return Err(CartError::StockInsuficiente {
            producto: nombre.to_string(),
            solicitado,
            disponible,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn producto(id: i64, nombre: &str, precio: f64, stock: i32) -> Producto {
        Producto {
            id,
            codigo: None,
            nombre: nombre.to_string(),
            descripcion: None,
            precio,
            stock,
            stock_minimo: None,
            categoria_id: None,
            categoria_nombre: None,
            imagen: None,
            activo: true,
        }
    }

    #[test]
    fn test_totals_with_igv() {
        let mut carrito = Carrito::new();
        carrito.agregar(&producto(1, "Lomo saltado", 25.0, 10), 2).unwrap();
        carrito.agregar(&producto(2, "Chicha", 4.5, 10), 1).unwrap();

        let t = carrito.totales();
        assert_eq!(t.subtotal, Decimal::new(5450, 2));
        assert_eq!(t.igv, Decimal::new(981, 2));
        assert_eq!(t.total, Decimal::new(6431, 2));
    }

    #[test]
    fn test_igv_rounds_half_up() {
        let mut carrito = Carrito::new();
        // 0.25 * 0.18 = 0.045 -> 0.05
        carrito.agregar(&producto(1, "Caramelo", 0.25, 10), 1).unwrap();
        let t = carrito.totales();
        assert_eq!(t.igv, Decimal::new(5, 2));
        assert_eq!(t.total, Decimal::new(30, 2));
    }

    #[test]
    fn test_empty_cart_totals_zero() {
        let t = Carrito::new().totales();
        assert_eq!(t, TotalesCarrito::default());
    }

    #[test]
    fn test_adding_same_product_merges_in_place() {
        let mut carrito = Carrito::new();
        let a = producto(1, "Pan", 0.5, 20);
        let b = producto(2, "Leche", 4.2, 20);
        carrito.agregar(&a, 2).unwrap();
        carrito.agregar(&b, 1).unwrap();
        carrito.agregar(&a, 3).unwrap();

        assert_eq!(carrito.len(), 2);
        assert_eq!(carrito.lineas()[0].producto_id, 1);
        assert_eq!(carrito.lineas()[0].cantidad, 5);
        assert_eq!(carrito.unidades(), 6);
    }

    #[test]
    fn test_stock_limit_leaves_cart_unchanged() {
        let mut carrito = Carrito::new();
        let p = producto(1, "Torta", 30.0, 3);
        carrito.agregar(&p, 2).unwrap();

        let before = carrito.clone();
        let err = carrito.agregar(&p, 2).unwrap_err();
        assert_eq!(
            err,
            CartError::StockInsuficiente {
                producto: "Torta".into(),
                solicitado: 4,
                disponible: 3
            }
        );
        assert_eq!(carrito, before);

        assert!(carrito.establecer_cantidad(1, 4).is_err());
        assert_eq!(carrito, before);
        carrito.establecer_cantidad(1, 3).unwrap();
        assert_eq!(carrito.lineas()[0].cantidad, 3);
    }

    #[test]
    fn test_rejects_inactive_and_invalid_quantities() {
        let mut carrito = Carrito::new();
        let mut p = producto(1, "Gaseosa", 3.0, 5);
        assert_eq!(carrito.agregar(&p, 0), Err(CartError::CantidadInvalida(0)));
        p.activo = false;
        assert_eq!(
            carrito.agregar(&p, 1),
            Err(CartError::ProductoInactivo("Gaseosa".into()))
        );
        assert!(carrito.is_empty());

        let agotado = producto(2, "Agotado", 1.0, 0);
        assert!(matches!(
            carrito.agregar(&agotado, 1),
            Err(CartError::StockInsuficiente { .. })
        ));
    }

    #[test]
    fn test_set_zero_removes_and_quitar() {
        let mut carrito = Carrito::new();
        carrito.agregar(&producto(1, "A", 1.0, 5), 1).unwrap();
        carrito.agregar(&producto(2, "B", 1.0, 5), 1).unwrap();
        carrito.establecer_cantidad(1, 0).unwrap();
        assert_eq!(carrito.len(), 1);
        assert_eq!(carrito.quitar(2).unwrap().nombre, "B");
        assert_eq!(carrito.quitar(2), Err(CartError::LineaNoEncontrada(2)));
    }

    #[test]
    fn test_a_pedido() {
        let mut carrito = Carrito::new();
        assert_eq!(carrito.a_pedido(1, None, None), Err(CartError::CarritoVacio));

        carrito.agregar(&producto(7, "Ceviche", 32.0, 4), 2).unwrap();
        let pedido = carrito.a_pedido(3, Some(9), Some("  ".into())).unwrap();
        assert_eq!(pedido.metodo_pago_id, 3);
        assert_eq!(pedido.cliente_id, Some(9));
        assert_eq!(pedido.notas, None);
        assert_eq!(pedido.detalles.len(), 1);
        assert_eq!(pedido.detalles[0].cantidad, 2);
        assert_eq!(pedido.subtotal, 64.0);
        assert!((pedido.igv - 11.52).abs() < 1e-9);
        assert!((pedido.total - 75.52).abs() < 1e-9);
        // cart survives for a retry
        assert_eq!(carrito.len(), 1);
    }

    #[test]
    fn test_custom_rate() {
        let mut carrito = Carrito::con_tasa(Decimal::ZERO);
        carrito.agregar(&producto(1, "Libro", 40.0, 1), 1).unwrap();
        assert_eq!(carrito.totales().total, Decimal::new(40, 0));
    }
}
