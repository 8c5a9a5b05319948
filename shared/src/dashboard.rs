//! Dashboard summary computed from fetched records

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Boleta, Cliente, EstadoPedido, EstadoSunat, Pedido, Producto};
use crate::money::{round_money, to_decimal};
use crate::search::productos_stock_bajo;

/// How many products the ranking keeps
pub const TOP_PRODUCTOS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductoVendido {
    pub producto_id: i64,
    pub nombre: String,
    pub cantidad: i64,
    pub importe: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertaStock {
    pub producto_id: i64,
    pub nombre: String,
    pub stock: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumenDashboard {
    /// Sum of completed orders
    pub ventas_total: Decimal,
    /// Order count per state, in `EstadoPedido::ALL` order
    pub pedidos_por_estado: Vec<(EstadoPedido, usize)>,
    /// Receipts not voided
    pub boletas_emitidas: usize,
    /// Receipts waiting on SUNAT (pendiente or enviado)
    pub boletas_pendientes_sunat: usize,
    pub boletas_rechazadas: usize,
    pub clientes_activos: usize,
    pub productos_activos: usize,
    pub stock_bajo: Vec<AlertaStock>,
    pub top_productos: Vec<ProductoVendido>,
}

impl ResumenDashboard {
    pub fn calcular(
        pedidos: &[Pedido],
        boletas: &[Boleta],
        productos: &[Producto],
        clientes: &[Cliente],
        umbral_stock: i32,
    ) -> Self {
        let completados = pedidos
            .iter()
            .filter(|p| p.estado == EstadoPedido::Completado);

        let ventas_total = round_money(completados.clone().map(|p| to_decimal(p.total)).sum());

        let pedidos_por_estado = EstadoPedido::ALL
            .into_iter()
            .map(|e| (e, pedidos.iter().filter(|p| p.estado == e).count()))
            .collect();

        let contar = |pred: fn(&EstadoSunat) -> bool| {
            boletas.iter().filter(|b| pred(&b.estado_sunat)).count()
        };

        let stock_bajo = productos_stock_bajo(productos, umbral_stock)
            .into_iter()
            .map(|p| AlertaStock {
                producto_id: p.id,
                nombre: p.nombre.clone(),
                stock: p.stock,
            })
            .collect();

        Self {
            ventas_total,
            pedidos_por_estado,
            boletas_emitidas: contar(|e| *e != EstadoSunat::Anulado),
            boletas_pendientes_sunat: contar(|e| {
                matches!(e, EstadoSunat::Pendiente | EstadoSunat::Enviado)
            }),
            boletas_rechazadas: contar(|e| *e == EstadoSunat::Rechazado),
            clientes_activos: clientes.iter().filter(|c| c.activo).count(),
            productos_activos: productos.iter().filter(|p| p.activo).count(),
            stock_bajo,
            top_productos: top_productos(completados, productos, TOP_PRODUCTOS),
        }
    }

    pub fn pedidos_en(&self, estado: EstadoPedido) -> usize {
        self.pedidos_por_estado
            .iter()
            .find(|(e, _)| *e == estado)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}

/// Best sellers by quantity; ties broken by name.
fn top_productos<'a>(
    pedidos: impl Iterator<Item = &'a Pedido>,
    productos: &[Producto],
    limite: usize,
) -> Vec<ProductoVendido> {
    let nombres: HashMap<i64, &str> = productos.iter().map(|p| (p.id, p.nombre.as_str())).collect();
    let mut acumulado: HashMap<i64, ProductoVendido> = HashMap::new();

    for detalle in pedidos.flat_map(|p| p.detalles.iter()) {
        let entry = acumulado
            .entry(detalle.producto_id)
            .or_insert_with(|| ProductoVendido {
                producto_id: detalle.producto_id,
                nombre: detalle
                    .producto_nombre
                    .clone()
                    .or_else(|| nombres.get(&detalle.producto_id).map(|n| n.to_string()))
                    .unwrap_or_else(|| format!("Producto #{}", detalle.producto_id)),
                cantidad: 0,
                importe: Decimal::ZERO,
            });
        entry.cantidad += i64::from(detalle.cantidad);
        entry.importe += detalle.importe();
    }

    let mut ranking: Vec<ProductoVendido> = acumulado
        .into_values()
        .map(|mut p| {
            p.importe = round_money(p.importe);
            p
        })
        .collect();
    ranking.sort_by(|a, b| b.cantidad.cmp(&a.cantidad).then_with(|| a.nombre.cmp(&b.nombre)));
    ranking.truncate(limite);
    ranking
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DetallePedido;

    fn detalle(producto_id: i64, nombre: &str, cantidad: i32, precio: f64) -> DetallePedido {
        DetallePedido {
            producto_id,
            producto_nombre: Some(nombre.into()),
            cantidad,
            precio_unitario: precio,
            subtotal: 0.0,
        }
    }

    fn pedido(id: i64, estado: EstadoPedido, total: f64, detalles: Vec<DetallePedido>) -> Pedido {
        Pedido {
            id,
            numero: None,
            cliente_id: None,
            cliente_nombre: None,
            metodo_pago_id: None,
            metodo_pago_nombre: None,
            estado,
            subtotal: 0.0,
            igv: 0.0,
            total,
            notas: None,
            detalles,
            fecha: None,
        }
    }

    fn boleta(id: i64, estado: EstadoSunat) -> Boleta {
        Boleta {
            id,
            serie: "B001".into(),
            correlativo: id,
            pedido_id: id,
            cliente_id: None,
            cliente_nombre: None,
            fecha_emision: None,
            subtotal: 0.0,
            igv: 0.0,
            total: 1.0,
            estado_sunat: estado,
            mensaje_sunat: None,
        }
    }

    #[test]
    fn test_summary_counts_and_sales() {
        let pedidos = vec![
            pedido(1, EstadoPedido::Completado, 10.5, vec![detalle(1, "Café", 2, 5.25)]),
            pedido(2, EstadoPedido::Completado, 20.0, vec![detalle(2, "Té", 4, 5.0)]),
            pedido(3, EstadoPedido::Cancelado, 99.0, vec![detalle(3, "Pie", 9, 11.0)]),
            pedido(4, EstadoPedido::Pendiente, 5.0, vec![]),
        ];
        let boletas = vec![
            boleta(1, EstadoSunat::Aceptado),
            boleta(2, EstadoSunat::Pendiente),
            boleta(3, EstadoSunat::Enviado),
            boleta(4, EstadoSunat::Rechazado),
            boleta(5, EstadoSunat::Anulado),
        ];
        let r = ResumenDashboard::calcular(&pedidos, &boletas, &[], &[], 5);

        assert_eq!(r.ventas_total, Decimal::new(3050, 2));
        assert_eq!(r.pedidos_en(EstadoPedido::Completado), 2);
        assert_eq!(r.pedidos_en(EstadoPedido::EnPreparacion), 0);
        assert_eq!(r.boletas_emitidas, 4);
        assert_eq!(r.boletas_pendientes_sunat, 2);
        assert_eq!(r.boletas_rechazadas, 1);

        // cancelled orders do not count as sold
        let top: Vec<&str> = r.top_productos.iter().map(|p| p.nombre.as_str()).collect();
        assert_eq!(top, vec!["Té", "Café"]);
        assert_eq!(r.top_productos[1].importe, Decimal::new(1050, 2));
    }

    #[test]
    fn test_top_products_tie_break_and_limit() {
        let detalles = (1..=7)
            .map(|i| detalle(i, &format!("P{i}"), 1, 1.0))
            .collect();
        let pedidos = vec![pedido(1, EstadoPedido::Completado, 7.0, detalles)];
        let r = ResumenDashboard::calcular(&pedidos, &[], &[], &[], 5);
        let names: Vec<&str> = r.top_productos.iter().map(|p| p.nombre.as_str()).collect();
        assert_eq!(names, vec!["P1", "P2", "P3", "P4", "P5"]);
    }
}
