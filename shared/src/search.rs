//! Search over already-fetched records
//!
//! Linear scan, case-insensitive substring match, original order kept.

use std::borrow::Cow;

use crate::models::{
    Boleta, CategoriaCliente, CategoriaProducto, Cliente, EstadoPedido, EstadoSunat, MetodoPago,
    Movimiento, Pedido, Producto, TipoMovimiento,
};

/// Default low-stock threshold for products without `stock_minimo`
pub const STOCK_MINIMO_POR_DEFECTO: i32 = 5;

/// A record that can be matched against a free-text query
pub trait Buscable {
    /// Fields the query is matched against
    fn campos_busqueda(&self) -> Vec<Cow<'_, str>>;

    fn coincide(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.campos_busqueda()
            .iter()
            .any(|campo| campo.to_lowercase().contains(&needle))
    }
}

/// Records whose fields contain `query`, in input order.
///
/// An empty or whitespace-only query matches everything.
pub fn filtrar<'a, T: Buscable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    items.iter().filter(|item| item.coincide(query)).collect()
}

pub fn pedidos_por_estado(pedidos: &[Pedido], estado: EstadoPedido) -> Vec<&Pedido> {
    pedidos.iter().filter(|p| p.estado == estado).collect()
}

pub fn boletas_por_estado(boletas: &[Boleta], estado: EstadoSunat) -> Vec<&Boleta> {
    boletas.iter().filter(|b| b.estado_sunat == estado).collect()
}

/// Movements filtered by type and/or product; `None` means any.
pub fn movimientos_filtrados(
    movimientos: &[Movimiento],
    tipo: Option<TipoMovimiento>,
    producto_id: Option<i64>,
) -> Vec<&Movimiento> {
    movimientos
        .iter()
        .filter(|m| tipo.is_none_or(|t| m.tipo == t))
        .filter(|m| producto_id.is_none_or(|id| m.producto_id == id))
        .collect()
}

/// Active products at or below their stock threshold
pub fn productos_stock_bajo(productos: &[Producto], umbral: i32) -> Vec<&Producto> {
    productos
        .iter()
        .filter(|p| p.activo && p.stock_bajo(umbral))
        .collect()
}

fn opt(value: &Option<String>) -> Option<Cow<'_, str>> {
    value.as_deref().map(Cow::Borrowed)
}

impl Buscable for Producto {
    fn campos_busqueda(&self) -> Vec<Cow<'_, str>> {
        let mut campos = vec![Cow::Borrowed(self.nombre.as_str())];
        campos.extend(opt(&self.codigo));
        campos.extend(opt(&self.descripcion));
        campos.extend(opt(&self.categoria_nombre));
        campos
    }
}

impl Buscable for CategoriaProducto {
    fn campos_busqueda(&self) -> Vec<Cow<'_, str>> {
        let mut campos = vec![Cow::Borrowed(self.nombre.as_str())];
        campos.extend(opt(&self.descripcion));
        campos
    }
}

impl Buscable for CategoriaCliente {
    fn campos_busqueda(&self) -> Vec<Cow<'_, str>> {
        let mut campos = vec![Cow::Borrowed(self.nombre.as_str())];
        campos.extend(opt(&self.descripcion));
        campos
    }
}

impl Buscable for Cliente {
    fn campos_busqueda(&self) -> Vec<Cow<'_, str>> {
        let mut campos = vec![
            Cow::Borrowed(self.nombre.as_str()),
            Cow::Borrowed(self.numero_documento.as_str()),
        ];
        campos.extend(opt(&self.email));
        campos.extend(opt(&self.telefono));
        campos
    }
}

impl Buscable for MetodoPago {
    fn campos_busqueda(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(self.nombre.as_str())]
    }
}

impl Buscable for Pedido {
    fn campos_busqueda(&self) -> Vec<Cow<'_, str>> {
        let mut campos = vec![
            Cow::Owned(self.etiqueta()),
            Cow::Borrowed(self.estado.as_str()),
        ];
        campos.extend(opt(&self.cliente_nombre));
        campos.extend(opt(&self.metodo_pago_nombre));
        campos.extend(self.detalles.iter().filter_map(|d| opt(&d.producto_nombre)));
        campos
    }
}

impl Buscable for Boleta {
    fn campos_busqueda(&self) -> Vec<Cow<'_, str>> {
        let mut campos = vec![
            Cow::Owned(self.numero_completo()),
            Cow::Borrowed(self.estado_sunat.as_str()),
        ];
        campos.extend(opt(&self.cliente_nombre));
        campos
    }
}

impl Buscable for Movimiento {
    fn campos_busqueda(&self) -> Vec<Cow<'_, str>> {
        let mut campos = vec![Cow::Borrowed(self.tipo.as_str())];
        campos.extend(opt(&self.producto_nombre));
        campos.extend(opt(&self.motivo));
        campos.extend(opt(&self.usuario));
        campos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn producto(id: i64, nombre: &str, codigo: Option<&str>, stock: i32) -> Producto {
        Producto {
            id,
            codigo: codigo.map(str::to_string),
            nombre: nombre.to_string(),
            descripcion: None,
            precio: 1.0,
            stock,
            stock_minimo: None,
            categoria_id: None,
            categoria_nombre: Some("Bebidas".into()),
            imagen: None,
            activo: true,
        }
    }

    #[test]
    fn test_case_insensitive_keeps_order() {
        let items = vec![
            producto(1, "Inca Kola", Some("IK-500"), 10),
            producto(2, "Agua San Luis", None, 10),
            producto(3, "INCA kola zero", None, 10),
        ];
        let found: Vec<i64> = filtrar(&items, "inca").iter().map(|p| p.id).collect();
        assert_eq!(found, vec![1, 3]);

        let by_code: Vec<i64> = filtrar(&items, "ik-5").iter().map(|p| p.id).collect();
        assert_eq!(by_code, vec![1]);
    }

    #[test]
    fn test_empty_query_returns_all() {
        let items = vec![producto(1, "A", None, 1), producto(2, "B", None, 1)];
        assert_eq!(filtrar(&items, "").len(), 2);
        assert_eq!(filtrar(&items, "   ").len(), 2);
        assert!(filtrar(&items, "zzz").is_empty());
    }

    #[test]
    fn test_matches_non_ascii() {
        let items = vec![producto(1, "Ají de Gallina", None, 1)];
        assert_eq!(filtrar(&items, "AJÍ").len(), 1);
        assert_eq!(filtrar(&items, "bebidas").len(), 1);
    }

    #[test]
    fn test_low_stock() {
        let mut con_minimo = producto(3, "C", None, 8);
        con_minimo.stock_minimo = Some(10);
        let mut inactivo = producto(4, "D", None, 0);
        inactivo.activo = false;
        let items = vec![
            producto(1, "A", None, 5),
            producto(2, "B", None, 6),
            con_minimo,
            inactivo,
        ];
        let ids: Vec<i64> = productos_stock_bajo(&items, STOCK_MINIMO_POR_DEFECTO)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_movement_filters() {
        let mov = |id, producto_id, tipo| Movimiento {
            id,
            producto_id,
            producto_nombre: None,
            tipo,
            cantidad: 1,
            stock_anterior: None,
            stock_nuevo: None,
            motivo: None,
            usuario: None,
            fecha: None,
        };
        let items = vec![
            mov(1, 10, TipoMovimiento::Entrada),
            mov(2, 11, TipoMovimiento::Salida),
            mov(3, 10, TipoMovimiento::Salida),
        ];
        assert_eq!(movimientos_filtrados(&items, None, None).len(), 3);
        assert_eq!(
            movimientos_filtrados(&items, Some(TipoMovimiento::Salida), Some(10))[0].id,
            3
        );
        assert_eq!(movimientos_filtrados(&items, None, Some(11)).len(), 1);
    }

    #[test]
    fn test_state_filters() {
        let pedido = |id, estado| Pedido {
            id,
            numero: None,
            cliente_id: None,
            cliente_nombre: None,
            metodo_pago_id: None,
            metodo_pago_nombre: None,
            estado,
            subtotal: 0.0,
            igv: 0.0,
            total: 0.0,
            notas: None,
            detalles: vec![],
            fecha: None,
        };
        let pedidos = vec![
            pedido(1, EstadoPedido::Pendiente),
            pedido(2, EstadoPedido::Completado),
            pedido(3, EstadoPedido::Pendiente),
        ];
        let ids: Vec<i64> = pedidos_por_estado(&pedidos, EstadoPedido::Pendiente)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(pedidos_por_estado(&pedidos, EstadoPedido::Cancelado).is_empty());

        let boleta = |id, estado_sunat| Boleta {
            id,
            serie: "B001".into(),
            correlativo: id,
            pedido_id: id,
            cliente_id: None,
            cliente_nombre: None,
            fecha_emision: None,
            subtotal: 0.0,
            igv: 0.0,
            total: 0.0,
            estado_sunat,
            mensaje_sunat: None,
        };
        let boletas = vec![
            boleta(1, EstadoSunat::Rechazado),
            boleta(2, EstadoSunat::Aceptado),
        ];
        assert_eq!(boletas_por_estado(&boletas, EstadoSunat::Rechazado)[0].id, 1);
        assert_eq!(boletas_por_estado(&boletas, EstadoSunat::Aceptado).len(), 1);
    }
}
