//! Sales report over completed orders

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{EstadoPedido, Pedido};
use crate::money::{round_money, to_decimal};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VentaPorMetodo {
    pub metodo: String,
    pub pedidos: usize,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReporteVentas {
    pub desde: NaiveDate,
    pub hasta: NaiveDate,
    pub pedidos: usize,
    pub subtotal: Decimal,
    pub igv: Decimal,
    pub total: Decimal,
    pub ticket_promedio: Decimal,
    /// Sorted by total, descending
    pub por_metodo_pago: Vec<VentaPorMetodo>,
    /// One entry per day with sales, ascending
    pub por_dia: Vec<(NaiveDate, Decimal)>,
}

impl ReporteVentas {
    /// Completed orders dated within `[desde, hasta]`.
    ///
    /// A reversed range is swapped. Orders without a parseable date are
    /// left out.
    pub fn generar(pedidos: &[Pedido], desde: NaiveDate, hasta: NaiveDate) -> Self {
        let (desde, hasta) = if desde <= hasta { (desde, hasta) } else { (hasta, desde) };

        let en_rango: Vec<(&Pedido, NaiveDate)> = pedidos
            .iter()
            .filter(|p| p.estado == EstadoPedido::Completado)
            .filter_map(|p| p.dia().map(|d| (p, d)))
            .filter(|(_, d)| (desde..=hasta).contains(d))
            .collect();

        let mut subtotal = Decimal::ZERO;
        let mut igv = Decimal::ZERO;
        let mut total = Decimal::ZERO;
        let mut metodos: HashMap<String, (usize, Decimal)> = HashMap::new();
        let mut dias: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();

        for (p, dia) in &en_rango {
            let monto = to_decimal(p.total);
            subtotal += to_decimal(p.subtotal);
            igv += to_decimal(p.igv);
            total += monto;

            let entry = metodos.entry(nombre_metodo(p)).or_default();
            entry.0 += 1;
            entry.1 += monto;
            *dias.entry(*dia).or_default() += monto;
        }

        let n = en_rango.len();
        let ticket_promedio = if n == 0 {
            Decimal::ZERO
        } else {
            round_money(total / Decimal::from(n))
        };

        let mut por_metodo_pago: Vec<VentaPorMetodo> = metodos
            .into_iter()
            .map(|(metodo, (pedidos, total))| VentaPorMetodo {
                metodo,
                pedidos,
                total: round_money(total),
            })
            .collect();
        por_metodo_pago.sort_by(|a, b| {
            b.total
                .cmp(&a.total)
                .then_with(|| a.metodo.cmp(&b.metodo))
        });

        Self {
            desde,
            hasta,
            pedidos: n,
            subtotal: round_money(subtotal),
            igv: round_money(igv),
            total: round_money(total),
            ticket_promedio,
            por_metodo_pago,
            por_dia: dias.into_iter().map(|(d, t)| (d, round_money(t))).collect(),
        }
    }
}

fn nombre_metodo(p: &Pedido) -> String {
    match (&p.metodo_pago_nombre, p.metodo_pago_id) {
        (Some(nombre), _) => nombre.clone(),
        (None, Some(id)) => format!("Método #{id}"),
        (None, None) => "Sin método".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pedido(id: i64, estado: EstadoPedido, fecha: &str, total: f64, metodo: &str) -> Pedido {
        Pedido {
            id,
            numero: None,
            cliente_id: None,
            cliente_nombre: None,
            metodo_pago_id: Some(1),
            metodo_pago_nombre: Some(metodo.into()),
            estado,
            subtotal: total,
            igv: 0.0,
            total,
            notas: None,
            detalles: vec![],
            fecha: Some(fecha.into()),
        }
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_range_is_inclusive_and_only_completed() {
        let pedidos = vec![
            pedido(1, EstadoPedido::Completado, "2024-03-01 09:00:00", 10.0, "Efectivo"),
            pedido(2, EstadoPedido::Completado, "2024-03-03T20:00:00", 30.0, "Yape"),
            pedido(3, EstadoPedido::Completado, "2024-03-04", 50.0, "Yape"),
            pedido(4, EstadoPedido::Cancelado, "2024-03-02", 70.0, "Yape"),
            pedido(5, EstadoPedido::Completado, "sin fecha", 90.0, "Yape"),
        ];
        let r = ReporteVentas::generar(&pedidos, d(2024, 3, 1), d(2024, 3, 3));

        assert_eq!(r.pedidos, 2);
        assert_eq!(r.total, Decimal::new(40, 0));
        assert_eq!(r.ticket_promedio, Decimal::new(20, 0));
        assert_eq!(r.por_metodo_pago[0].metodo, "Yape");
        assert_eq!(r.por_metodo_pago[1].metodo, "Efectivo");
        assert_eq!(
            r.por_dia,
            vec![
                (d(2024, 3, 1), Decimal::new(10, 0)),
                (d(2024, 3, 3), Decimal::new(30, 0)),
            ]
        );
    }

    #[test]
    fn test_reversed_range_and_empty() {
        let r = ReporteVentas::generar(&[], d(2024, 3, 9), d(2024, 3, 1));
        assert_eq!(r.desde, d(2024, 3, 1));
        assert_eq!(r.pedidos, 0);
        assert_eq!(r.ticket_promedio, Decimal::ZERO);
        assert!(r.por_metodo_pago.is_empty());
    }
}
