use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use shared::ventas::ReporteVentas;

use super::Contexto;
use crate::cli::VentasArgs;
use crate::render::{Tabla, soles_dec};

pub async fn run(ctx: &Contexto, args: VentasArgs) -> Result<()> {
    let (desde, hasta) = rango(&args, Local::now().date_naive());
    let pedidos = ctx.sesion().await?.pedidos().await?;
    let reporte = ReporteVentas::generar(&pedidos, desde, hasta);
    print!("{}", texto(&reporte));
    Ok(())
}

/// Missing bounds default to the current month up to today
fn rango(args: &VentasArgs, hoy: NaiveDate) -> (NaiveDate, NaiveDate) {
    let hasta = args.hasta.unwrap_or(hoy);
    let desde = args.desde.unwrap_or_else(|| primero_del_mes(hasta));
    (desde, hasta)
}

fn primero_del_mes(dia: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(dia.year(), dia.month(), 1).unwrap_or(dia)
}

fn texto(r: &ReporteVentas) -> String {
    let mut out = format!("Ventas del {} al {}\n\n", r.desde, r.hasta);
    out.push_str(&format!("Pedidos completados: {}\n", r.pedidos));
    out.push_str(&format!("Subtotal:            {}\n", soles_dec(r.subtotal)));
    out.push_str(&format!("IGV:                 {}\n", soles_dec(r.igv)));
    out.push_str(&format!("Total:               {}\n", soles_dec(r.total)));
    out.push_str(&format!("Ticket promedio:     {}\n", soles_dec(r.ticket_promedio)));

    if !r.por_metodo_pago.is_empty() {
        let mut tabla = Tabla::new(&["Método", "Pedidos", "Total"]).alinear_derecha(&[1, 2]);
        for v in &r.por_metodo_pago {
            tabla.fila(vec![v.metodo.clone(), v.pedidos.to_string(), soles_dec(v.total)]);
        }
        out.push_str(&format!("\nPor método de pago\n{tabla}\n"));
    }

    if !r.por_dia.is_empty() {
        let mut tabla = Tabla::new(&["Día", "Total"]).alinear_derecha(&[1]);
        for (dia, total) in &r.por_dia {
            tabla.fila(vec![dia.to_string(), soles_dec(*total)]);
        }
        out.push_str(&format!("\nPor día\n{tabla}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fecha(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_default_range_is_current_month() {
        let args = VentasArgs {
            desde: None,
            hasta: None,
        };
        assert_eq!(
            rango(&args, fecha("2024-06-17")),
            (fecha("2024-06-01"), fecha("2024-06-17"))
        );

        let args = VentasArgs {
            desde: Some(fecha("2024-01-10")),
            hasta: None,
        };
        assert_eq!(rango(&args, fecha("2024-06-17")).0, fecha("2024-01-10"));
    }

    #[test]
    fn test_empty_report() {
        let r = ReporteVentas::generar(&[], fecha("2024-06-01"), fecha("2024-06-30"));
        let out = texto(&r);
        assert!(out.starts_with("Ventas del 2024-06-01 al 2024-06-30"));
        assert!(out.contains("Pedidos completados: 0"));
        assert!(!out.contains("Por día"));
    }
}
