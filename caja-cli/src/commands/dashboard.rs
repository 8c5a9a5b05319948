use anyhow::Result;
use shared::dashboard::ResumenDashboard;
use shared::models::EstadoPedido;

use super::Contexto;
use crate::render::{Tabla, soles_dec};

pub async fn run(ctx: &Contexto) -> Result<()> {
    let caja = ctx.sesion().await?;
    let (pedidos, boletas, productos, clientes) = tokio::try_join!(
        caja.pedidos(),
        caja.boletas(),
        caja.productos(),
        caja.clientes()
    )?;

    let resumen = ResumenDashboard::calcular(
        &pedidos,
        &boletas,
        &productos,
        &clientes,
        ctx.config.stock_minimo,
    );
    print!("{}", texto(&resumen));
    Ok(())
}

fn texto(r: &ResumenDashboard) -> String {
    let mut out = String::new();
    out.push_str(&format!("Ventas completadas:   {}\n", soles_dec(r.ventas_total)));
    out.push_str(&format!(
        "Pedidos:              {} pendientes, {} en preparación, {} completados, {} cancelados\n",
        r.pedidos_en(EstadoPedido::Pendiente),
        r.pedidos_en(EstadoPedido::EnPreparacion),
        r.pedidos_en(EstadoPedido::Completado),
        r.pedidos_en(EstadoPedido::Cancelado),
    ));
    out.push_str(&format!(
        "Boletas:              {} emitidas, {} pendientes en SUNAT, {} rechazadas\n",
        r.boletas_emitidas, r.boletas_pendientes_sunat, r.boletas_rechazadas
    ));
    out.push_str(&format!("Clientes activos:     {}\n", r.clientes_activos));
    out.push_str(&format!("Productos activos:    {}\n", r.productos_activos));

    if !r.top_productos.is_empty() {
        let mut tabla = Tabla::new(&["Producto", "Vendidos", "Importe"]).alinear_derecha(&[1, 2]);
        for p in &r.top_productos {
            tabla.fila(vec![p.nombre.clone(), p.cantidad.to_string(), soles_dec(p.importe)]);
        }
        out.push_str(&format!("\nMás vendidos\n{tabla}\n"));
    }

    if !r.stock_bajo.is_empty() {
        let mut tabla = Tabla::new(&["ID", "Producto", "Stock"]).alinear_derecha(&[2]);
        for a in &r.stock_bajo {
            tabla.fila(vec![a.producto_id.to_string(), a.nombre.clone(), a.stock.to_string()]);
        }
        out.push_str(&format!("\nStock bajo\n{tabla}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dashboard_has_no_tables() {
        let r = ResumenDashboard::calcular(&[], &[], &[], &[], 5);
        let out = texto(&r);
        assert!(out.contains("S/ 0.00"));
        assert!(out.contains("0 pendientes"));
        assert!(!out.contains("Más vendidos"));
        assert!(!out.contains("Stock bajo"));
    }
}
