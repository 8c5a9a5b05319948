use anyhow::{Context, Result};
use shared::models::MovimientoCreate;
use shared::search::{Buscable, movimientos_filtrados, productos_stock_bajo};

use super::Contexto;
use crate::cli::InventarioCmd;
use crate::render::{Tabla, opcional, opcional_id};

pub async fn run(ctx: &Contexto, cmd: InventarioCmd) -> Result<()> {
    let caja = ctx.sesion().await?;

    match cmd {
        InventarioCmd::Movimientos {
            busqueda,
            producto,
            tipo,
        } => {
            let movimientos = caja.movimientos(producto).await?;
            let mut tabla = Tabla::new(&[
                "ID", "Fecha", "Producto", "Tipo", "Cantidad", "Antes", "Después", "Motivo",
                "Usuario",
            ])
            .alinear_derecha(&[4, 5, 6]);
            for m in movimientos_filtrados(&movimientos, tipo, producto)
                .into_iter()
                .filter(|m| m.coincide(busqueda.texto()))
            {
                tabla.fila(vec![
                    m.id.to_string(),
                    opcional(m.fecha.as_deref()),
                    m.producto_nombre
                        .clone()
                        .unwrap_or_else(|| format!("#{}", m.producto_id)),
                    m.tipo.to_string(),
                    m.cantidad.to_string(),
                    opcional_id(m.stock_anterior.map(i64::from)),
                    opcional_id(m.stock_nuevo.map(i64::from)),
                    opcional(m.motivo.as_deref()),
                    opcional(m.usuario.as_deref()),
                ]);
            }
            println!("{tabla}");
        }
        InventarioCmd::Registrar {
            producto,
            tipo,
            cantidad,
            motivo,
        } => {
            let data = MovimientoCreate {
                producto_id: producto,
                tipo,
                cantidad,
                motivo,
            };
            let m = caja
                .registrar_movimiento(&data)
                .await
                .context("No se pudo registrar el movimiento")?;
            match (m.stock_anterior, m.stock_nuevo) {
                (Some(antes), Some(despues)) => {
                    println!("Movimiento {} registrado: stock {antes} -> {despues}", m.id)
                }
                _ => println!("Movimiento {} registrado", m.id),
            }
        }
        InventarioCmd::StockBajo => {
            let productos = caja.productos().await?;
            let bajos = productos_stock_bajo(&productos, ctx.config.stock_minimo);
            println!("{}", super::productos::tabla(&bajos, ctx.config.stock_minimo));
        }
    }
    Ok(())
}
