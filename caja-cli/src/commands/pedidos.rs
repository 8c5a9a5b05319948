use anyhow::{Context, Result};
use shared::models::{EstadoPedido, Pedido};
use shared::search::{Buscable, pedidos_por_estado};

use super::Contexto;
use crate::cli::PedidosCmd;
use crate::render::{Tabla, opcional, soles};

pub async fn run(ctx: &Contexto, cmd: PedidosCmd) -> Result<()> {
    let caja = ctx.sesion().await?;

    match cmd {
        PedidosCmd::Listar { busqueda, estado } => {
            let pedidos = caja.pedidos().await?;
            let lista = seleccionar(&pedidos, busqueda.texto(), estado);
            println!("{}", tabla(&lista));
        }
        PedidosCmd::Ver { id } => {
            let pedido = caja.pedido(id).await?;
            detalle(&pedido);
        }
        PedidosCmd::Estado { id, estado } => {
            let pedido = caja
                .cambiar_estado_pedido(id, estado)
                .await
                .with_context(|| format!("No se pudo cambiar el estado del pedido {id}"))?;
            println!("Pedido {} ahora está {}", pedido.etiqueta(), pedido.estado);
        }
        PedidosCmd::Cancelar { id } => {
            let pedido = caja.pedido(id).await?;
            let pedido = caja
                .cancelar_pedido(&pedido)
                .await
                .with_context(|| format!("No se pudo cancelar el pedido {id}"))?;
            println!("Pedido {} cancelado", pedido.etiqueta());
        }
    }
    Ok(())
}

fn seleccionar<'a>(
    pedidos: &'a [Pedido],
    texto: &str,
    estado: Option<EstadoPedido>,
) -> Vec<&'a Pedido> {
    let candidatos = match estado {
        Some(e) => pedidos_por_estado(pedidos, e),
        None => pedidos.iter().collect(),
    };
    candidatos.into_iter().filter(|p| p.coincide(texto)).collect()
}

fn tabla(pedidos: &[&Pedido]) -> Tabla {
    let mut tabla = Tabla::new(&["ID", "Número", "Fecha", "Cliente", "Pago", "Estado", "Total"])
        .alinear_derecha(&[6]);
    for p in pedidos {
        tabla.fila(vec![
            p.id.to_string(),
            p.etiqueta(),
            opcional(p.fecha.as_deref()),
            opcional(p.cliente_nombre.as_deref()),
            opcional(p.metodo_pago_nombre.as_deref()),
            p.estado.to_string(),
            soles(p.total),
        ]);
    }
    tabla
}

fn detalle(p: &Pedido) {
    println!("Pedido {} ({})", p.etiqueta(), p.estado);
    println!("Fecha:   {}", opcional(p.fecha.as_deref()));
    println!("Cliente: {}", opcional(p.cliente_nombre.as_deref()));
    println!("Pago:    {}", opcional(p.metodo_pago_nombre.as_deref()));
    if let Some(notas) = p.notas.as_deref().filter(|n| !n.trim().is_empty()) {
        println!("Notas:   {notas}");
    }
    println!();

    let mut tabla =
        Tabla::new(&["Producto", "Cant.", "P. unit.", "Importe"]).alinear_derecha(&[1, 2, 3]);
    for d in &p.detalles {
        tabla.fila(vec![
            d.producto_nombre
                .clone()
                .unwrap_or_else(|| format!("#{}", d.producto_id)),
            d.cantidad.to_string(),
            soles(d.precio_unitario),
            crate::render::soles_dec(d.importe()),
        ]);
    }
    println!("{tabla}");
    println!();
    println!("Subtotal: {}", soles(p.subtotal));
    println!("IGV:      {}", soles(p.igv));
    println!("Total:    {}", soles(p.total));
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::DetallePedido;

    fn pedido(id: i64, cliente: &str, estado: EstadoPedido) -> Pedido {
        Pedido {
            id,
            numero: None,
            cliente_id: None,
            cliente_nombre: Some(cliente.into()),
            metodo_pago_id: None,
            metodo_pago_nombre: None,
            estado,
            subtotal: 0.0,
            igv: 0.0,
            total: 1.0,
            notas: None,
            detalles: vec![],
            fecha: None,
        }
    }

    #[test]
    fn test_listing_filters_by_state_and_text() {
        let pedidos = vec![
            pedido(1, "Ana Torres", EstadoPedido::Pendiente),
            pedido(2, "Luis Ramos", EstadoPedido::Pendiente),
            pedido(3, "Ana Vega", EstadoPedido::Completado),
        ];
        let ids = |v: Vec<&Pedido>| v.iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids(seleccionar(&pedidos, "", None)), vec![1, 2, 3]);
        assert_eq!(ids(seleccionar(&pedidos, "ana", None)), vec![1, 3]);
        assert_eq!(
            ids(seleccionar(&pedidos, "ana", Some(EstadoPedido::Pendiente))),
            vec![1]
        );
        assert!(seleccionar(&pedidos, "", Some(EstadoPedido::Cancelado)).is_empty());
    }

    #[test]
    fn test_table_lists_every_order() {
        let pedido = Pedido {
            id: 3,
            numero: None,
            cliente_id: None,
            cliente_nombre: Some("Ana Torres".into()),
            metodo_pago_id: Some(1),
            metodo_pago_nombre: Some("Yape".into()),
            estado: EstadoPedido::EnPreparacion,
            subtotal: 10.0,
            igv: 1.8,
            total: 11.8,
            notas: None,
            detalles: vec![DetallePedido {
                producto_id: 1,
                producto_nombre: None,
                cantidad: 2,
                precio_unitario: 5.0,
                subtotal: 10.0,
            }],
            fecha: None,
        };
        assert!(pedido.coincide("ana"));
        let out = tabla(&[&pedido]).to_string();
        assert!(out.contains("#3"));
        assert!(out.contains("en_preparacion"));
        assert!(out.contains("S/ 11.80"));
        assert!(out.ends_with("1 registro(s)"));
    }
}
