use anyhow::{Context, Result, anyhow};
use shared::cart::Carrito;
use shared::models::{MetodoPago, Producto};

use super::Contexto;
use crate::cli::{ItemPos, PosArgs};
use crate::render::{Tabla, soles, soles_dec};

pub async fn run(ctx: &Contexto, args: PosArgs) -> Result<()> {
    let caja = ctx.sesion().await?;
    let (productos, metodos) = tokio::try_join!(caja.productos(), caja.metodos_pago())?;

    let metodo = elegir_metodo(&metodos, args.metodo_pago)?;
    let cliente = match args.cliente {
        Some(id) => Some(
            caja.cliente(id)
                .await
                .with_context(|| format!("Cliente {id}"))?,
        ),
        None => None,
    };

    let mut carrito = armar_carrito(ctx, &productos, &args.items)?;
    mostrar(&carrito);
    println!("Pago:     {}", metodo.nombre);
    if let Some(c) = &cliente {
        println!("Cliente:  {}", c.nombre);
    }

    if !args.confirmar {
        println!();
        println!("Vista previa. Use --confirmar para registrar la venta.");
        return Ok(());
    }

    let payload = carrito.a_pedido(metodo.id, cliente.as_ref().map(|c| c.id), args.notas)?;
    let pedido = caja
        .crear_pedido(&payload)
        .await
        .context("No se pudo registrar el pedido")?;
    carrito.vaciar();
    println!();
    println!("Pedido {} registrado por {}", pedido.etiqueta(), soles(pedido.total));

    if args.boleta {
        let boleta = caja
            .emitir_boleta(pedido.id)
            .await
            .with_context(|| {
                format!(
                    "Pedido {} registrado, pero la boleta no se emitió",
                    pedido.etiqueta()
                )
            })?;
        println!("Boleta {} emitida", boleta.numero_completo());
    }
    Ok(())
}

fn elegir_metodo(metodos: &[MetodoPago], id: Option<i64>) -> Result<&MetodoPago> {
    match id {
        Some(id) => metodos
            .iter()
            .find(|m| m.id == id && m.activo)
            .ok_or_else(|| anyhow!("Método de pago {id} no existe o está inactivo")),
        None => metodos
            .iter()
            .find(|m| m.activo)
            .ok_or_else(|| anyhow!("No hay métodos de pago activos")),
    }
}

fn armar_carrito(ctx: &Contexto, productos: &[Producto], items: &[ItemPos]) -> Result<Carrito> {
    let mut carrito = Carrito::con_tasa(ctx.config.tasa_igv);
    for item in items {
        let producto = productos
            .iter()
            .find(|p| p.id == item.producto_id)
            .ok_or_else(|| anyhow!("Producto {} no existe", item.producto_id))?;
        carrito.agregar(producto, item.cantidad)?;
    }
    Ok(carrito)
}

fn mostrar(carrito: &Carrito) {
    let mut tabla =
        Tabla::new(&["Producto", "Cant.", "P. unit.", "Importe"]).alinear_derecha(&[1, 2, 3]);
    for l in carrito.lineas() {
        tabla.fila(vec![
            l.nombre.clone(),
            l.cantidad.to_string(),
            soles(l.precio_unitario),
            soles_dec(l.importe()),
        ]);
    }
    let totales = carrito.totales();
    println!("{tabla}");
    println!();
    println!("Subtotal: {}", soles_dec(totales.subtotal));
    println!("IGV:      {}", soles_dec(totales.igv));
    println!("Total:    {}", soles_dec(totales.total));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metodo(id: i64, activo: bool) -> MetodoPago {
        MetodoPago {
            id,
            nombre: format!("m{id}"),
            activo,
        }
    }

    #[test]
    fn test_payment_method_selection() {
        let metodos = vec![metodo(1, false), metodo(2, true), metodo(3, true)];
        assert_eq!(elegir_metodo(&metodos, None).unwrap().id, 2);
        assert_eq!(elegir_metodo(&metodos, Some(3)).unwrap().id, 3);
        assert!(elegir_metodo(&metodos, Some(1)).is_err());
        assert!(elegir_metodo(&metodos, Some(9)).is_err());
        assert!(elegir_metodo(&[], None).is_err());
    }
}
