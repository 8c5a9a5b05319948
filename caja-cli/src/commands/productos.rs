use anyhow::{Context, Result};
use shared::models::{Producto, ProductoCreate, ProductoUpdate};
use shared::search::filtrar;

use super::Contexto;
use crate::cli::ProductosCmd;
use crate::render::{Tabla, opcional, opcional_id, si_no, soles};

pub async fn run(ctx: &Contexto, cmd: ProductosCmd) -> Result<()> {
    let caja = ctx.sesion().await?;
    let umbral = ctx.config.stock_minimo;

    match cmd {
        ProductosCmd::Listar {
            busqueda,
            stock_bajo,
        } => {
            let productos = caja.productos().await?;
            let mut lista = filtrar(&productos, busqueda.texto());
            if stock_bajo {
                lista.retain(|p| p.activo && p.stock_bajo(umbral));
            }
            println!("{}", tabla(&lista, umbral));
        }
        ProductosCmd::Ver { id } => {
            let p = caja.producto(id).await?;
            detalle(&p, umbral);
        }
        ProductosCmd::Crear {
            nombre,
            precio,
            stock,
            codigo,
            descripcion,
            stock_minimo,
            categoria,
        } => {
            let data = ProductoCreate {
                nombre,
                codigo,
                descripcion,
                precio,
                stock,
                stock_minimo,
                categoria_id: categoria,
                imagen: None,
            };
            let p = caja
                .crear_producto(&data)
                .await
                .context("No se pudo crear el producto")?;
            println!("Producto {} creado: {}", p.id, p.nombre);
        }
        ProductosCmd::Actualizar {
            id,
            nombre,
            precio,
            stock,
            codigo,
            descripcion,
            stock_minimo,
            categoria,
            estado,
        } => {
            let data = ProductoUpdate {
                nombre,
                codigo,
                descripcion,
                precio,
                stock,
                stock_minimo,
                categoria_id: categoria,
                imagen: None,
                activo: estado.activo(),
            };
            let p = caja
                .actualizar_producto(id, &data)
                .await
                .with_context(|| format!("No se pudo actualizar el producto {id}"))?;
            println!("Producto {} actualizado", p.id);
        }
        ProductosCmd::Eliminar { id } => {
            caja.eliminar_producto(id)
                .await
                .with_context(|| format!("No se pudo eliminar el producto {id}"))?;
            println!("Producto {id} eliminado");
        }
    }
    Ok(())
}

pub(super) fn tabla(productos: &[&Producto], umbral: i32) -> Tabla {
    let mut tabla = Tabla::new(&[
        "ID", "Código", "Nombre", "Categoría", "Precio", "Stock", "Activo",
    ])
    .alinear_derecha(&[4, 5]);
    for p in productos {
        let stock = if p.activo && p.stock_bajo(umbral) {
            format!("{} !", p.stock)
        } else {
            p.stock.to_string()
        };
        tabla.fila(vec![
            p.id.to_string(),
            opcional(p.codigo.as_deref()),
            p.nombre.clone(),
            p.categoria_nombre
                .clone()
                .unwrap_or_else(|| opcional_id(p.categoria_id)),
            soles(p.precio),
            stock,
            si_no(p.activo).into(),
        ]);
    }
    tabla
}

fn detalle(p: &Producto, umbral: i32) {
    println!("ID:           {}", p.id);
    println!("Código:       {}", opcional(p.codigo.as_deref()));
    println!("Nombre:       {}", p.nombre);
    println!("Descripción:  {}", opcional(p.descripcion.as_deref()));
    println!("Precio:       {}", soles(p.precio));
    println!("Stock:        {}", p.stock);
    println!(
        "Stock mínimo: {}",
        p.stock_minimo.unwrap_or(umbral)
    );
    println!(
        "Categoría:    {}",
        p.categoria_nombre
            .clone()
            .unwrap_or_else(|| opcional_id(p.categoria_id))
    );
    println!("Activo:       {}", si_no(p.activo));
    if p.activo && p.stock_bajo(umbral) {
        println!("Atención: stock bajo");
    }
}
