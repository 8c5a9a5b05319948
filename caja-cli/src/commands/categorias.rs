use anyhow::{Context, Result, bail};
use caja_client::api::TipoCategoria;
use shared::models::{CategoriaCreate, CategoriaUpdate};
use shared::search::filtrar;

use super::Contexto;
use crate::cli::{CategoriasCmd, CategoriasTipo};
use crate::render::{Tabla, opcional, si_no};

pub async fn run(ctx: &Contexto, cmd: CategoriasTipo) -> Result<()> {
    let (tipo, cmd) = match cmd {
        CategoriasTipo::Productos(cmd) => (TipoCategoria::Producto, cmd),
        CategoriasTipo::Clientes(cmd) => (TipoCategoria::Cliente, cmd),
    };
    let caja = ctx.sesion().await?;

    match cmd {
        CategoriasCmd::Listar { busqueda } => match tipo {
            TipoCategoria::Producto => {
                let categorias = caja.categorias_producto().await?;
                let mut tabla = Tabla::new(&["ID", "Nombre", "Descripción", "Activo"]);
                for c in filtrar(&categorias, busqueda.texto()) {
                    tabla.fila(vec![
                        c.id.to_string(),
                        c.nombre.clone(),
                        opcional(c.descripcion.as_deref()),
                        si_no(c.activo).into(),
                    ]);
                }
                println!("{tabla}");
            }
            TipoCategoria::Cliente => {
                let categorias = caja.categorias_cliente().await?;
                let mut tabla = Tabla::new(&["ID", "Nombre", "Descripción", "Descuento", "Activo"])
                    .alinear_derecha(&[3]);
                for c in filtrar(&categorias, busqueda.texto()) {
                    tabla.fila(vec![
                        c.id.to_string(),
                        c.nombre.clone(),
                        opcional(c.descripcion.as_deref()),
                        c.descuento_porcentaje
                            .map(|d| format!("{d:.2} %"))
                            .unwrap_or_else(|| opcional(None)),
                        si_no(c.activo).into(),
                    ]);
                }
                println!("{tabla}");
            }
        },
        CategoriasCmd::Crear {
            nombre,
            descripcion,
            descuento,
        } => {
            solo_clientes(tipo, descuento)?;
            let data = CategoriaCreate {
                nombre,
                descripcion,
                descuento_porcentaje: descuento,
            };
            let creada = match tipo {
                TipoCategoria::Producto => caja
                    .crear_categoria_producto(&data)
                    .await
                    .map(|c| (c.id, c.nombre)),
                TipoCategoria::Cliente => caja
                    .crear_categoria_cliente(&data)
                    .await
                    .map(|c| (c.id, c.nombre)),
            };
            let (id, nombre) = creada.context("No se pudo crear la categoría")?;
            println!("Categoría {id} creada: {nombre}");
        }
        CategoriasCmd::Actualizar {
            id,
            nombre,
            descripcion,
            descuento,
            estado,
        } => {
            solo_clientes(tipo, descuento)?;
            let data = CategoriaUpdate {
                nombre,
                descripcion,
                descuento_porcentaje: descuento,
                activo: estado.activo(),
            };
            let resultado = match tipo {
                TipoCategoria::Producto => {
                    caja.actualizar_categoria_producto(id, &data).await.map(|_| ())
                }
                TipoCategoria::Cliente => {
                    caja.actualizar_categoria_cliente(id, &data).await.map(|_| ())
                }
            };
            resultado.with_context(|| format!("No se pudo actualizar la categoría {id}"))?;
            println!("Categoría {id} actualizada");
        }
        CategoriasCmd::Eliminar { id } => {
            caja.eliminar_categoria(tipo, id)
                .await
                .with_context(|| format!("No se pudo eliminar la categoría {id}"))?;
            println!("Categoría {id} eliminada");
        }
    }
    Ok(())
}

fn solo_clientes(tipo: TipoCategoria, descuento: Option<f64>) -> Result<()> {
    if tipo == TipoCategoria::Producto && descuento.is_some() {
        bail!("--descuento solo aplica a categorías de clientes");
    }
    Ok(())
}
