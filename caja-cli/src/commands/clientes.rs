use anyhow::{Context, Result};
use shared::models::{Cliente, ClienteCreate, ClienteUpdate};
use shared::search::filtrar;

use super::Contexto;
use crate::cli::ClientesCmd;
use crate::render::{Tabla, opcional, opcional_id, si_no};

pub async fn run(ctx: &Contexto, cmd: ClientesCmd) -> Result<()> {
    let caja = ctx.sesion().await?;

    match cmd {
        ClientesCmd::Listar { busqueda } => {
            let clientes = caja.clientes().await?;
            let mut tabla =
                Tabla::new(&["ID", "Documento", "Nombre", "Email", "Teléfono", "Activo"]);
            for c in filtrar(&clientes, busqueda.texto()) {
                tabla.fila(vec![
                    c.id.to_string(),
                    documento(c),
                    c.nombre.clone(),
                    opcional(c.email.as_deref()),
                    opcional(c.telefono.as_deref()),
                    si_no(c.activo).into(),
                ]);
            }
            println!("{tabla}");
        }
        ClientesCmd::Ver { id } => {
            let c = caja.cliente(id).await?;
            println!("ID:        {}", c.id);
            println!("Documento: {}", documento(&c));
            println!("Nombre:    {}", c.nombre);
            println!("Email:     {}", opcional(c.email.as_deref()));
            println!("Teléfono:  {}", opcional(c.telefono.as_deref()));
            println!("Dirección: {}", opcional(c.direccion.as_deref()));
            println!("Categoría: {}", opcional_id(c.categoria_cliente_id));
            println!("Activo:    {}", si_no(c.activo));
        }
        ClientesCmd::Crear {
            tipo_documento,
            numero_documento,
            nombre,
            email,
            telefono,
            direccion,
            categoria,
        } => {
            let data = ClienteCreate {
                tipo_documento,
                numero_documento,
                nombre,
                email,
                telefono,
                direccion,
                categoria_cliente_id: categoria,
            };
            let c = caja
                .crear_cliente(&data)
                .await
                .context("No se pudo registrar el cliente")?;
            println!("Cliente {} registrado: {}", c.id, c.nombre);
        }
        ClientesCmd::Actualizar {
            id,
            tipo_documento,
            numero_documento,
            nombre,
            email,
            telefono,
            direccion,
            categoria,
            estado,
        } => {
            let data = ClienteUpdate {
                tipo_documento,
                numero_documento,
                nombre,
                email,
                telefono,
                direccion,
                categoria_cliente_id: categoria,
                activo: estado.activo(),
            };
            caja.actualizar_cliente(id, &data)
                .await
                .with_context(|| format!("No se pudo actualizar el cliente {id}"))?;
            println!("Cliente {id} actualizado");
        }
        ClientesCmd::Eliminar { id } => {
            caja.eliminar_cliente(id)
                .await
                .with_context(|| format!("No se pudo eliminar el cliente {id}"))?;
            println!("Cliente {id} eliminado");
        }
    }
    Ok(())
}

fn documento(c: &Cliente) -> String {
    format!("{} {}", c.tipo_documento.as_str(), c.numero_documento)
}
