use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use shared::models::{Boleta, EstadoSunat};
use shared::search::{Buscable, boletas_por_estado};

use super::Contexto;
use crate::cli::BoletasCmd;
use crate::render::{Tabla, opcional, soles};

pub async fn run(ctx: &Contexto, cmd: BoletasCmd) -> Result<()> {
    let caja = ctx.sesion().await?;

    match cmd {
        BoletasCmd::Listar { busqueda, estado } => {
            let boletas = caja.boletas().await?;
            let mut tabla = Tabla::new(&[
                "ID", "Número", "Emisión", "Cliente", "Pedido", "SUNAT", "Total",
            ])
            .alinear_derecha(&[6]);
            for b in seleccionar(&boletas, busqueda.texto(), estado) {
                tabla.fila(vec![
                    b.id.to_string(),
                    b.numero_completo(),
                    opcional(b.fecha_emision.as_deref()),
                    opcional(b.cliente_nombre.as_deref()),
                    b.pedido_id.to_string(),
                    b.estado_sunat.to_string(),
                    soles(b.total),
                ]);
            }
            println!("{tabla}");
        }
        BoletasCmd::Ver { id } => {
            let boleta = caja.boleta(id).await?;
            detalle(&boleta);
        }
        BoletasCmd::Emitir { pedido_id } => {
            let boleta = caja
                .emitir_boleta(pedido_id)
                .await
                .with_context(|| format!("No se pudo emitir la boleta del pedido {pedido_id}"))?;
            println!("Boleta {} emitida por {}", boleta.numero_completo(), soles(boleta.total));
        }
        BoletasCmd::Enviar { id } => {
            let boleta = caja.boleta(id).await?;
            if !boleta.estado_sunat.puede_enviarse() {
                bail!(
                    "La boleta {} está {} y no puede enviarse a SUNAT",
                    boleta.numero_completo(),
                    boleta.estado_sunat
                );
            }
            let boleta = caja
                .enviar_sunat(id)
                .await
                .with_context(|| format!("No se pudo enviar la boleta {id} a SUNAT"))?;
            println!("Boleta {}: {}", boleta.numero_completo(), boleta.estado_sunat);
            if let Some(mensaje) = boleta.mensaje_sunat.as_deref() {
                println!("SUNAT: {mensaje}");
            }
        }
        BoletasCmd::Pdf { id, salida } => {
            let bytes = caja
                .boleta_pdf(id)
                .await
                .with_context(|| format!("No se pudo descargar el PDF de la boleta {id}"))?;
            let salida = salida.unwrap_or_else(|| PathBuf::from(format!("boleta-{id}.pdf")));
            tokio::fs::write(&salida, &bytes)
                .await
                .with_context(|| format!("No se pudo escribir {}", salida.display()))?;
            tracing::info!(path = %salida.display(), bytes = bytes.len(), "PDF guardado");
            println!("PDF guardado en {}", salida.display());
        }
    }
    Ok(())
}

fn seleccionar<'a>(
    boletas: &'a [Boleta],
    texto: &str,
    estado: Option<EstadoSunat>,
) -> Vec<&'a Boleta> {
    let candidatos = match estado {
        Some(e) => boletas_por_estado(boletas, e),
        None => boletas.iter().collect(),
    };
    candidatos.into_iter().filter(|b| b.coincide(texto)).collect()
}

fn detalle(b: &Boleta) {
    println!("Boleta {}", b.numero_completo());
    println!("Emisión:  {}", opcional(b.fecha_emision.as_deref()));
    println!("Pedido:   {}", b.pedido_id);
    println!("Cliente:  {}", opcional(b.cliente_nombre.as_deref()));
    println!("Subtotal: {}", soles(b.subtotal));
    println!("IGV:      {}", soles(b.igv));
    println!("Total:    {}", soles(b.total));
    println!("SUNAT:    {}", b.estado_sunat);
    if let Some(mensaje) = b.mensaje_sunat.as_deref() {
        println!("Mensaje:  {mensaje}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boleta(id: i64, estado_sunat: EstadoSunat) -> Boleta {
        Boleta {
            id,
            serie: "B001".into(),
            correlativo: id,
            pedido_id: id,
            cliente_id: None,
            cliente_nombre: None,
            fecha_emision: None,
            subtotal: 0.0,
            igv: 0.0,
            total: 1.0,
            estado_sunat,
            mensaje_sunat: None,
        }
    }

    #[test]
    fn test_listing_filters_by_sunat_state() {
        let boletas = vec![
            boleta(1, EstadoSunat::Aceptado),
            boleta(2, EstadoSunat::Rechazado),
            boleta(3, EstadoSunat::Aceptado),
        ];
        let ids = |v: Vec<&Boleta>| v.iter().map(|b| b.id).collect::<Vec<_>>();
        assert_eq!(ids(seleccionar(&boletas, "", Some(EstadoSunat::Aceptado))), vec![1, 3]);
        assert_eq!(ids(seleccionar(&boletas, "00000002", None)), vec![2]);
        assert!(seleccionar(&boletas, "00000002", Some(EstadoSunat::Aceptado)).is_empty());
    }
}
