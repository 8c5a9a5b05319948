use anyhow::Result;
use shared::models::MetodoPago;
use shared::search::filtrar;

use super::Contexto;
use crate::cli::Busqueda;
use crate::render::{Tabla, si_no};

pub async fn run(ctx: &Contexto, busqueda: Busqueda) -> Result<()> {
    let metodos = ctx.sesion().await?.metodos_pago().await?;
    println!("{}", tabla(&filtrar(&metodos, busqueda.texto())));
    Ok(())
}

fn tabla(metodos: &[&MetodoPago]) -> Tabla {
    let mut tabla = Tabla::new(&["ID", "Método", "Activo"]);
    for m in metodos {
        tabla.fila(vec![m.id.to_string(), m.nombre.clone(), si_no(m.activo).into()]);
    }
    tabla
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_narrows_methods() {
        let metodos = vec![
            MetodoPago { id: 1, nombre: "Efectivo".into(), activo: true },
            MetodoPago { id: 2, nombre: "Yape".into(), activo: true },
            MetodoPago { id: 3, nombre: "Tarjeta".into(), activo: false },
        ];
        let out = tabla(&filtrar(&metodos, "YAPE")).to_string();
        assert!(out.contains("Yape"));
        assert!(!out.contains("Efectivo"));
        assert!(out.ends_with("1 registro(s)"));
    }
}
