use shared::models::{Movimiento, MovimientoCreate};
use shared::validation::validate_movimiento;

use crate::client::{CajaClient, HttpClient};
use crate::error::ClientResult;
use crate::types::Authenticated;

impl<H: HttpClient> CajaClient<H, Authenticated> {
    /// Inventory movements, optionally for a single product
    pub async fn movimientos(&self, producto_id: Option<i64>) -> ClientResult<Vec<Movimiento>> {
        let path = match producto_id {
            Some(id) => format!("/api/inventario/movimientos?producto_id={id}"),
            None => "/api/inventario/movimientos".to_string(),
        };
        self.http.get(&path).await
    }

    pub async fn registrar_movimiento(&self, data: &MovimientoCreate) -> ClientResult<Movimiento> {
        validate_movimiento(data)?;
        let movimiento: Movimiento = self.http.post("/api/inventario/movimientos", data).await?;
        tracing::info!(
            producto_id = movimiento.producto_id,
            tipo = %movimiento.tipo,
            cantidad = movimiento.cantidad,
            "Movimiento registrado"
        );
        Ok(movimiento)
    }
}
