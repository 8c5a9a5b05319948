use shared::models::{EstadoPedido, Pedido, PedidoCreate, PedidoEstadoUpdate};
use shared::validation::validate_pedido;

use crate::client::{CajaClient, HttpClient};
use crate::error::{ClientError, ClientResult};
use crate::types::Authenticated;

impl<H: HttpClient> CajaClient<H, Authenticated> {
    pub async fn pedidos(&self) -> ClientResult<Vec<Pedido>> {
        self.http.get("/api/pedidos").await
    }

    pub async fn pedido(&self, id: i64) -> ClientResult<Pedido> {
        self.http.get(&format!("/api/pedidos/{id}")).await
    }

    /// Submit an order. Stock decrement and final totals happen server-side.
    pub async fn crear_pedido(&self, data: &PedidoCreate) -> ClientResult<Pedido> {
        validate_pedido(data)?;
        let pedido: Pedido = self.http.post("/api/pedidos", data).await?;
        tracing::info!(id = pedido.id, total = pedido.total, "Pedido registrado");
        Ok(pedido)
    }

    pub async fn cambiar_estado_pedido(
        &self,
        id: i64,
        estado: EstadoPedido,
    ) -> ClientResult<Pedido> {
        self.http
            .patch(
                &format!("/api/pedidos/{id}/estado"),
                &PedidoEstadoUpdate { estado },
            )
            .await
    }

    /// Cancel an order that is not already final
    pub async fn cancelar_pedido(&self, pedido: &Pedido) -> ClientResult<Pedido> {
        if pedido.estado.es_final() {
            return Err(ClientError::Validation(format!(
                "el pedido {} ya está {}",
                pedido.etiqueta(),
                pedido.estado
            )));
        }
        self.cambiar_estado_pedido(pedido.id, EstadoPedido::Cancelado).await
    }
}
