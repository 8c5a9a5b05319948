use shared::models::{Boleta, BoletaCreate};

use crate::client::{CajaClient, HttpClient};
use crate::error::{ClientError, ClientResult};
use crate::types::Authenticated;

/// PDF magic number
const PDF_MAGIC: &[u8] = b"%PDF";

impl<H: HttpClient> CajaClient<H, Authenticated> {
    pub async fn boletas(&self) -> ClientResult<Vec<Boleta>> {
        self.http.get("/api/boletas").await
    }

    pub async fn boleta(&self, id: i64) -> ClientResult<Boleta> {
        self.http.get(&format!("/api/boletas/{id}")).await
    }

    /// Issue the receipt for an order. Numbering is assigned server-side.
    pub async fn emitir_boleta(&self, pedido_id: i64) -> ClientResult<Boleta> {
        let boleta: Boleta = self
            .http
            .post("/api/boletas", &BoletaCreate { pedido_id })
            .await?;
        tracing::info!(boleta = %boleta.numero_completo(), pedido_id, "Boleta emitida");
        Ok(boleta)
    }

    /// Ask the backend to send the document to SUNAT; returns the updated boleta
    pub async fn enviar_sunat(&self, id: i64) -> ClientResult<Boleta> {
        let boleta: Boleta = self
            .http
            .post_empty(&format!("/api/boletas/{id}/sunat"))
            .await?;
        tracing::info!(
            boleta = %boleta.numero_completo(),
            estado = %boleta.estado_sunat,
            "Boleta enviada a SUNAT"
        );
        Ok(boleta)
    }

    /// Printable PDF of the receipt
    pub async fn boleta_pdf(&self, id: i64) -> ClientResult<Vec<u8>> {
        let bytes = self.http.get_bytes(&format!("/api/boletas/{id}/pdf")).await?;
        if !bytes.starts_with(PDF_MAGIC) {
            return Err(ClientError::InvalidResponse(format!(
                "boleta {id}: la respuesta no es un PDF"
            )));
        }
        Ok(bytes)
    }
}
