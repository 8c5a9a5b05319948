use shared::models::MetodoPago;

use crate::client::{CajaClient, HttpClient};
use crate::error::ClientResult;
use crate::types::Authenticated;

impl<H: HttpClient> CajaClient<H, Authenticated> {
    pub async fn metodos_pago(&self) -> ClientResult<Vec<MetodoPago>> {
        self.http.get("/api/metodos-pago").await
    }
}
