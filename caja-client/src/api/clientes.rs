use shared::models::{Cliente, ClienteCreate, ClienteUpdate};
use shared::validation::{validate_cliente_create, validate_cliente_update};

use crate::client::{CajaClient, HttpClient};
use crate::error::ClientResult;
use crate::types::Authenticated;

impl<H: HttpClient> CajaClient<H, Authenticated> {
    pub async fn clientes(&self) -> ClientResult<Vec<Cliente>> {
        self.http.get("/api/clientes").await
    }

    pub async fn cliente(&self, id: i64) -> ClientResult<Cliente> {
        self.http.get(&format!("/api/clientes/{id}")).await
    }

    pub async fn crear_cliente(&self, data: &ClienteCreate) -> ClientResult<Cliente> {
        validate_cliente_create(data)?;
        self.http.post("/api/clientes", data).await
    }

    pub async fn actualizar_cliente(&self, id: i64, data: &ClienteUpdate) -> ClientResult<Cliente> {
        validate_cliente_update(data)?;
        self.http.put(&format!("/api/clientes/{id}"), data).await
    }

    pub async fn eliminar_cliente(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("/api/clientes/{id}")).await
    }
}
