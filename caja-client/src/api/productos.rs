use shared::models::{Producto, ProductoCreate, ProductoUpdate};
use shared::validation::{validate_producto_create, validate_producto_update};

use crate::client::{CajaClient, HttpClient};
use crate::error::ClientResult;
use crate::types::Authenticated;

impl<H: HttpClient> CajaClient<H, Authenticated> {
    pub async fn productos(&self) -> ClientResult<Vec<Producto>> {
        self.http.get("/api/productos").await
    }

    pub async fn producto(&self, id: i64) -> ClientResult<Producto> {
        self.http.get(&format!("/api/productos/{id}")).await
    }

    pub async fn crear_producto(&self, data: &ProductoCreate) -> ClientResult<Producto> {
        validate_producto_create(data)?;
        let producto: Producto = self.http.post("/api/productos", data).await?;
        tracing::info!(id = producto.id, nombre = %producto.nombre, "Producto creado");
        Ok(producto)
    }

    pub async fn actualizar_producto(
        &self,
        id: i64,
        data: &ProductoUpdate,
    ) -> ClientResult<Producto> {
        validate_producto_update(data)?;
        self.http.put(&format!("/api/productos/{id}"), data).await
    }

    pub async fn eliminar_producto(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("/api/productos/{id}")).await?;
        tracing::info!(id, "Producto eliminado");
        Ok(())
    }
}
