use shared::models::{CategoriaCliente, CategoriaCreate, CategoriaProducto, CategoriaUpdate};
use shared::validation::{validate_categoria_create, validate_categoria_update};

use crate::client::{CajaClient, HttpClient};
use crate::error::ClientResult;
use crate::types::Authenticated;

/// Which category list an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipoCategoria {
    Producto,
    Cliente,
}

impl TipoCategoria {
    pub fn base_path(&self) -> &'static str {
        match self {
            TipoCategoria::Producto => "/api/categorias",
            TipoCategoria::Cliente => "/api/categorias-clientes",
        }
    }
}

impl<H: HttpClient> CajaClient<H, Authenticated> {
    pub async fn categorias_producto(&self) -> ClientResult<Vec<CategoriaProducto>> {
        self.http.get(TipoCategoria::Producto.base_path()).await
    }

    pub async fn categorias_cliente(&self) -> ClientResult<Vec<CategoriaCliente>> {
        self.http.get(TipoCategoria::Cliente.base_path()).await
    }

    pub async fn crear_categoria_producto(
        &self,
        data: &CategoriaCreate,
    ) -> ClientResult<CategoriaProducto> {
        validate_categoria_create(data)?;
        self.http.post(TipoCategoria::Producto.base_path(), data).await
    }

    pub async fn crear_categoria_cliente(
        &self,
        data: &CategoriaCreate,
    ) -> ClientResult<CategoriaCliente> {
        validate_categoria_create(data)?;
        self.http.post(TipoCategoria::Cliente.base_path(), data).await
    }

    pub async fn actualizar_categoria_producto(
        &self,
        id: i64,
        data: &CategoriaUpdate,
    ) -> ClientResult<CategoriaProducto> {
        validate_categoria_update(data)?;
        let path = format!("{}/{id}", TipoCategoria::Producto.base_path());
        self.http.put(&path, data).await
    }

    pub async fn actualizar_categoria_cliente(
        &self,
        id: i64,
        data: &CategoriaUpdate,
    ) -> ClientResult<CategoriaCliente> {
        validate_categoria_update(data)?;
        let path = format!("{}/{id}", TipoCategoria::Cliente.base_path());
        self.http.put(&path, data).await
    }

    pub async fn eliminar_categoria(&self, tipo: TipoCategoria, id: i64) -> ClientResult<()> {
        self.http
            .delete(&format!("{}/{id}", tipo.base_path()))
            .await
    }
}
