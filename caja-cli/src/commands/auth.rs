use anyhow::{Context, Result};
use caja_client::StoredSession;

use super::Contexto;
use crate::render;

pub async fn login(ctx: &Contexto, email: &str, password: &str) -> Result<()> {
    let sesion = ctx
        .anonimo()?
        .login(email, password)
        .await
        .context("No se pudo iniciar sesión")?;

    let stored = StoredSession::new(
        ctx.config.client.base_url.clone(),
        sesion.token(),
        sesion.usuario().cloned(),
    );
    ctx.storage
        .save(&stored)
        .with_context(|| {
            format!(
                "No se pudo guardar la sesión en {}",
                ctx.storage.path().display()
            )
        })?;

    let nombre = sesion.usuario().map(|u| u.nombre.as_str()).unwrap_or(email);
    println!("Sesión iniciada: {nombre}");
    Ok(())
}

/// Server logout is best effort; the stored session is always removed.
pub async fn logout(ctx: &Contexto) -> Result<()> {
    match ctx.sesion().await {
        Ok(sesion) => {
            sesion.logout().await;
        }
        Err(e) => tracing::warn!(error = %e, "Skipping server logout"),
    }
    ctx.storage
        .delete()
        .with_context(|| format!("No se pudo borrar {}", ctx.storage.path().display()))?;
    println!("Sesión cerrada");
    Ok(())
}

pub async fn me(ctx: &Contexto) -> Result<()> {
    let usuario = ctx.sesion().await?.me().await?;
    println!("ID:     {}", usuario.id);
    println!("Nombre: {}", usuario.nombre);
    println!("Email:  {}", usuario.email);
    println!("Rol:    {}", render::opcional(usuario.rol.as_deref()));
    Ok(())
}
