//! One module per screen. Each handler loads the session, calls the
//! backend through `caja-client` and prints the result.

mod auth;
mod boletas;
mod categorias;
mod clientes;
mod dashboard;
mod inventario;
mod metodos_pago;
mod pedidos;
mod pos;
mod productos;
mod ventas;

use anyhow::{Context, Result, bail};
use caja_client::{Authenticated, CajaClient, NetworkHttpClient, SessionStorage};

use crate::cli::{Cli, Command};
use crate::config::CliConfig;

/// Authenticated client over the network
pub type Sesion = CajaClient<NetworkHttpClient, Authenticated>;

/// Per-invocation state shared by every command
pub struct Contexto {
    pub config: CliConfig,
    pub storage: SessionStorage,
}

impl Contexto {
    pub fn new(config: CliConfig) -> Self {
        let storage = SessionStorage::new(config.work_dir.clone());
        Self { config, storage }
    }

    pub fn anonimo(&self) -> Result<CajaClient<NetworkHttpClient>> {
        let http = self
            .config
            .client
            .build_http_client()
            .context("No se pudo crear el cliente HTTP")?;
        Ok(CajaClient::new(http))
    }

    /// Authenticated client from `--token` or the stored session.
    ///
    /// A rejected token is reported; the session file is left as is.
    pub async fn sesion(&self) -> Result<Sesion> {
        let base_url = &self.config.client.base_url;
        let token = match &self.config.token {
            Some(token) => token.clone(),
            None => match self.storage.load() {
                Some(stored) if stored.matches(base_url) => stored.token,
                Some(stored) => bail!(
                    "La sesión guardada pertenece a {}. Ejecute `caja login`",
                    stored.base_url
                ),
                None => bail!("No hay sesión activa. Ejecute `caja login`"),
            },
        };

        match self.anonimo()?.restore_session(token).await {
            Ok(sesion) => Ok(sesion),
            Err(e) if e.is_unauthorized() => {
                tracing::warn!(path = %self.storage.path().display(), "Stored token rejected");
                bail!("La sesión expiró o no es válida. Ejecute `caja login`")
            }
            Err(e) => Err(e).context("No se pudo validar la sesión"),
        }
    }
}

pub async fn ejecutar(cli: Cli) -> Result<()> {
    let ctx = Contexto::new(CliConfig::from_args(&cli.global));
    tracing::debug!(
        api = %ctx.config.client.base_url,
        work_dir = %ctx.config.work_dir.display(),
        "caja starting"
    );

    match cli.command {
        Command::Login { email, password } => auth::login(&ctx, &email, &password).await,
        Command::Logout => auth::logout(&ctx).await,
        Command::Me => auth::me(&ctx).await,
        Command::Productos(cmd) => productos::run(&ctx, cmd).await,
        Command::Categorias(cmd) => categorias::run(&ctx, cmd).await,
        Command::Clientes(cmd) => clientes::run(&ctx, cmd).await,
        Command::MetodosPago { busqueda } => metodos_pago::run(&ctx, busqueda).await,
        Command::Pedidos(cmd) => pedidos::run(&ctx, cmd).await,
        Command::Boletas(cmd) => boletas::run(&ctx, cmd).await,
        Command::Inventario(cmd) => inventario::run(&ctx, cmd).await,
        Command::Dashboard => dashboard::run(&ctx).await,
        Command::Ventas(args) => ventas::run(&ctx, args).await,
        Command::Pos(args) => pos::run(&ctx, args).await,
    }
}
