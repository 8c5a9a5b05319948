//! caja - point of sale and back office from the terminal
//!
//! Every screen of the POS is a subcommand: productos, categorías,
//! clientes, pedidos, boletas, inventario, dashboard, ventas and the
//! POS itself. Talks to the backend through `caja-client`.

mod cli;
mod commands;
mod config;
mod logging;
mod render;

use std::process::ExitCode;

use clap::Parser;

use cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before clap reads env defaults
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let _guard = logging::init(cli.global.log_dir.as_deref());

    match commands::ejecutar(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
