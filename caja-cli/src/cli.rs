//! Command line definition (clap derive)

use std::path::PathBuf;
use std::str::FromStr;

use caja_client::config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use shared::models::{EstadoPedido, EstadoSunat, TipoDocumento, TipoMovimiento};
use shared::search::STOCK_MINIMO_POR_DEFECTO;

const AFTER_HELP: &str = "\
Environment:
  CAJA_API_URL       Backend base URL
  CAJA_API_TOKEN     Bearer token (skips the stored session)
  CAJA_WORK_DIR      Session directory (default ~/.caja)
  CAJA_TIMEOUT_SECS  Request timeout
  CAJA_TASA_IGV      IGV rate used by the POS (default 0.18)
  CAJA_STOCK_MINIMO  Low-stock threshold (default 5)
  CAJA_LOG_DIR       Also write a daily log file here
  RUST_LOG           Log filter";

#[derive(Parser, Debug)]
#[command(name = "caja", version, about = "Punto de venta y back-office")]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    #[arg(long, global = true, env = "CAJA_API_URL", default_value = DEFAULT_BASE_URL)]
    pub api_url: String,

    #[arg(long, global = true, env = "CAJA_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[arg(long, global = true, env = "CAJA_WORK_DIR")]
    pub work_dir: Option<PathBuf>,

    #[arg(long, global = true, env = "CAJA_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    #[arg(
        long,
        global = true,
        env = "CAJA_TASA_IGV",
        default_value = "0.18",
        value_parser = parse_tasa
    )]
    pub tasa_igv: Decimal,

    #[arg(
        long,
        global = true,
        env = "CAJA_STOCK_MINIMO",
        default_value_t = STOCK_MINIMO_POR_DEFECTO
    )]
    pub stock_minimo: i32,

    #[arg(long, global = true, env = "CAJA_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Iniciar sesión y guardar el token
    Login {
        #[arg(long, env = "CAJA_EMAIL")]
        email: String,
        #[arg(long, env = "CAJA_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Cerrar la sesión guardada
    Logout,
    /// Usuario de la sesión actual
    Me,
    /// Catálogo de productos
    #[command(subcommand)]
    Productos(ProductosCmd),
    /// Categorías de productos y de clientes
    #[command(subcommand)]
    Categorias(CategoriasTipo),
    /// Cartera de clientes
    #[command(subcommand)]
    Clientes(ClientesCmd),
    /// Métodos de pago disponibles
    MetodosPago {
        #[command(flatten)]
        busqueda: Busqueda,
    },
    /// Pedidos registrados
    #[command(subcommand)]
    Pedidos(PedidosCmd),
    /// Boletas electrónicas
    #[command(subcommand)]
    Boletas(BoletasCmd),
    /// Movimientos de inventario
    #[command(subcommand)]
    Inventario(InventarioCmd),
    /// Resumen del negocio
    Dashboard,
    /// Reporte de ventas por rango de fechas
    Ventas(VentasArgs),
    /// Registrar una venta
    Pos(PosArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct Busqueda {
    /// Texto a buscar (sin distinguir mayúsculas)
    #[arg(long)]
    pub buscar: Option<String>,
}

impl Busqueda {
    pub fn texto(&self) -> &str {
        self.buscar.as_deref().unwrap_or("")
    }
}

#[derive(Subcommand, Debug)]
pub enum ProductosCmd {
    Listar {
        #[command(flatten)]
        busqueda: Busqueda,
        /// Solo productos con stock bajo
        #[arg(long)]
        stock_bajo: bool,
    },
    Ver {
        id: i64,
    },
    Crear {
        #[arg(long)]
        nombre: String,
        #[arg(long)]
        precio: f64,
        #[arg(long, default_value_t = 0)]
        stock: i32,
        #[arg(long)]
        codigo: Option<String>,
        #[arg(long)]
        descripcion: Option<String>,
        /// Stock mínimo propio del producto
        #[arg(long = "minimo")]
        stock_minimo: Option<i32>,
        #[arg(long)]
        categoria: Option<i64>,
    },
    Actualizar {
        id: i64,
        #[arg(long)]
        nombre: Option<String>,
        #[arg(long)]
        precio: Option<f64>,
        #[arg(long)]
        stock: Option<i32>,
        #[arg(long)]
        codigo: Option<String>,
        #[arg(long)]
        descripcion: Option<String>,
        /// Stock mínimo propio del producto
        #[arg(long = "minimo")]
        stock_minimo: Option<i32>,
        #[arg(long)]
        categoria: Option<i64>,
        #[command(flatten)]
        estado: Activacion,
    },
    Eliminar {
        id: i64,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct Activacion {
    #[arg(long, conflicts_with = "desactivar")]
    pub activar: bool,
    #[arg(long)]
    pub desactivar: bool,
}

impl Activacion {
    pub fn activo(&self) -> Option<bool> {
        match (self.activar, self.desactivar) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum CategoriasTipo {
    /// Categorías del catálogo
    #[command(subcommand)]
    Productos(CategoriasCmd),
    /// Categorías de clientes (con descuento)
    #[command(subcommand)]
    Clientes(CategoriasCmd),
}

#[derive(Subcommand, Debug)]
pub enum CategoriasCmd {
    Listar {
        #[command(flatten)]
        busqueda: Busqueda,
    },
    Crear {
        #[arg(long)]
        nombre: String,
        #[arg(long)]
        descripcion: Option<String>,
        /// Porcentaje de descuento (solo clientes)
        #[arg(long)]
        descuento: Option<f64>,
    },
    Actualizar {
        id: i64,
        #[arg(long)]
        nombre: Option<String>,
        #[arg(long)]
        descripcion: Option<String>,
        #[arg(long)]
        descuento: Option<f64>,
        #[command(flatten)]
        estado: Activacion,
    },
    Eliminar {
        id: i64,
    },
}

#[derive(Subcommand, Debug)]
pub enum ClientesCmd {
    Listar {
        #[command(flatten)]
        busqueda: Busqueda,
    },
    Ver {
        id: i64,
    },
    Crear {
        /// DNI, RUC, CE o PASAPORTE
        #[arg(long, default_value = "DNI")]
        tipo_documento: TipoDocumento,
        #[arg(long)]
        numero_documento: String,
        #[arg(long)]
        nombre: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        telefono: Option<String>,
        #[arg(long)]
        direccion: Option<String>,
        #[arg(long)]
        categoria: Option<i64>,
    },
    Actualizar {
        id: i64,
        #[arg(long)]
        tipo_documento: Option<TipoDocumento>,
        #[arg(long)]
        numero_documento: Option<String>,
        #[arg(long)]
        nombre: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        telefono: Option<String>,
        #[arg(long)]
        direccion: Option<String>,
        #[arg(long)]
        categoria: Option<i64>,
        #[command(flatten)]
        estado: Activacion,
    },
    Eliminar {
        id: i64,
    },
}

#[derive(Subcommand, Debug)]
pub enum PedidosCmd {
    Listar {
        #[command(flatten)]
        busqueda: Busqueda,
        /// pendiente, en_preparacion, completado o cancelado
        #[arg(long)]
        estado: Option<EstadoPedido>,
    },
    Ver {
        id: i64,
    },
    /// Cambiar el estado de un pedido
    Estado {
        id: i64,
        estado: EstadoPedido,
    },
    Cancelar {
        id: i64,
    },
}

#[derive(Subcommand, Debug)]
pub enum BoletasCmd {
    Listar {
        #[command(flatten)]
        busqueda: Busqueda,
        /// pendiente, enviado, aceptado, rechazado o anulado
        #[arg(long)]
        estado: Option<EstadoSunat>,
    },
    Ver {
        id: i64,
    },
    /// Emitir la boleta de un pedido
    Emitir {
        pedido_id: i64,
    },
    /// Enviar la boleta a SUNAT
    Enviar {
        id: i64,
    },
    /// Descargar el PDF de la boleta
    Pdf {
        id: i64,
        #[arg(long)]
        salida: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum InventarioCmd {
    /// Historial de movimientos
    Movimientos {
        #[command(flatten)]
        busqueda: Busqueda,
        #[arg(long)]
        producto: Option<i64>,
        /// entrada, salida o ajuste
        #[arg(long)]
        tipo: Option<TipoMovimiento>,
    },
    /// Registrar una entrada, salida o ajuste de stock
    Registrar {
        #[arg(long)]
        producto: i64,
        #[arg(long)]
        tipo: TipoMovimiento,
        #[arg(long)]
        cantidad: i32,
        #[arg(long)]
        motivo: Option<String>,
    },
    /// Productos en o por debajo del stock mínimo
    StockBajo,
}

#[derive(Args, Debug, Clone)]
pub struct VentasArgs {
    /// Fecha inicial (AAAA-MM-DD), por defecto el primer día del mes
    #[arg(long)]
    pub desde: Option<NaiveDate>,
    /// Fecha final (AAAA-MM-DD), por defecto hoy
    #[arg(long)]
    pub hasta: Option<NaiveDate>,
}

#[derive(Args, Debug, Clone)]
pub struct PosArgs {
    /// Línea de venta como <producto_id>:<cantidad>, repetible
    #[arg(long = "item", required = true)]
    pub items: Vec<ItemPos>,
    /// Método de pago; por defecto el primero activo
    #[arg(long)]
    pub metodo_pago: Option<i64>,
    #[arg(long)]
    pub cliente: Option<i64>,
    #[arg(long)]
    pub notas: Option<String>,
    /// Emitir la boleta después de registrar el pedido
    #[arg(long)]
    pub boleta: bool,
    /// Registrar la venta; sin esta opción solo se muestra el carrito
    #[arg(long)]
    pub confirmar: bool,
}

/// One `--item id:cantidad` argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemPos {
    pub producto_id: i64,
    pub cantidad: i32,
}

impl FromStr for ItemPos {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, cantidad) = match s.split_once(':') {
            Some((id, cantidad)) => (id.trim(), cantidad.trim()),
            None => (s.trim(), "1"),
        };
        let producto_id = id
            .parse()
            .map_err(|_| format!("producto inválido: '{id}'"))?;
        let cantidad = cantidad
            .parse()
            .map_err(|_| format!("cantidad inválida: '{cantidad}'"))?;
        Ok(Self {
            producto_id,
            cantidad,
        })
    }
}

fn parse_tasa(s: &str) -> Result<Decimal, String> {
    let tasa = Decimal::from_str(s.trim()).map_err(|e| format!("tasa inválida '{s}': {e}"))?;
    if tasa.is_sign_negative() || tasa >= Decimal::ONE {
        return Err(format!("la tasa debe estar entre 0 y 1: {s}"));
    }
    Ok(tasa)
}
