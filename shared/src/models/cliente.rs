//! Cliente Model

use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// Identity document type accepted by SUNAT
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TipoDocumento {
    #[default]
    Dni,
    Ruc,
    Ce,
    Pasaporte,
}

impl TipoDocumento {
    /// Expected length of the document number, when fixed
    pub fn longitud(&self) -> Option<usize> {
        match self {
            TipoDocumento::Dni => Some(8),
            TipoDocumento::Ruc => Some(11),
            TipoDocumento::Ce | TipoDocumento::Pasaporte => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TipoDocumento::Dni => "DNI",
            TipoDocumento::Ruc => "RUC",
            TipoDocumento::Ce => "CE",
            TipoDocumento::Pasaporte => "PASAPORTE",
        }
    }
}

impl std::str::FromStr for TipoDocumento {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DNI" => Ok(TipoDocumento::Dni),
            "RUC" => Ok(TipoDocumento::Ruc),
            "CE" => Ok(TipoDocumento::Ce),
            "PASAPORTE" => Ok(TipoDocumento::Pasaporte),
            other => Err(format!("tipo de documento desconocido: {other}")),
        }
    }
}

/// Customer entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cliente {
    pub id: i64,
    #[serde(default)]
    pub tipo_documento: TipoDocumento,
    #[serde(default)]
    pub numero_documento: String,
    pub nombre: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub direccion: Option<String>,
    #[serde(default)]
    pub categoria_cliente_id: Option<i64>,
    #[serde(default = "default_true")]
    pub activo: bool,
}

/// Create customer payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClienteCreate {
    pub tipo_documento: TipoDocumento,
    pub numero_documento: String,
    pub nombre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direccion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoria_cliente_id: Option<i64>,
}

/// Update customer payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClienteUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_documento: Option<TipoDocumento>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numero_documento: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direccion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoria_cliente_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
}
