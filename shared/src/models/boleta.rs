//! Boleta Model

use serde::{Deserialize, Serialize};

use crate::money::{de_amount, de_amount_or_zero};

/// State of the electronic document at SUNAT
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum EstadoSunat {
    #[default]
    Pendiente,
    Enviado,
    Aceptado,
    Rechazado,
    Anulado,
}

impl EstadoSunat {
    pub const ALL: [EstadoSunat; 5] = [
        EstadoSunat::Pendiente,
        EstadoSunat::Enviado,
        EstadoSunat::Aceptado,
        EstadoSunat::Rechazado,
        EstadoSunat::Anulado,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoSunat::Pendiente => "pendiente",
            EstadoSunat::Enviado => "enviado",
            EstadoSunat::Aceptado => "aceptado",
            EstadoSunat::Rechazado => "rechazado",
            EstadoSunat::Anulado => "anulado",
        }
    }

    /// Whether the document can (still) be sent to SUNAT
    pub fn puede_enviarse(&self) -> bool {
        matches!(self, EstadoSunat::Pendiente | EstadoSunat::Rechazado)
    }
}

impl std::fmt::Display for EstadoSunat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EstadoSunat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        EstadoSunat::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| format!("estado SUNAT desconocido: {s}"))
    }
}

/// Sales receipt entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Boleta {
    pub id: i64,
    pub serie: String,
    pub correlativo: i64,
    pub pedido_id: i64,
    #[serde(default)]
    pub cliente_id: Option<i64>,
    #[serde(default)]
    pub cliente_nombre: Option<String>,
    #[serde(default)]
    pub fecha_emision: Option<String>,
    #[serde(default, deserialize_with = "de_amount_or_zero")]
    pub subtotal: f64,
    #[serde(default, deserialize_with = "de_amount_or_zero")]
    pub igv: f64,
    #[serde(deserialize_with = "de_amount")]
    pub total: f64,
    #[serde(default)]
    pub estado_sunat: EstadoSunat,
    /// Last message returned by SUNAT (CDR description or rejection cause)
    #[serde(default)]
    pub mensaje_sunat: Option<String>,
}

impl Boleta {
    /// Document number as printed, e.g. `B001-00000042`
    pub fn numero_completo(&self) -> String {
        format!("{}-{:08}", self.serie, self.correlativo)
    }
}

/// Issue receipt payload
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BoletaCreate {
    pub pedido_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boleta_with_null_amounts() {
        let json = r#"{"id": 7, "serie": "B001", "correlativo": 42, "pedido_id": 3,
            "subtotal": null, "igv": null, "total": "11.80", "estado_sunat": "aceptado"}"#;
        let b: Boleta = serde_json::from_str(json).unwrap();
        assert_eq!(b.subtotal, 0.0);
        assert_eq!(b.igv, 0.0);
        assert!((b.total - 11.8).abs() < 1e-9);
        assert_eq!(b.numero_completo(), "B001-00000042");
    }
}
