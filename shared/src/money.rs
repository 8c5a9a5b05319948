//! Money calculation utilities using rust_decimal for precision
//!
//! Wire values are `f64` in currency units (soles). All arithmetic is done
//! with `Decimal` and converted back to `f64` only for serialization.

use rust_decimal::prelude::*;
use serde::{Deserialize, Deserializer};

/// Rounding precision for monetary values (2 decimal places, half-up)
pub const DECIMAL_PLACES: u32 = 2;

/// IGV (Impuesto General a las Ventas) rate, 18%
pub const TASA_IGV: Decimal = Decimal::from_parts(18, 0, 0, false, 2);

/// Convert a wire value into `Decimal`. Non-finite input maps to zero.
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Round and convert back to `f64` for storage/serialization
pub fn to_f64(value: Decimal) -> f64 {
    round_money(value).to_f64().unwrap_or_default()
}

/// Round half-up to 2 decimal places
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount as soles, e.g. `S/ 12.50`
pub fn format_soles(value: Decimal) -> String {
    format!("S/ {:.2}", round_money(value))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

impl RawAmount {
    fn into_f64<E: serde::de::Error>(self) -> Result<f64, E> {
        match self {
            RawAmount::Number(n) => Ok(n),
            RawAmount::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|e| E::custom(format!("invalid amount {s:?}: {e}"))),
        }
    }
}

/// Deserialize an amount sent either as a JSON number or a numeric string.
///
/// Decimal columns frequently come back as strings (`"12.50"`).
pub fn de_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    RawAmount::deserialize(deserializer)?.into_f64()
}

/// Optional variant of [`de_amount`]; `null` maps to `None`.
pub fn de_amount_opt<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawAmount>::deserialize(deserializer)?
        .map(RawAmount::into_f64)
        .transpose()
}

/// Variant of [`de_amount`] for fields that default to zero; `null` maps to `0.0`.
pub fn de_amount_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(de_amount_opt(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(deserialize_with = "de_amount")]
        precio: f64,
        #[serde(default, deserialize_with = "de_amount_opt")]
        descuento: Option<f64>,
        #[serde(default, deserialize_with = "de_amount_or_zero")]
        recargo: f64,
    }

    #[test]
    fn test_amount_accepts_numbers_and_strings() {
        let a: Row = serde_json::from_str(r#"{"precio": 12.5}"#).unwrap();
        assert_eq!(a.precio, 12.5);
        assert_eq!(a.descuento, None);

        let b: Row = serde_json::from_str(r#"{"precio": "3.40", "descuento": "1"}"#).unwrap();
        assert_eq!(b.precio, 3.4);
        assert_eq!(b.descuento, Some(1.0));

        let c: Row = serde_json::from_str(r#"{"precio": 1, "descuento": null}"#).unwrap();
        assert_eq!(c.descuento, None);
    }

    #[test]
    fn test_defaulted_amount_accepts_null() {
        let a: Row = serde_json::from_str(r#"{"precio": 1, "recargo": null}"#).unwrap();
        assert_eq!(a.recargo, 0.0);
        let b: Row = serde_json::from_str(r#"{"precio": 1}"#).unwrap();
        assert_eq!(b.recargo, 0.0);
        let c: Row = serde_json::from_str(r#"{"precio": 1, "recargo": "0.50"}"#).unwrap();
        assert_eq!(c.recargo, 0.5);
    }

    #[test]
    fn test_amount_rejects_garbage() {
        assert!(serde_json::from_str::<Row>(r#"{"precio": "abc"}"#).is_err());
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_money(Decimal::new(1005, 3)), Decimal::new(101, 2));
        assert_eq!(round_money(Decimal::new(1004, 3)), Decimal::new(100, 2));
        assert!((to_f64(Decimal::new(2345, 3)) - 2.35).abs() < 1e-9);
    }

    #[test]
    fn test_format_soles() {
        assert_eq!(format_soles(Decimal::new(125, 1)), "S/ 12.50");
        assert_eq!(format_soles(Decimal::ZERO), "S/ 0.00");
    }
}
