// caja-cli/src/render.rs
// Plain-text tables and value formatting for terminal output

use std::fmt;

use rust_decimal::Decimal;
use shared::money::{format_soles, to_decimal};

/// Placeholder for missing values
pub const VACIO: &str = "-";

/// Column-aligned text table
#[derive(Debug, Clone)]
pub struct Tabla {
    encabezados: Vec<String>,
    filas: Vec<Vec<String>>,
    /// Columns aligned to the right (amounts, quantities)
    derecha: Vec<usize>,
}

impl Tabla {
    pub fn new(encabezados: &[&str]) -> Self {
        Self {
            encabezados: encabezados.iter().map(|e| e.to_string()).collect(),
            filas: Vec::new(),
            derecha: Vec::new(),
        }
    }

    pub fn alinear_derecha(mut self, columnas: &[usize]) -> Self {
        self.derecha = columnas.to_vec();
        self
    }

    pub fn fila(&mut self, celdas: Vec<String>) {
        self.filas.push(celdas);
    }

    fn anchos(&self) -> Vec<usize> {
        let mut anchos: Vec<usize> = self.encabezados.iter().map(|e| e.chars().count()).collect();
        for fila in &self.filas {
            for (i, celda) in fila.iter().enumerate() {
                let n = celda.chars().count();
                match anchos.get_mut(i) {
                    Some(a) => *a = (*a).max(n),
                    None => anchos.push(n),
                }
            }
        }
        anchos
    }

    fn escribir_fila(
        &self,
        f: &mut fmt::Formatter<'_>,
        celdas: &[String],
        anchos: &[usize],
    ) -> fmt::Result {
        let mut linea = String::new();
        for (i, ancho) in anchos.iter().enumerate() {
            let celda = celdas.get(i).map(String::as_str).unwrap_or("");
            let relleno = " ".repeat(ancho.saturating_sub(celda.chars().count()));
            if i > 0 {
                linea.push_str("  ");
            }
            if self.derecha.contains(&i) {
                linea.push_str(&relleno);
                linea.push_str(celda);
            } else {
                linea.push_str(celda);
                linea.push_str(&relleno);
            }
        }
        writeln!(f, "{}", linea.trim_end())
    }
}

impl fmt::Display for Tabla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let anchos = self.anchos();
        self.escribir_fila(f, &self.encabezados, &anchos)?;
        let total: usize = anchos.iter().sum::<usize>() + 2 * anchos.len().saturating_sub(1);
        writeln!(f, "{}", "-".repeat(total))?;
        for fila in &self.filas {
            self.escribir_fila(f, fila, &anchos)?;
        }
        write!(f, "{} registro(s)", self.filas.len())
    }
}

pub fn soles(monto: f64) -> String {
    format_soles(to_decimal(monto))
}

pub fn soles_dec(monto: Decimal) -> String {
    format_soles(monto)
}

pub fn opcional(valor: Option<&str>) -> String {
    valor
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(VACIO)
        .to_string()
}

pub fn opcional_id(valor: Option<i64>) -> String {
    valor.map(|v| v.to_string()).unwrap_or_else(|| VACIO.to_string())
}

pub fn si_no(valor: bool) -> &'static str {
    if valor { "sí" } else { "no" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_alignment() {
        let mut tabla = Tabla::new(&["ID", "Nombre", "Precio"]).alinear_derecha(&[2]);
        tabla.fila(vec!["1".into(), "Ají de Gallina".into(), "S/ 22.00".into()]);
        tabla.fila(vec!["12".into(), "Té".into(), "S/ 3.50".into()]);
        let out = tabla.to_string();
        let lineas: Vec<&str> = out.lines().collect();
        assert_eq!(lineas[0], format!("ID  Nombre{}Precio", " ".repeat(12)));
        assert_eq!(lineas[2], "1   Ají de Gallina  S/ 22.00");
        assert_eq!(lineas[3], format!("12  Té{}S/ 3.50", " ".repeat(15)));
        assert_eq!(lineas[4], "2 registro(s)");
    }

    #[test]
    fn test_optional_values() {
        assert_eq!(opcional(None), VACIO);
        assert_eq!(opcional(Some("  ")), VACIO);
        assert_eq!(opcional(Some("Av. Arequipa 123")), "Av. Arequipa 123");
        assert_eq!(opcional_id(Some(4)), "4");
        assert_eq!(soles(12.5), "S/ 12.50");
    }
}
