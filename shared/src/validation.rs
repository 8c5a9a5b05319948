//! Input validation helpers
//!
//! Cheap checks run before a payload leaves the client. The server
//! re-validates everything.

use crate::error::ValidationError;
use crate::models::{
    CategoriaCreate, CategoriaUpdate, ClienteCreate, ClienteUpdate, MovimientoCreate,
    PedidoCreate, ProductoCreate, ProductoUpdate, TipoDocumento, TipoMovimiento,
};

/// Entity names: product, category, customer
pub const MAX_NAME_LEN: usize = 200;

/// Notes, descriptions, reasons
pub const MAX_NOTE_LEN: usize = 500;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

type Result<T = ()> = std::result::Result<T, ValidationError>;

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &'static str, max_len: usize) -> Result {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "no puede estar vacío"));
    }
    validate_len(value, field, max_len)
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(value: Option<&str>, field: &'static str, max_len: usize) -> Result {
    match value {
        Some(v) => validate_len(v, field, max_len),
        None => Ok(()),
    }
}

fn validate_len(value: &str, field: &'static str, max_len: usize) -> Result {
    let len = value.chars().count();
    if len > max_len {
        return Err(ValidationError::new(
            field,
            format!("demasiado largo ({len} caracteres, máximo {max_len})"),
        ));
    }
    Ok(())
}

fn validate_amount(value: f64, field: &'static str) -> Result {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::new(
            field,
            format!("debe ser un número no negativo, recibido {value}"),
        ));
    }
    Ok(())
}

fn validate_non_negative(value: i32, field: &'static str) -> Result {
    if value < 0 {
        return Err(ValidationError::new(field, format!("no puede ser negativo ({value})")));
    }
    Ok(())
}

pub fn validate_documento(tipo: TipoDocumento, numero: &str) -> Result {
    let numero = numero.trim();
    if numero.is_empty() {
        return Err(ValidationError::new("numero_documento", "no puede estar vacío"));
    }
    if let Some(len) = tipo.longitud()
        && (numero.len() != len || !numero.chars().all(|c| c.is_ascii_digit()))
    {
        return Err(ValidationError::new(
            "numero_documento",
            format!("{} debe tener {len} dígitos", tipo.as_str()),
        ));
    }
    Ok(())
}

pub fn validate_producto_create(p: &ProductoCreate) -> Result {
    validate_required_text(&p.nombre, "nombre", MAX_NAME_LEN)?;
    validate_optional_text(p.descripcion.as_deref(), "descripcion", MAX_NOTE_LEN)?;
    validate_amount(p.precio, "precio")?;
    validate_non_negative(p.stock, "stock")?;
    if let Some(min) = p.stock_minimo {
        validate_non_negative(min, "stock_minimo")?;
    }
    Ok(())
}

pub fn validate_producto_update(p: &ProductoUpdate) -> Result {
    if let Some(nombre) = &p.nombre {
        validate_required_text(nombre, "nombre", MAX_NAME_LEN)?;
    }
    validate_optional_text(p.descripcion.as_deref(), "descripcion", MAX_NOTE_LEN)?;
    if let Some(precio) = p.precio {
        validate_amount(precio, "precio")?;
    }
    if let Some(stock) = p.stock {
        validate_non_negative(stock, "stock")?;
    }
    Ok(())
}

pub fn validate_categoria_create(c: &CategoriaCreate) -> Result {
    validate_required_text(&c.nombre, "nombre", MAX_NAME_LEN)?;
    validate_optional_text(c.descripcion.as_deref(), "descripcion", MAX_NOTE_LEN)?;
    if let Some(d) = c.descuento_porcentaje
        && !(0.0..=100.0).contains(&d)
    {
        return Err(ValidationError::new(
            "descuento_porcentaje",
            "debe estar entre 0 y 100",
        ));
    }
    Ok(())
}

pub fn validate_categoria_update(c: &CategoriaUpdate) -> Result {
    if let Some(nombre) = &c.nombre {
        validate_required_text(nombre, "nombre", MAX_NAME_LEN)?;
    }
    validate_optional_text(c.descripcion.as_deref(), "descripcion", MAX_NOTE_LEN)
}

pub fn validate_cliente_create(c: &ClienteCreate) -> Result {
    validate_required_text(&c.nombre, "nombre", MAX_NAME_LEN)?;
    validate_documento(c.tipo_documento, &c.numero_documento)?;
    validate_optional_text(c.email.as_deref(), "email", MAX_EMAIL_LEN)?;
    validate_optional_text(c.direccion.as_deref(), "direccion", MAX_NOTE_LEN)
}

pub fn validate_cliente_update(c: &ClienteUpdate) -> Result {
    if let Some(nombre) = &c.nombre {
        validate_required_text(nombre, "nombre", MAX_NAME_LEN)?;
    }
    match (c.tipo_documento, &c.numero_documento) {
        (Some(tipo), Some(numero)) => validate_documento(tipo, numero)?,
        // Type unknown here; the server checks the length against the stored one.
        (None, Some(numero)) => validate_required_text(numero, "numero_documento", MAX_NAME_LEN)?,
        _ => {}
    }
    validate_optional_text(c.email.as_deref(), "email", MAX_EMAIL_LEN)
}

pub fn validate_movimiento(m: &MovimientoCreate) -> Result {
    match m.tipo {
        TipoMovimiento::Entrada | TipoMovimiento::Salida if m.cantidad <= 0 => Err(
            ValidationError::new("cantidad", format!("debe ser mayor que cero ({})", m.cantidad)),
        ),
        TipoMovimiento::Ajuste => validate_non_negative(m.cantidad, "cantidad"),
        _ => Ok(()),
    }?;
    validate_optional_text(m.motivo.as_deref(), "motivo", MAX_NOTE_LEN)
}

pub fn validate_pedido(p: &PedidoCreate) -> Result {
    if p.detalles.is_empty() {
        return Err(ValidationError::new("detalles", "el pedido no tiene productos"));
    }
    for d in &p.detalles {
        if d.cantidad <= 0 {
            return Err(ValidationError::new(
                "cantidad",
                format!("producto {}: cantidad {} no válida", d.producto_id, d.cantidad),
            ));
        }
        validate_amount(d.precio_unitario, "precio_unitario")?;
    }
    validate_optional_text(p.notas.as_deref(), "notas", MAX_NOTE_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_producto_rules() {
        let mut p = ProductoCreate {
            nombre: "Empanada".into(),
            precio: 6.5,
            stock: 10,
            ..Default::default()
        };
        assert!(validate_producto_create(&p).is_ok());

        p.precio = -1.0;
        assert_eq!(validate_producto_create(&p).unwrap_err().campo, "precio");

        p.precio = f64::NAN;
        assert!(validate_producto_create(&p).is_err());

        p.precio = 1.0;
        p.nombre = "   ".into();
        assert_eq!(validate_producto_create(&p).unwrap_err().campo, "nombre");
    }

    #[test]
    fn test_documento_lengths() {
        assert!(validate_documento(TipoDocumento::Dni, "12345678").is_ok());
        assert!(validate_documento(TipoDocumento::Dni, "1234567").is_err());
        assert!(validate_documento(TipoDocumento::Ruc, "20123456789").is_ok());
        assert!(validate_documento(TipoDocumento::Ruc, "2012345678A").is_err());
        assert!(validate_documento(TipoDocumento::Pasaporte, "X123").is_ok());
    }

    #[test]
    fn test_cliente_update_number_without_type() {
        let solo_numero = ClienteUpdate {
            numero_documento: Some("20123456789".into()),
            ..Default::default()
        };
        assert!(validate_cliente_update(&solo_numero).is_ok());

        let vacio = ClienteUpdate {
            numero_documento: Some("  ".into()),
            ..Default::default()
        };
        assert_eq!(validate_cliente_update(&vacio).unwrap_err().campo, "numero_documento");

        let dni_largo = ClienteUpdate {
            tipo_documento: Some(TipoDocumento::Dni),
            numero_documento: Some("20123456789".into()),
            ..Default::default()
        };
        assert!(validate_cliente_update(&dni_largo).is_err());
    }

    #[test]
    fn test_movimiento_quantity() {
        let mut m = MovimientoCreate {
            producto_id: 1,
            tipo: TipoMovimiento::Entrada,
            cantidad: 0,
            motivo: None,
        };
        assert!(validate_movimiento(&m).is_err());
        m.tipo = TipoMovimiento::Ajuste;
        assert!(validate_movimiento(&m).is_ok());
        m.cantidad = -3;
        assert!(validate_movimiento(&m).is_err());
        m.tipo = TipoMovimiento::Salida;
        m.cantidad = 2;
        assert!(validate_movimiento(&m).is_ok());
    }

    #[test]
    fn test_empty_pedido_rejected() {
        let p = PedidoCreate {
            cliente_id: None,
            metodo_pago_id: 1,
            detalles: vec![],
            subtotal: 0.0,
            igv: 0.0,
            total: 0.0,
            notas: None,
        };
        assert_eq!(validate_pedido(&p).unwrap_err().campo, "detalles");
    }
}
