//! Numeric field checks shared by the domain constructors and the config

use muatan_types::ValidationError;

fn ensure_finite(field: &str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NotFinite {
            field: field.to_string(),
        })
    }
}

/// Accept only finite values strictly above zero
pub fn ensure_positive(field: &str, value: f64) -> Result<f64, ValidationError> {
    let value = ensure_finite(field, value)?;
    if value <= 0.0 {
        return Err(ValidationError::NotPositive {
            field: field.to_string(),
            value,
        });
    }
    Ok(value)
}

/// Accept finite values of zero or more
pub fn ensure_non_negative(field: &str, value: f64) -> Result<f64, ValidationError> {
    let value = ensure_finite(field, value)?;
    if value < 0.0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
            value,
        });
    }
    Ok(value)
}

pub fn ensure_name(field: &str, name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName {
            field: field.to_string(),
        });
    }
    Ok(())
}
