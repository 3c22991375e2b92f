use crate::utils::error::{CatalogError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(CatalogError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CatalogError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(CatalogError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }
    Ok(())
}

/// Both bounds of a range must be given together, or neither.
pub fn validate_bounds_pair(min: Option<f64>, max: Option<f64>) -> Result<Option<(f64, f64)>> {
    match (min, max) {
        (Some(min), Some(max)) => {
            validate_finite("min", min)?;
            validate_finite("max", max)?;
            Ok(Some((min, max)))
        }
        (None, None) => Ok(None),
        (Some(_), None) => Err(CatalogError::MissingConfig {
            field: "max".to_string(),
        }),
        (None, Some(_)) => Err(CatalogError::MissingConfig {
            field: "min".to_string(),
        }),
    }
}
