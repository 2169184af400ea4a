use crate::utils::error::{MortgageError, Result};

pub fn validate_positive_amount(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(MortgageError::InvalidArgument {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "must be a finite number".to_string(),
        });
    }
    if value <= 0.0 {
        return Err(MortgageError::InvalidArgument {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "must be a positive number greater than 0".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range(field_name: &str, value: f64, min: f64, max: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(MortgageError::InvalidArgument {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "must be a finite number".to_string(),
        });
    }
    if value < min || value > max {
        return Err(MortgageError::InvalidArgument {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_period_years(field_name: &str, value: f64) -> Result<()> {
    validate_positive_amount(field_name, value)?;
    if value >= 100.0 {
        return Err(MortgageError::InvalidArgument {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "must be less than 100 years".to_string(),
        });
    }
    Ok(())
}

/// Zero counts as "not provided" for optional inputs; only negative and
/// non-finite values are rejected.
pub fn validate_optional_amount(field_name: &str, value: Option<f64>) -> Result<Option<f64>> {
    match value {
        None => Ok(None),
        Some(v) if v == 0.0 => Ok(None),
        Some(v) => {
            validate_positive_amount(field_name, v)?;
            Ok(Some(v))
        }
    }
}

pub fn validate_down_payment_price(field_name: &str, value: f64, price: f64) -> Result<()> {
    validate_positive_amount(field_name, value)?;
    if value >= price {
        return Err(MortgageError::InvalidArgument {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "must be less than the property price".to_string(),
        });
    }
    Ok(())
}
