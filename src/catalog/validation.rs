use crate::domain::ProductFields;

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Field-level checks applied to create and full-update payloads. The first
/// failing check wins.
pub fn validate_required_fields(fields: &ProductFields) -> Result<(), ValidationError> {
    if fields.name.is_empty() {
        return Err(ValidationError::new("name is required"));
    }
    if fields.code_value.is_empty() {
        return Err(ValidationError::new("code_value is required"));
    }
    if fields.expiration.is_empty() {
        return Err(ValidationError::new("expiration is required"));
    }
    if fields.quantity <= 0 {
        return Err(ValidationError::new("quantity must be greater than 0"));
    }
    if fields.price <= 0.0 {
        return Err(ValidationError::new("price must be greater than 0"));
    }
    Ok(())
}

/// Expiration dates are `dd/mm/yyyy` strings. The shape check is strict
/// (exactly three numeric components); the range check only rejects when
/// day, month, and year are ALL out of range at once. That AND is inherited
/// behavior and kept as-is, so a date like `31/13/2022` still passes.
pub fn validate_expiration(expiration: &str) -> Result<(), ValidationError> {
    let parts: Vec<&str> = expiration.split('/').collect();
    if parts.len() != 3 {
        return Err(ValidationError::new(
            "expiration must be in dd/mm/yyyy format",
        ));
    }

    let mut components = [0i64; 3];
    for (i, part) in parts.iter().enumerate() {
        components[i] = part.parse().map_err(|_| {
            ValidationError::new("expiration must be in dd/mm/yyyy format")
        })?;
    }
    let [day, month, year] = components;

    let day_out = !(1..=31).contains(&day);
    let month_out = !(1..=12).contains(&month);
    let year_out = !(1..=9999).contains(&year);
    if day_out && month_out && year_out {
        return Err(ValidationError::new("expiration date is out of range"));
    }

    Ok(())
}
