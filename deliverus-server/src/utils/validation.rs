//! Input validation helpers
//!
//! Text length limits and checks for restaurant payloads.
//! SQLite TEXT has no built-in length enforcement.

use shared::AppError;
use shared::models::{RestaurantCreate, RestaurantUpdate};

// ── Text length limits ──────────────────────────────────────────────

/// Restaurant names
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions
pub const MAX_NOTE_LEN: usize = 500;

/// Postal codes, phone numbers
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

/// Addresses
pub const MAX_ADDRESS_LEN: usize = 500;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate that an optional number, if present, is finite and not negative.
pub fn validate_non_negative(value: Option<f64>, field: &str) -> Result<(), AppError> {
    if let Some(v) = value
        && !(v.is_finite() && v >= 0.0)
    {
        return Err(AppError::validation(format!("{field} must be a non-negative number")));
    }
    Ok(())
}

fn validate_optional_fields(
    description: &Option<String>,
    url: &Option<String>,
    email: &Option<String>,
    phone: &Option<String>,
    logo: &Option<String>,
    hero_image: &Option<String>,
    average_service_minutes: Option<f64>,
) -> Result<(), AppError> {
    validate_optional_text(description, "description", MAX_NOTE_LEN)?;
    validate_optional_text(url, "url", MAX_URL_LEN)?;
    validate_optional_text(email, "email", MAX_EMAIL_LEN)?;
    validate_optional_text(phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(logo, "logo", MAX_URL_LEN)?;
    validate_optional_text(hero_image, "heroImage", MAX_URL_LEN)?;
    validate_non_negative(average_service_minutes, "averageServiceMinutes")?;
    Ok(())
}

pub fn validate_restaurant_create(data: &RestaurantCreate) -> Result<(), AppError> {
    validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&data.address, "address", MAX_ADDRESS_LEN)?;
    validate_required_text(&data.postal_code, "postalCode", MAX_SHORT_TEXT_LEN)?;
    validate_non_negative(Some(data.shipping_costs), "shippingCosts")?;
    validate_optional_fields(
        &data.description,
        &data.url,
        &data.email,
        &data.phone,
        &data.logo,
        &data.hero_image,
        data.average_service_minutes,
    )
}

pub fn validate_restaurant_update(data: &RestaurantUpdate) -> Result<(), AppError> {
    if let Some(name) = &data.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(address) = &data.address {
        validate_required_text(address, "address", MAX_ADDRESS_LEN)?;
    }
    if let Some(postal_code) = &data.postal_code {
        validate_required_text(postal_code, "postalCode", MAX_SHORT_TEXT_LEN)?;
    }
    validate_non_negative(data.shipping_costs, "shippingCosts")?;
    validate_optional_fields(
        &data.description,
        &data.url,
        &data.email,
        &data.phone,
        &data.logo,
        &data.hero_image,
        data.average_service_minutes,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_payload() -> RestaurantCreate {
        RestaurantCreate {
            name: "Burger Place".to_string(),
            description: None,
            address: "Calle Feria 3".to_string(),
            postal_code: "41003".to_string(),
            url: None,
            shipping_costs: 1.5,
            average_service_minutes: None,
            email: None,
            phone: None,
            logo: None,
            hero_image: None,
            restaurant_category_id: 1,
            status: None,
        }
    }

    #[test]
    fn test_valid_create() {
        assert!(validate_restaurant_create(&create_payload()).is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut data = create_payload();
        data.name = "   ".to_string();
        let err = validate_restaurant_create(&data).unwrap_err();
        assert_eq!(err.message, "name must not be empty");
    }

    #[test]
    fn test_negative_shipping_costs_rejected() {
        let mut data = create_payload();
        data.shipping_costs = -1.0;
        assert!(validate_restaurant_create(&data).is_err());
    }

    #[test]
    fn test_update_only_checks_present_fields() {
        assert!(validate_restaurant_update(&RestaurantUpdate::default()).is_ok());

        let data = RestaurantUpdate {
            postal_code: Some(String::new()),
            ..Default::default()
        };
        assert!(validate_restaurant_update(&data).is_err());
    }

    #[test]
    fn test_optional_text_too_long() {
        let long = Some("x".repeat(MAX_EMAIL_LEN + 1));
        assert!(validate_optional_text(&long, "email", MAX_EMAIL_LEN).is_err());
        assert!(validate_optional_text(&None, "email", MAX_EMAIL_LEN).is_ok());
    }
}
