//! Food Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Food entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub food_id: String,
    pub name: String,
    /// Price, always stored with at most 2 decimal places
    pub price: f64,
    pub food_image: String,
    /// Menu reference (surface id)
    pub menu_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create food payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct FoodCreate {
    #[validate(required, length(min = 2, max = 200))]
    pub name: Option<String>,
    #[validate(required)]
    pub price: Option<f64>,
    #[validate(required, length(min = 1, max = 2048))]
    pub food_image: Option<String>,
    #[validate(required, length(min = 1))]
    pub menu_id: Option<String>,
}

/// Update food payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct FoodUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 200))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 2048))]
    pub food_image: Option<String>,
    /// Menu reference; must resolve when supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_requires_fields() {
        let payload = FoodCreate::default();
        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("price"));
        assert!(fields.contains_key("food_image"));
        assert!(fields.contains_key("menu_id"));
    }

    #[test]
    fn test_short_name_rejected() {
        let payload = FoodCreate {
            name: Some("S".into()),
            price: Some(4.5),
            food_image: Some("soup.png".into()),
            menu_id: Some("m1".into()),
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }
}
