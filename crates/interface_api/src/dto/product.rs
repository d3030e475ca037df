//! Product DTOs

use serde::Serialize;
use serde_json::{Map, Value};

use domain_policy::ProductType;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub product_type: ProductType,
    pub display_name: String,
    /// Path of the product's question configuration
    pub questions_url: String,
}

impl From<ProductType> for ProductResponse {
    fn from(product_type: ProductType) -> Self {
        Self {
            product_type,
            display_name: product_type.display_name().to_string(),
            questions_url: format!("/api/v1/products/{product_type}/questions"),
        }
    }
}

/// Normalised answers returned by a successful live validation
#[derive(Debug, Serialize)]
pub struct AnswersValidationResponse {
    pub valid: bool,
    pub answers: Map<String, Value>,
}
