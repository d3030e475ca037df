//! Policy DTOs

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPoliciesQuery {
    /// Restricts the listing to one product line
    pub product_type: Option<String>,
}
