//! Test Data Builders
//!
//! Builder for quote form payloads. Tests set only the fields they care
//! about and start from a valid submission for everything else.

use serde_json::{Map, Value};

use domain_policy::ProductType;

use crate::fixtures::PayloadFixtures;

/// Builder for raw quote form payloads
pub struct QuotePayloadBuilder {
    payload: Value,
}

impl QuotePayloadBuilder {
    /// Starts from a valid submission for the product
    pub fn new(product_type: ProductType) -> Self {
        Self {
            payload: PayloadFixtures::submission(product_type),
        }
    }

    pub fn household() -> Self {
        Self::new(ProductType::Household)
    }

    pub fn buy_to_let() -> Self {
        Self::new(ProductType::BuyToLet)
    }

    fn section_mut(&mut self, section: &str) -> &mut Map<String, Value> {
        let root = self
            .payload
            .as_object_mut()
            .expect("payload root is an object");
        let entry = root
            .entry(section.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        entry.as_object_mut().expect("section is an object")
    }

    /// Sets a field inside a section
    pub fn with(mut self, section: &str, field: &str, value: impl Into<Value>) -> Self {
        self.section_mut(section).insert(field.to_string(), value.into());
        self
    }

    /// Removes a field from a section
    pub fn without(mut self, section: &str, field: &str) -> Self {
        self.section_mut(section).remove(field);
        self
    }

    pub fn with_policyholder(self, field: &str, value: impl Into<Value>) -> Self {
        self.with("policyholder", field, value)
    }

    pub fn with_property(self, field: &str, value: impl Into<Value>) -> Self {
        self.with("property", field, value)
    }

    pub fn with_answer(self, field: &str, value: impl Into<Value>) -> Self {
        self.with("productAnswers", field, value)
    }

    /// Replaces a whole top-level entry
    pub fn with_section(mut self, section: &str, value: Value) -> Self {
        if let Some(root) = self.payload.as_object_mut() {
            root.insert(section.to_string(), value);
        }
        self
    }

    /// Removes a whole top-level entry
    pub fn without_section(mut self, section: &str) -> Self {
        if let Some(root) = self.payload.as_object_mut() {
            root.remove(section);
        }
        self
    }

    pub fn build(self) -> Value {
        self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_overrides_one_field() {
        let payload = QuotePayloadBuilder::household()
            .with_answer("numberOfBedrooms", 7)
            .build();
        assert_eq!(payload["productAnswers"]["numberOfBedrooms"], json!(7));
        assert_eq!(payload["policyholder"]["firstName"], json!("John"));
    }

    #[test]
    fn test_removes_sections_and_fields() {
        let payload = QuotePayloadBuilder::buy_to_let()
            .without("property", "postcode")
            .without_section("policyholder")
            .build();
        assert!(payload["property"].get("postcode").is_none());
        assert!(payload.get("policyholder").is_none());
    }
}
