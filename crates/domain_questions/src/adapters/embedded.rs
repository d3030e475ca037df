//! Question configuration compiled into the binary

use async_trait::async_trait;
use serde_json::Value;

use core_kernel::DomainPort;
use domain_policy::ProductType;

use super::decode_document;
use crate::error::QuestionError;
use crate::ports::QuestionSource;

const HOUSEHOLD: &str = include_str!("../../data/questions/household.json");
const BUY_TO_LET: &str = include_str!("../../data/questions/buyToLet.json");

/// Serves the question sets bundled with the crate
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedQuestionSource;

impl EmbeddedQuestionSource {
    pub fn new() -> Self {
        Self
    }

    /// Raw bundled document for a product
    pub fn document(product_type: ProductType) -> &'static str {
        match product_type {
            ProductType::Household => HOUSEHOLD,
            ProductType::BuyToLet => BUY_TO_LET,
        }
    }
}

impl DomainPort for EmbeddedQuestionSource {}

#[async_trait]
impl QuestionSource for EmbeddedQuestionSource {
    async fn fetch(&self, product_type: ProductType) -> Result<Value, QuestionError> {
        decode_document(product_type, Self::document(product_type))
    }

    fn describe(&self) -> String {
        "embedded".to_string()
    }
}
