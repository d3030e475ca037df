//! Question configuration ports
//!
//! `QuestionSource` is the delivery boundary for question configuration:
//! it fetches the raw JSON document for a product and nothing more. Shape
//! checks and caching belong to [`crate::loader::QuestionConfigLoader`].

use async_trait::async_trait;
use serde_json::Value;

use core_kernel::DomainPort;
use domain_policy::ProductType;

use crate::error::QuestionError;

/// Fetches question configuration documents
#[async_trait]
pub trait QuestionSource: DomainPort {
    /// Fetches the document for one product
    ///
    /// Transport failures are reported as `QuestionError::Retrieval`; a
    /// document that is not JSON at all is `QuestionError::ConfigInvalid`.
    async fn fetch(&self, product_type: ProductType) -> Result<Value, QuestionError>;

    /// Short description used in logs
    fn describe(&self) -> String;
}
