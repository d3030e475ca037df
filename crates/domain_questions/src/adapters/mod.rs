//! Question source adapters
//!
//! - **FileQuestionSource**: reads `{root}/{productType}.json` from disk
//! - **EmbeddedQuestionSource**: configuration compiled into the binary
//! - **InMemoryQuestionSource**: documents held in memory, with fetch
//!   counting and failure injection for tests

pub mod file;
pub mod embedded;
pub mod in_memory;

pub use file::FileQuestionSource;
pub use embedded::EmbeddedQuestionSource;
pub use in_memory::InMemoryQuestionSource;

use domain_policy::ProductType;

use crate::error::QuestionError;

/// Decodes a fetched document body
pub(crate) fn decode_document(
    product_type: ProductType,
    body: &str,
) -> Result<serde_json::Value, QuestionError> {
    serde_json::from_str(body).map_err(|e| {
        QuestionError::invalid(format!(
            "Question configuration for {product_type} is not valid JSON: {e}"
        ))
    })
}
