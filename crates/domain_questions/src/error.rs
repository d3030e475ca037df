//! Question configuration errors

use thiserror::Error;

use core_kernel::PortError;
use domain_policy::ProductType;

/// Message shown to customers when questions cannot be loaded
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load questions. Please try again.";

/// Errors raised while loading a product's question configuration
#[derive(Debug, Error)]
pub enum QuestionError {
    /// The configuration could not be fetched
    #[error("Failed to load questions for {product_type}: {source}")]
    Retrieval {
        product_type: ProductType,
        #[source]
        source: PortError,
    },

    /// The configuration was fetched but is malformed; a deployment defect
    #[error("{0}")]
    ConfigInvalid(String),
}

impl QuestionError {
    /// Creates a ConfigInvalid error
    pub fn invalid(message: impl Into<String>) -> Self {
        QuestionError::ConfigInvalid(message.into())
    }

    /// Returns true for transport failures that a retry may fix
    pub fn is_retrieval(&self) -> bool {
        matches!(self, QuestionError::Retrieval { .. })
    }

    /// Customer-facing message; never includes internal detail
    pub fn user_message(&self) -> &'static str {
        LOAD_FAILURE_MESSAGE
    }
}
