//! Policy domain errors

use thiserror::Error;

use core_kernel::PortError;

/// Errors that can occur in the policy domain
#[derive(Debug, Error)]
pub enum PolicyError {
    /// The product type is not in the catalogue
    #[error("Unknown product type: {0}")]
    UnknownProductType(String),

    /// The property type is not one of the supported constructions
    #[error("Unknown property type: {0}")]
    UnknownPropertyType(String),

    /// Repository failure
    #[error(transparent)]
    Port(#[from] PortError),
}
