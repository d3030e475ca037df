//! Policy Domain
//!
//! The records produced by a completed quote form and the repository that
//! stores them.
//!
//! # Model
//!
//! - **ProductType**: household or buy-to-let; selects the answer shape
//! - **PolicyRecord**: policyholder, property and product answers, plus the
//!   identifier and timestamp assigned on creation
//! - **PolicyPort**: repository port; `InMemoryPolicyRepository` implements it
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_policy::{InMemoryPolicyRepository, PolicyPort, ProductType};
//!
//! let repository = InMemoryPolicyRepository::new();
//! let record = repository.create(validated_input).await?;
//! let household = repository.get_by_product_type(ProductType::Household).await?;
//! ```

pub mod product;
pub mod record;
pub mod ports;
pub mod adapters;
pub mod error;

pub use product::{ProductType, PropertyType};
pub use record::{
    Policyholder, Property, HouseholdAnswers, BuyToLetAnswers, ProductAnswers,
    CreatePolicyInput, PolicyRecord, PolicySummary,
};
pub use ports::PolicyPort;
pub use adapters::InMemoryPolicyRepository;
pub use error::PolicyError;
