//! Policy Domain Ports
//!
//! The `PolicyPort` trait is the repository boundary for policy records.
//! The quote service only depends on this trait; the in-memory adapter in
//! [`crate::adapters`] is the implementation used by the API server and tests.
//!
//! ```rust,ignore
//! use domain_policy::{PolicyPort, InMemoryPolicyRepository};
//! use std::sync::Arc;
//!
//! let policies: Arc<dyn PolicyPort> = Arc::new(InMemoryPolicyRepository::new());
//! let record = policies.create(input).await?;
//! let newest_first = policies.get_all().await?;
//! ```

use async_trait::async_trait;

use core_kernel::{DomainPort, HealthCheckable, PolicyId, PortError};

use crate::product::ProductType;
use crate::record::{CreatePolicyInput, PolicyRecord};

/// Repository operations for policy records
///
/// Implementations own the stored collection; callers receive clones.
#[async_trait]
pub trait PolicyPort: DomainPort + HealthCheckable {
    /// Stores a new record, assigning its identifier and creation timestamp
    async fn create(&self, input: CreatePolicyInput) -> Result<PolicyRecord, PortError>;

    /// Returns every record, newest `created_at` first
    async fn get_all(&self) -> Result<Vec<PolicyRecord>, PortError>;

    /// Returns the record with the given identifier, if stored
    async fn get_by_id(&self, id: PolicyId) -> Result<Option<PolicyRecord>, PortError>;

    /// Returns the records of one product line, newest first
    async fn get_by_product_type(
        &self,
        product_type: ProductType,
    ) -> Result<Vec<PolicyRecord>, PortError>;

    /// Removes a record; returns false if it was not stored
    async fn delete(&self, id: PolicyId) -> Result<bool, PortError>;

    /// Removes every record
    async fn clear(&self) -> Result<(), PortError>;

    /// Number of stored records
    async fn count(&self) -> Result<usize, PortError>;

    /// Returns the record or a `PortError::NotFound`
    async fn get_required(&self, id: PolicyId) -> Result<PolicyRecord, PortError> {
        self.get_by_id(id)
            .await?
            .ok_or_else(|| PortError::not_found("Policy", id))
    }
}
