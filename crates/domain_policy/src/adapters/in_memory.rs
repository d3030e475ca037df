//! In-memory policy repository
//!
//! Records live in a `HashMap` behind a `tokio::sync::RwLock`. Writers
//! (create, delete, clear) take the write lock, so a listing never observes
//! a partially applied mutation.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use core_kernel::{DomainPort, HealthCheckResult, HealthCheckable, PolicyId, PortError};

use crate::ports::PolicyPort;
use crate::product::ProductType;
use crate::record::{CreatePolicyInput, PolicyRecord};

/// In-memory implementation of `PolicyPort`
///
/// Cloning the repository shares the underlying store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPolicyRepository {
    policies: Arc<RwLock<HashMap<PolicyId, PolicyRecord>>>,
}

impl InMemoryPolicyRepository {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates the repository with existing records
    pub async fn with_records(records: Vec<PolicyRecord>) -> Self {
        let repository = Self::new();
        {
            let mut policies = repository.policies.write().await;
            for record in records {
                policies.insert(record.id(), record);
            }
        }
        repository
    }
}

/// Newest first; identifiers are time-ordered so they break timestamp ties
fn sort_newest_first(records: &mut [PolicyRecord]) {
    records.sort_by(|a, b| {
        b.created_at()
            .cmp(&a.created_at())
            .then_with(|| b.id().as_uuid().cmp(a.id().as_uuid()))
    });
}

impl DomainPort for InMemoryPolicyRepository {}

#[async_trait]
impl HealthCheckable for InMemoryPolicyRepository {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult::healthy("in-memory-policy-repository")
    }
}

#[async_trait]
impl PolicyPort for InMemoryPolicyRepository {
    async fn create(&self, input: CreatePolicyInput) -> Result<PolicyRecord, PortError> {
        let record = PolicyRecord::create(input, Utc::now());
        self.policies.write().await.insert(record.id(), record.clone());

        info!(
            policy_id = %record.id(),
            product_type = %record.product_type(),
            "Policy record created"
        );
        Ok(record)
    }

    async fn get_all(&self) -> Result<Vec<PolicyRecord>, PortError> {
        let mut records: Vec<PolicyRecord> = self.policies.read().await.values().cloned().collect();
        sort_newest_first(&mut records);
        Ok(records)
    }

    async fn get_by_id(&self, id: PolicyId) -> Result<Option<PolicyRecord>, PortError> {
        debug!(policy_id = %id, "Fetching policy record");
        Ok(self.policies.read().await.get(&id).cloned())
    }

    async fn get_by_product_type(
        &self,
        product_type: ProductType,
    ) -> Result<Vec<PolicyRecord>, PortError> {
        let records = self.get_all().await?;
        Ok(records
            .into_iter()
            .filter(|record| record.product_type() == product_type)
            .collect())
    }

    async fn delete(&self, id: PolicyId) -> Result<bool, PortError> {
        let removed = self.policies.write().await.remove(&id).is_some();
        debug!(policy_id = %id, removed, "Deleting policy record");
        Ok(removed)
    }

    async fn clear(&self) -> Result<(), PortError> {
        self.policies.write().await.clear();
        Ok(())
    }

    async fn count(&self) -> Result<usize, PortError> {
        Ok(self.policies.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::PropertyType;
    use crate::record::{BuyToLetAnswers, HouseholdAnswers, Policyholder, ProductAnswers, Property};
    use chrono::NaiveDate;

    fn input(answers: ProductAnswers) -> CreatePolicyInput {
        CreatePolicyInput {
            policyholder: Policyholder {
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            },
            property: Property {
                address_line1: "123 Road".to_string(),
                address_line2: None,
                address_line3: None,
                postcode: "SW1A 1AA".to_string(),
            },
            product_answers: answers,
        }
    }

    fn household() -> CreatePolicyInput {
        input(ProductAnswers::Household(HouseholdAnswers {
            property_type: PropertyType::DetachedHouse,
            number_of_bedrooms: 3,
            year_of_construction: 1990,
        }))
    }

    fn buy_to_let() -> CreatePolicyInput {
        input(ProductAnswers::BuyToLet(BuyToLetAnswers {
            property_type: PropertyType::TerracedHouse,
            number_of_bedrooms: 2,
            is_property_let_to_students: false,
        }))
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repository = InMemoryPolicyRepository::new();
        let record = repository.create(household()).await.unwrap();

        let fetched = repository.get_by_id(record.id()).await.unwrap();
        assert_eq!(fetched, Some(record));
        assert_eq!(repository.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_get_all_is_newest_first() {
        let repository = InMemoryPolicyRepository::new();
        let pause = || tokio::time::sleep(std::time::Duration::from_millis(2));
        let first = repository.create(household()).await.unwrap();
        pause().await;
        let second = repository.create(buy_to_let()).await.unwrap();
        pause().await;
        let third = repository.create(household()).await.unwrap();

        let ids: Vec<PolicyId> = repository
            .get_all()
            .await
            .unwrap()
            .iter()
            .map(PolicyRecord::id)
            .collect();
        assert_eq!(ids, vec![third.id(), second.id(), first.id()]);
    }

    #[tokio::test]
    async fn test_filter_by_product_type() {
        let repository = InMemoryPolicyRepository::new();
        repository.create(household()).await.unwrap();
        repository.create(buy_to_let()).await.unwrap();
        repository.create(household()).await.unwrap();

        let household = repository
            .get_by_product_type(ProductType::Household)
            .await
            .unwrap();
        assert_eq!(household.len(), 2);
        assert!(household.iter().all(|r| r.product_type() == ProductType::Household));
    }

    #[tokio::test]
    async fn test_delete() {
        let repository = InMemoryPolicyRepository::new();
        let record = repository.create(household()).await.unwrap();

        assert!(repository.delete(record.id()).await.unwrap());
        assert!(!repository.delete(record.id()).await.unwrap());
        assert_eq!(repository.get_by_id(record.id()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_get_required_not_found() {
        let repository = InMemoryPolicyRepository::new();
        let err = repository.get_required(PolicyId::new_v7()).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_clear_and_clones_share_state() {
        let repository = InMemoryPolicyRepository::new();
        let shared = repository.clone();
        repository.create(household()).await.unwrap();
        assert_eq!(shared.count().await.unwrap(), 1);

        shared.clear().await.unwrap();
        assert_eq!(repository.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_with_records() {
        let source = InMemoryPolicyRepository::new();
        let record = source.create(household()).await.unwrap();

        let seeded = InMemoryPolicyRepository::with_records(vec![record.clone()]).await;
        assert_eq!(seeded.get_required(record.id()).await.unwrap(), record);
    }
}
