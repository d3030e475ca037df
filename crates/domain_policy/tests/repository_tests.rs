//! Repository tests through the `PolicyPort` trait object

use chrono::NaiveDate;
use std::sync::Arc;

use core_kernel::PolicyId;
use domain_policy::{
    BuyToLetAnswers, CreatePolicyInput, HouseholdAnswers, InMemoryPolicyRepository, PolicyPort,
    PolicyRecord, Policyholder, ProductAnswers, ProductType, Property, PropertyType,
};

fn input(first_name: &str, answers: ProductAnswers) -> CreatePolicyInput {
    CreatePolicyInput {
        policyholder: Policyholder {
            first_name: first_name.to_string(),
            last_name: "Smith".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1980, 5, 20).unwrap(),
        },
        property: Property {
            address_line1: "1 Mill Lane".to_string(),
            address_line2: None,
            address_line3: Some("Leeds".to_string()),
            postcode: "LS1 4AP".to_string(),
        },
        product_answers: answers,
    }
}

fn household(first_name: &str) -> CreatePolicyInput {
    input(
        first_name,
        ProductAnswers::Household(HouseholdAnswers {
            property_type: PropertyType::SemiDetachedHouse,
            number_of_bedrooms: 3,
            year_of_construction: 1950,
        }),
    )
}

fn buy_to_let(first_name: &str) -> CreatePolicyInput {
    input(
        first_name,
        ProductAnswers::BuyToLet(BuyToLetAnswers {
            property_type: PropertyType::TerracedBungalow,
            number_of_bedrooms: 1,
            is_property_let_to_students: true,
        }),
    )
}

fn repository() -> Arc<dyn PolicyPort> {
    Arc::new(InMemoryPolicyRepository::new())
}

mod repository_behaviour {
    use super::*;

    #[tokio::test]
    async fn test_records_are_independent_copies() {
        let policies = repository();
        let record = policies.create(household("Ann")).await.unwrap();

        let mut listed = policies.get_all().await.unwrap();
        listed.clear();

        assert_eq!(policies.get_required(record.id()).await.unwrap(), record);
    }

    #[tokio::test]
    async fn test_newest_first_across_products() {
        let policies = repository();
        let mut created = Vec::new();
        for (index, name) in ["Ann", "Ben", "Cat", "Dan"].into_iter().enumerate() {
            let input = if index % 2 == 0 { household(name) } else { buy_to_let(name) };
            created.push(policies.create(input).await.unwrap());
            tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        }

        let names: Vec<String> = policies
            .get_all()
            .await
            .unwrap()
            .iter()
            .map(|r| r.policyholder().first_name.clone())
            .collect();
        assert_eq!(names, vec!["Dan", "Cat", "Ben", "Ann"]);

        let lets = policies.get_by_product_type(ProductType::BuyToLet).await.unwrap();
        let ids: Vec<PolicyId> = lets.iter().map(PolicyRecord::id).collect();
        assert_eq!(ids, vec![created[3].id(), created[1].id()]);
    }

    #[tokio::test]
    async fn test_concurrent_creates_are_all_stored() {
        let repository = InMemoryPolicyRepository::new();
        let handles: Vec<_> = (0..20)
            .map(|_| {
                let repository = repository.clone();
                tokio::spawn(async move { repository.create(household("Eve")).await })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }
        assert_eq!(repository.count().await.unwrap(), 20);
    }

    #[tokio::test]
    async fn test_unknown_id_is_absent() {
        let policies = repository();
        assert_eq!(policies.get_by_id(PolicyId::new_v7()).await.unwrap(), None);
        assert!(!policies.delete(PolicyId::new_v7()).await.unwrap());
    }
}

mod record_serialization {
    use super::*;

    #[tokio::test]
    async fn test_record_round_trips_through_json() {
        let policies = repository();
        let record = policies.create(buy_to_let("Fay")).await.unwrap();

        let json = serde_json::to_string(&record).unwrap();
        let decoded: PolicyRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, record);
        assert_eq!(decoded.product_answers().product_type(), ProductType::BuyToLet);
        assert_eq!(decoded.property().address_line3.as_deref(), Some("Leeds"));
    }
}
