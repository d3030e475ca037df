//! Policy record model
//!
//! The data captured by a completed quote form: who the policyholder is,
//! which property is insured, and the product-specific answers. Records are
//! assembled from validated input and never modified afterwards.

use chrono::{DateTime, NaiveDate, Utc};
use core_kernel::PolicyId;
use serde::{Deserialize, Serialize};

use crate::product::{ProductType, PropertyType};

/// Policyholder personal details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policyholder {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
}

impl Policyholder {
    /// First and last name joined for display
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Address of the insured property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub address_line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line3: Option<String>,
    /// Postcode in `OUTWARD INWARD` form
    pub postcode: String,
}

/// Answers to the household product questions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseholdAnswers {
    pub property_type: PropertyType,
    /// 1 to 6
    pub number_of_bedrooms: u8,
    /// 1700 to 2000
    pub year_of_construction: u16,
}

/// Answers to the buy-to-let product questions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyToLetAnswers {
    pub property_type: PropertyType,
    /// 1 to 6
    pub number_of_bedrooms: u8,
    pub is_property_let_to_students: bool,
}

/// Product-specific answers, one variant per product line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductAnswers {
    Household(HouseholdAnswers),
    BuyToLet(BuyToLetAnswers),
}

impl ProductAnswers {
    /// The product these answers belong to
    pub fn product_type(&self) -> ProductType {
        match self {
            ProductAnswers::Household(_) => ProductType::Household,
            ProductAnswers::BuyToLet(_) => ProductType::BuyToLet,
        }
    }

    pub fn property_type(&self) -> PropertyType {
        match self {
            ProductAnswers::Household(answers) => answers.property_type,
            ProductAnswers::BuyToLet(answers) => answers.property_type,
        }
    }

    pub fn number_of_bedrooms(&self) -> u8 {
        match self {
            ProductAnswers::Household(answers) => answers.number_of_bedrooms,
            ProductAnswers::BuyToLet(answers) => answers.number_of_bedrooms,
        }
    }
}

/// Everything needed to create a policy record
///
/// The product type is carried by the answers, so an input can never name
/// one product while holding the other product's answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePolicyInput {
    pub policyholder: Policyholder,
    pub property: Property,
    pub product_answers: ProductAnswers,
}

impl CreatePolicyInput {
    pub fn product_type(&self) -> ProductType {
        self.product_answers.product_type()
    }
}

/// A stored policy
///
/// Only the repository creates records; fields are read through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyRecord {
    id: PolicyId,
    product_type: ProductType,
    policyholder: Policyholder,
    property: Property,
    product_answers: ProductAnswers,
    created_at: DateTime<Utc>,
}

impl PolicyRecord {
    pub(crate) fn create(input: CreatePolicyInput, created_at: DateTime<Utc>) -> Self {
        Self {
            id: PolicyId::new_v7(),
            product_type: input.product_type(),
            policyholder: input.policyholder,
            property: input.property,
            product_answers: input.product_answers,
            created_at,
        }
    }

    pub fn id(&self) -> PolicyId {
        self.id
    }

    pub fn product_type(&self) -> ProductType {
        self.product_type
    }

    pub fn policyholder(&self) -> &Policyholder {
        &self.policyholder
    }

    pub fn property(&self) -> &Property {
        &self.property
    }

    pub fn product_answers(&self) -> &ProductAnswers {
        &self.product_answers
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Condensed view used by policy listings
    pub fn summary(&self) -> PolicySummary {
        PolicySummary {
            id: self.id,
            product_type: self.product_type,
            product_label: self.product_type.display_name().to_string(),
            policyholder_name: self.policyholder.full_name(),
            address_line1: self.property.address_line1.clone(),
            postcode: self.property.postcode.clone(),
            number_of_bedrooms: self.product_answers.number_of_bedrooms(),
            created_at: self.created_at,
        }
    }
}

/// Listing view of a policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicySummary {
    pub id: PolicyId,
    pub product_type: ProductType,
    pub product_label: String,
    pub policyholder_name: String,
    pub address_line1: String,
    pub postcode: String,
    pub number_of_bedrooms: u8,
    pub created_at: DateTime<Utc>,
}
