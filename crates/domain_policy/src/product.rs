//! Product catalogue
//!
//! The product lines a quote can be taken out for, and the property types
//! shared by both. Every place that branches on the product matches on
//! [`ProductType`] exhaustively.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PolicyError;

/// Insurance product line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProductType {
    /// Home insurance for an owner-occupied property
    #[serde(rename = "household")]
    Household,
    /// Landlord insurance for a let property
    #[serde(rename = "buyToLet")]
    BuyToLet,
}

impl ProductType {
    /// Every product in catalogue order
    pub const ALL: [ProductType; 2] = [ProductType::Household, ProductType::BuyToLet];

    /// Wire identifier, also used to name the question configuration document
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Household => "household",
            ProductType::BuyToLet => "buyToLet",
        }
    }

    /// Label shown to customers
    pub fn display_name(&self) -> &'static str {
        match self {
            ProductType::Household => "Household",
            ProductType::BuyToLet => "Buy to Let",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductType {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductType::ALL
            .into_iter()
            .find(|product| product.as_str() == s)
            .ok_or_else(|| PolicyError::UnknownProductType(s.to_string()))
    }
}

/// Construction type of the insured property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    TerracedHouse,
    DetachedHouse,
    SemiDetachedHouse,
    TerracedBungalow,
}

impl PropertyType {
    pub const ALL: [PropertyType; 4] = [
        PropertyType::TerracedHouse,
        PropertyType::DetachedHouse,
        PropertyType::SemiDetachedHouse,
        PropertyType::TerracedBungalow,
    ];

    /// Wire identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::TerracedHouse => "TerracedHouse",
            PropertyType::DetachedHouse => "DetachedHouse",
            PropertyType::SemiDetachedHouse => "SemiDetachedHouse",
            PropertyType::TerracedBungalow => "TerracedBungalow",
        }
    }

    /// Label shown to customers
    pub fn display_name(&self) -> &'static str {
        match self {
            PropertyType::TerracedHouse => "Terraced House",
            PropertyType::DetachedHouse => "Detached House",
            PropertyType::SemiDetachedHouse => "Semi-Detached House",
            PropertyType::TerracedBungalow => "Terraced Bungalow",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyType::ALL
            .into_iter()
            .find(|property| property.as_str() == s)
            .ok_or_else(|| PolicyError::UnknownPropertyType(s.to_string()))
    }
}
