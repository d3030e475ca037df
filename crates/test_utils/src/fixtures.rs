//! Pre-built Test Fixtures
//!
//! Ready-to-use quote form data. Payload fixtures are raw JSON as submitted
//! by the form; input fixtures are the typed, already validated form.

use chrono::NaiveDate;
use serde_json::{json, Value};

use domain_policy::{
    BuyToLetAnswers, CreatePolicyInput, HouseholdAnswers, Policyholder, ProductAnswers,
    ProductType, Property, PropertyType,
};
use domain_questions::ProductQuestionSet;

/// Fixture for raw form payloads
pub struct PayloadFixtures;

impl PayloadFixtures {
    /// John Doe, born 1990-01-01
    pub fn policyholder() -> Value {
        json!({ "firstName": "John", "lastName": "Doe", "dateOfBirth": "1990-01-01" })
    }

    /// Property with only the mandatory address fields
    pub fn property() -> Value {
        json!({ "addressLine1": "123 Main Street", "postcode": "SW1A 1AA" })
    }

    pub fn household_answers() -> Value {
        json!({
            "propertyType": "DetachedHouse",
            "numberOfBedrooms": 3,
            "yearOfConstruction": 1990
        })
    }

    pub fn buy_to_let_answers() -> Value {
        json!({
            "propertyType": "TerracedHouse",
            "numberOfBedrooms": 2,
            "isPropertyLetToStudents": false
        })
    }

    /// Complete, valid submission for a product
    pub fn submission(product_type: ProductType) -> Value {
        let answers = match product_type {
            ProductType::Household => Self::household_answers(),
            ProductType::BuyToLet => Self::buy_to_let_answers(),
        };
        json!({
            "productType": product_type.as_str(),
            "policyholder": Self::policyholder(),
            "property": Self::property(),
            "productAnswers": answers
        })
    }
}

/// Fixture for validated repository input
pub struct InputFixtures;

impl InputFixtures {
    pub fn policyholder() -> Policyholder {
        Policyholder {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        }
    }

    pub fn property() -> Property {
        Property {
            address_line1: "123 Main Street".to_string(),
            address_line2: None,
            address_line3: None,
            postcode: "SW1A 1AA".to_string(),
        }
    }

    pub fn household() -> CreatePolicyInput {
        CreatePolicyInput {
            policyholder: Self::policyholder(),
            property: Self::property(),
            product_answers: ProductAnswers::Household(HouseholdAnswers {
                property_type: PropertyType::DetachedHouse,
                number_of_bedrooms: 3,
                year_of_construction: 1990,
            }),
        }
    }

    pub fn buy_to_let() -> CreatePolicyInput {
        CreatePolicyInput {
            policyholder: Self::policyholder(),
            property: Self::property(),
            product_answers: ProductAnswers::BuyToLet(BuyToLetAnswers {
                property_type: PropertyType::TerracedHouse,
                number_of_bedrooms: 2,
                is_property_let_to_students: false,
            }),
        }
    }
}

/// Fixture for question configuration documents
pub struct QuestionFixtures;

impl QuestionFixtures {
    /// Minimal valid document with one question per given `(key, required)`
    pub fn document(product_type: ProductType, questions: &[(&str, bool)]) -> Value {
        let questions: Vec<Value> = questions
            .iter()
            .map(|(key, required)| {
                json!({
                    "key": key,
                    "displayText": key,
                    "type": "Text",
                    "isRequired": required
                })
            })
            .collect();

        json!({
            "productType": product_type.as_str(),
            "version": "1.0.0",
            "lastUpdated": "2024-12-10",
            "questions": questions
        })
    }

    /// Decoded form of [`QuestionFixtures::document`]
    pub fn question_set(product_type: ProductType, questions: &[(&str, bool)]) -> ProductQuestionSet {
        serde_json::from_value(Self::document(product_type, questions)).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_validation::FormValidator;

    #[test]
    fn test_submissions_are_valid() {
        for product_type in ProductType::ALL {
            let input = FormValidator::validate(&PayloadFixtures::submission(product_type), product_type)
                .unwrap();
            assert_eq!(input.product_type(), product_type);
        }
    }

    #[test]
    fn test_payload_and_input_fixtures_agree() {
        let input = FormValidator::validate(
            &PayloadFixtures::submission(ProductType::Household),
            ProductType::Household,
        )
        .unwrap();
        assert_eq!(input, InputFixtures::household());
    }

    #[test]
    fn test_question_set_fixture() {
        let set = QuestionFixtures::question_set(ProductType::BuyToLet, &[("numberOfBedrooms", true)]);
        assert_eq!(set.product_type, ProductType::BuyToLet);
        assert!(set.questions[0].is_required);
    }
}
