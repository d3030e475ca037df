//! Question configuration model
//!
//! Mirrors the JSON documents that drive the dynamic part of the quote
//! form. A question's `key` names the answer field it collects; it only
//! takes effect during validation when the product's base schema has a
//! field of the same name.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use domain_policy::ProductType;

/// Input control family for a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    Choice,
    Boolean,
    Text,
    Number,
    Date,
}

/// How a boolean question is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BooleanRenderType {
    Radio,
    Checkbox,
    Toggle,
}

/// A single declarative rule with the message shown when it fails
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleValue<T> {
    pub value: T,
    pub message: String,
}

/// Client-side rendering hints carried alongside a question
///
/// Server-side enforcement always comes from the base schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<RuleValue<bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<RuleValue<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<RuleValue<f64>>,
    /// Regular expression source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<RuleValue<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<RuleValue<usize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<RuleValue<usize>>,
}

/// One selectable option of a choice or boolean question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionValue {
    pub label: String,
    /// String, number or boolean
    pub value: Value,
    /// Accessible description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Answer options, tagged by the type of value they produce
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum QuestionAnswer {
    /// Choice producing a string value
    #[serde(rename = "String")]
    StringChoice { values: Vec<OptionValue> },
    /// Choice producing a numeric value
    #[serde(rename = "Number")]
    NumberChoice { values: Vec<OptionValue> },
    /// Yes/no style answer
    Boolean {
        #[serde(rename = "renderAs")]
        render_as: BooleanRenderType,
        values: Vec<OptionValue>,
    },
}

impl QuestionAnswer {
    /// The ordered options
    pub fn options(&self) -> &[OptionValue] {
        match self {
            QuestionAnswer::StringChoice { values }
            | QuestionAnswer::NumberChoice { values }
            | QuestionAnswer::Boolean { values, .. } => values,
        }
    }

    pub fn is_choice(&self) -> bool {
        matches!(
            self,
            QuestionAnswer::StringChoice { .. } | QuestionAnswer::NumberChoice { .. }
        )
    }
}

/// A configured question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Unique within its question set; matches an answer field name
    pub key: String,
    pub display_text: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationRule>,
    /// Absent for free-form Text, Number and Date inputs
    #[serde(default)]
    pub answer: Option<QuestionAnswer>,
}

/// The ordered questions configured for one product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuestionSet {
    pub product_type: ProductType,
    /// Semantic version of the configuration
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    pub questions: Vec<Question>,
}

impl ProductQuestionSet {
    /// Looks up a question by key
    pub fn question(&self, key: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.key == key)
    }

    /// Question keys in configured order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.questions.iter().map(|q| q.key.as_str())
    }
}
