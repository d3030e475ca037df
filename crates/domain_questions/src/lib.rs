//! Question Configuration Domain
//!
//! The product-specific part of the quote form is described by a JSON
//! document per product rather than by code. This crate models those
//! documents, fetches them through a [`QuestionSource`] and caches them in a
//! [`QuestionConfigLoader`].
//!
//! # Sources
//!
//! - **EmbeddedQuestionSource**: the documents under `data/questions`,
//!   compiled into the binary
//! - **FileQuestionSource**: `{root}/{productType}.json` on disk
//! - **InMemoryQuestionSource**: documents supplied at runtime
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_questions::{EmbeddedQuestionSource, QuestionConfigLoader};
//! use domain_policy::ProductType;
//!
//! let loader = QuestionConfigLoader::new(Arc::new(EmbeddedQuestionSource::new()));
//! let questions = loader.get_questions(ProductType::Household).await?;
//! ```

pub mod model;
pub mod structure;
pub mod ports;
pub mod adapters;
pub mod loader;
pub mod error;

pub use model::{
    FieldType, BooleanRenderType, RuleValue, ValidationRule, OptionValue, QuestionAnswer,
    Question, ProductQuestionSet,
};
pub use structure::{check_structure, parse_question_set};
pub use ports::QuestionSource;
pub use adapters::{EmbeddedQuestionSource, FileQuestionSource, InMemoryQuestionSource};
pub use loader::QuestionConfigLoader;
pub use error::{QuestionError, LOAD_FAILURE_MESSAGE};
