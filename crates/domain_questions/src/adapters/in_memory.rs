//! In-memory question source

use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

use core_kernel::{DomainPort, PortError};
use domain_policy::ProductType;

use crate::error::QuestionError;
use crate::ports::QuestionSource;

/// Serves documents held in memory
///
/// Counts every fetch and can be told to fail for a product, which makes it
/// the source of choice for exercising the loader's cache and error paths.
#[derive(Debug, Default)]
pub struct InMemoryQuestionSource {
    documents: RwLock<HashMap<ProductType, Value>>,
    unavailable: RwLock<HashSet<ProductType>>,
    fetches: AtomicUsize,
}

impl InMemoryQuestionSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a document while building the source
    pub fn with_document(mut self, product_type: ProductType, document: Value) -> Self {
        self.documents.get_mut().insert(product_type, document);
        self
    }

    /// Replaces the document served for a product
    pub async fn set_document(&self, product_type: ProductType, document: Value) {
        self.documents.write().await.insert(product_type, document);
    }

    /// Makes fetches for a product fail as if the transport were down
    pub async fn set_unavailable(&self, product_type: ProductType, unavailable: bool) {
        let mut failing = self.unavailable.write().await;
        if unavailable {
            failing.insert(product_type);
        } else {
            failing.remove(&product_type);
        }
    }

    /// Number of fetches served so far, failed ones included
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl DomainPort for InMemoryQuestionSource {}

#[async_trait]
impl QuestionSource for InMemoryQuestionSource {
    async fn fetch(&self, product_type: ProductType) -> Result<Value, QuestionError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        if self.unavailable.read().await.contains(&product_type) {
            return Err(QuestionError::Retrieval {
                product_type,
                source: PortError::ServiceUnavailable {
                    service: "question-config".to_string(),
                },
            });
        }

        self.documents
            .read()
            .await
            .get(&product_type)
            .cloned()
            .ok_or_else(|| QuestionError::Retrieval {
                product_type,
                source: PortError::not_found("QuestionSet", product_type),
            })
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}
