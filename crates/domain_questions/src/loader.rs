//! Question configuration loader
//!
//! Fetches a product's question set through a [`QuestionSource`], checks its
//! structure and caches the result for the lifetime of the loader. Only
//! successful loads are cached; a failed fetch or a malformed document is
//! retried on the next call.
//!
//! Concurrent misses for the same product are not coalesced: each performs
//! its own fetch and the last one to finish populates the cache.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

use core_kernel::{HealthCheckResult, HealthCheckable};
use domain_policy::ProductType;

use crate::error::QuestionError;
use crate::model::ProductQuestionSet;
use crate::ports::QuestionSource;
use crate::structure::parse_question_set;

/// Loads and caches question sets per product
pub struct QuestionConfigLoader {
    source: Arc<dyn QuestionSource>,
    cache: RwLock<HashMap<ProductType, Arc<ProductQuestionSet>>>,
}

impl QuestionConfigLoader {
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self {
            source,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the question set for a product, fetching it on first use
    ///
    /// # Errors
    ///
    /// - `QuestionError::Retrieval` when the source cannot deliver the document
    /// - `QuestionError::ConfigInvalid` when the document is malformed
    pub async fn get_questions(
        &self,
        product_type: ProductType,
    ) -> Result<Arc<ProductQuestionSet>, QuestionError> {
        if let Some(cached) = self.cache.read().await.get(&product_type) {
            debug!(%product_type, "Question configuration served from cache");
            return Ok(Arc::clone(cached));
        }

        let document = self.source.fetch(product_type).await.map_err(|e| {
            error!(
                %product_type,
                source = %self.source.describe(),
                error = %e,
                "Failed to fetch question configuration"
            );
            e
        })?;

        let question_set = parse_question_set(&document, product_type).map_err(|e| {
            error!(%product_type, error = %e, "Question configuration is invalid");
            e
        })?;

        let question_set = Arc::new(question_set);
        self.cache
            .write()
            .await
            .insert(product_type, Arc::clone(&question_set));

        info!(
            %product_type,
            version = %question_set.version,
            questions = question_set.questions.len(),
            "Question configuration loaded"
        );
        Ok(question_set)
    }

    /// Loads every product's configuration, failing on the first broken one
    pub async fn preload_all(&self) -> Result<(), QuestionError> {
        for product_type in ProductType::ALL {
            self.get_questions(product_type).await?;
        }
        Ok(())
    }

    /// Drops every cached question set
    pub async fn clear_cache(&self) {
        self.cache.write().await.clear();
    }

    pub async fn is_cached(&self, product_type: ProductType) -> bool {
        self.cache.read().await.contains_key(&product_type)
    }

    pub async fn cached_count(&self) -> usize {
        self.cache.read().await.len()
    }
}

#[async_trait]
impl HealthCheckable for QuestionConfigLoader {
    async fn health_check(&self) -> HealthCheckResult {
        match self.preload_all().await {
            Ok(()) => HealthCheckResult::healthy("question-config-loader"),
            Err(e) => HealthCheckResult::unhealthy("question-config-loader", e.to_string()),
        }
    }
}
