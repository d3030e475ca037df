//! File-backed question source

use async_trait::async_trait;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use core_kernel::{DomainPort, PortError};
use domain_policy::ProductType;

use super::decode_document;
use crate::error::QuestionError;
use crate::ports::QuestionSource;

/// Reads question sets from `{root}/{productType}.json`
#[derive(Debug, Clone)]
pub struct FileQuestionSource {
    root: PathBuf,
}

impl FileQuestionSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Location of a product's document
    pub fn path_for(&self, product_type: ProductType) -> PathBuf {
        self.root.join(format!("{}.json", product_type.as_str()))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DomainPort for FileQuestionSource {}

#[async_trait]
impl QuestionSource for FileQuestionSource {
    async fn fetch(&self, product_type: ProductType) -> Result<Value, QuestionError> {
        let path = self.path_for(product_type);
        debug!(path = %path.display(), "Reading question configuration");

        let body = tokio::fs::read_to_string(&path).await.map_err(|e| {
            let source = if e.kind() == ErrorKind::NotFound {
                PortError::not_found("QuestionSet", path.display())
            } else {
                PortError::connection(format!("cannot read {}", path.display()), e)
            };
            QuestionError::Retrieval { product_type, source }
        })?;

        decode_document(product_type, &body)
    }

    fn describe(&self) -> String {
        format!("file:{}", self.root.display())
    }
}
