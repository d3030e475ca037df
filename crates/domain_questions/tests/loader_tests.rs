//! Loader tests against the bundled and file-backed sources

use std::path::PathBuf;
use std::sync::Arc;

use domain_policy::ProductType;
use domain_questions::{
    EmbeddedQuestionSource, FieldType, FileQuestionSource, QuestionAnswer, QuestionConfigLoader,
    QuestionError,
};

fn scratch_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("question-config-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

mod embedded_tests {
    use super::*;

    #[tokio::test]
    async fn test_bundled_household_questions() {
        let loader = QuestionConfigLoader::new(Arc::new(EmbeddedQuestionSource::new()));
        let set = loader.get_questions(ProductType::Household).await.unwrap();

        let keys: Vec<&str> = set.keys().collect();
        assert_eq!(keys, vec!["propertyType", "numberOfBedrooms", "yearOfConstruction"]);

        let bedrooms = set.question("numberOfBedrooms").unwrap();
        assert!(matches!(bedrooms.answer, Some(QuestionAnswer::NumberChoice { .. })));
    }

    #[tokio::test]
    async fn test_bundled_buy_to_let_questions() {
        let loader = QuestionConfigLoader::new(Arc::new(EmbeddedQuestionSource::new()));
        let set = loader.get_questions(ProductType::BuyToLet).await.unwrap();

        let students = set.question("isPropertyLetToStudents").unwrap();
        assert_eq!(students.field_type, FieldType::Boolean);
        assert_eq!(students.default_value, Some(serde_json::json!(false)));

        let bedrooms = set.question("numberOfBedrooms").unwrap();
        assert!(bedrooms.answer.is_none());
    }

    #[tokio::test]
    async fn test_preload_all() {
        let loader = QuestionConfigLoader::new(Arc::new(EmbeddedQuestionSource::new()));
        loader.preload_all().await.unwrap();
        assert_eq!(loader.cached_count().await, ProductType::ALL.len());
    }
}

mod file_tests {
    use super::*;

    #[tokio::test]
    async fn test_reads_product_document_by_name() {
        let dir = scratch_dir();
        std::fs::write(
            dir.join("buyToLet.json"),
            EmbeddedQuestionSource::document(ProductType::BuyToLet),
        )
        .unwrap();

        let source = FileQuestionSource::new(dir.clone());
        assert_eq!(source.path_for(ProductType::BuyToLet), dir.join("buyToLet.json"));

        let loader = QuestionConfigLoader::new(Arc::new(source));
        let set = loader.get_questions(ProductType::BuyToLet).await.unwrap();
        assert_eq!(set.product_type, ProductType::BuyToLet);

        std::fs::remove_dir_all(dir).ok();
    }

    #[tokio::test]
    async fn test_missing_file_is_retrieval_error() {
        let dir = scratch_dir();
        let loader = QuestionConfigLoader::new(Arc::new(FileQuestionSource::new(dir.clone())));

        let err = loader.get_questions(ProductType::Household).await.unwrap_err();
        match err {
            QuestionError::Retrieval { product_type, ref source } => {
                assert_eq!(product_type, ProductType::Household);
                assert!(source.is_not_found());
            }
            other => panic!("expected retrieval error, got {other:?}"),
        }

        std::fs::remove_dir_all(dir).ok();
    }

    #[tokio::test]
    async fn test_non_json_file_is_invalid_config() {
        let dir = scratch_dir();
        std::fs::write(dir.join("household.json"), "<html>not found</html>").unwrap();

        let loader = QuestionConfigLoader::new(Arc::new(FileQuestionSource::new(dir.clone())));
        let err = loader.get_questions(ProductType::Household).await.unwrap_err();
        assert!(matches!(err, QuestionError::ConfigInvalid(_)));
        assert!(!loader.is_cached(ProductType::Household).await);

        std::fs::remove_dir_all(dir).ok();
    }

    #[tokio::test]
    async fn test_document_for_wrong_product_is_rejected() {
        let dir = scratch_dir();
        std::fs::write(
            dir.join("household.json"),
            EmbeddedQuestionSource::document(ProductType::BuyToLet),
        )
        .unwrap();

        let loader = QuestionConfigLoader::new(Arc::new(FileQuestionSource::new(dir.clone())));
        let err = loader.get_questions(ProductType::Household).await.unwrap_err();
        assert!(matches!(err, QuestionError::ConfigInvalid(_)));

        std::fs::remove_dir_all(dir).ok();
    }
}
