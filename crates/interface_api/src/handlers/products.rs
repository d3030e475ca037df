//! Product catalogue and question configuration handlers

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use domain_policy::ProductType;
use domain_questions::ProductQuestionSet;
use domain_validation::FormValidator;

use crate::dto::product::{AnswersValidationResponse, ProductResponse};
use crate::{error::ApiError, AppState};

/// Lists the products a quote can be started for
pub async fn list_products() -> Json<Vec<ProductResponse>> {
    Json(ProductType::ALL.into_iter().map(ProductResponse::from).collect())
}

/// Returns the question configuration for a product
pub async fn get_questions(
    State(state): State<AppState>,
    Path(product_type): Path<String>,
) -> Result<Json<ProductQuestionSet>, ApiError> {
    let product_type: ProductType = product_type.parse()?;
    let questions = state.questions.get_questions(product_type).await?;
    Ok(Json(questions.as_ref().clone()))
}

/// Validates product answers against the product's configured questions
///
/// Used while the form is being filled in; only configured questions are
/// checked.
pub async fn validate_answers(
    State(state): State<AppState>,
    Path(product_type): Path<String>,
    Json(answers): Json<Value>,
) -> Result<Json<AnswersValidationResponse>, ApiError> {
    let product_type: ProductType = product_type.parse()?;
    let questions = state.questions.get_questions(product_type).await?;
    let answers = FormValidator::validate_answers(&questions, &answers)?;

    Ok(Json(AnswersValidationResponse {
        valid: true,
        answers,
    }))
}
