//! Policy handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tracing::info;

use core_kernel::PolicyId;
use domain_policy::{PolicyRecord, PolicySummary, ProductType};
use domain_validation::FormValidator;

use crate::dto::policy::ListPoliciesQuery;
use crate::{error::ApiError, AppState};

fn parse_policy_id(id: &str) -> Result<PolicyId, ApiError> {
    id.parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid policy id: {id}")))
}

/// Validates a completed quote form and stores it
///
/// The body carries `productType` alongside the three form sections.
pub async fn create_policy(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<PolicyRecord>), ApiError> {
    let product_type: ProductType = body
        .get("productType")
        .and_then(Value::as_str)
        .ok_or_else(|| ApiError::BadRequest("productType is required".to_string()))?
        .parse()
        .map_err(|e: domain_policy::PolicyError| ApiError::BadRequest(e.to_string()))?;

    let input = FormValidator::validate(&body, product_type)?;
    let record = state.policies.create(input).await?;

    info!(policy_id = %record.id(), %product_type, "Quote submitted");
    Ok((StatusCode::CREATED, Json(record)))
}

/// Lists policy summaries, newest first
pub async fn list_policies(
    State(state): State<AppState>,
    Query(query): Query<ListPoliciesQuery>,
) -> Result<Json<Vec<PolicySummary>>, ApiError> {
    let records = match query.product_type {
        Some(product_type) => {
            let product_type: ProductType = product_type
                .parse()
                .map_err(|e: domain_policy::PolicyError| ApiError::BadRequest(e.to_string()))?;
            state.policies.get_by_product_type(product_type).await?
        }
        None => state.policies.get_all().await?,
    };

    Ok(Json(records.iter().map(PolicyRecord::summary).collect()))
}

/// Gets a policy by ID
pub async fn get_policy(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PolicyRecord>, ApiError> {
    let id = parse_policy_id(&id)?;
    Ok(Json(state.policies.get_required(id).await?))
}

/// Deletes a policy
pub async fn delete_policy(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_policy_id(&id)?;
    if state.policies.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!("Policy {id} not found")))
    }
}
