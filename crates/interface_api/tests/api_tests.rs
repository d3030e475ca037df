//! HTTP API tests driven through the router

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use domain_policy::{InMemoryPolicyRepository, PolicyPort, ProductType};
use domain_questions::{EmbeddedQuestionSource, InMemoryQuestionSource, QuestionConfigLoader};
use interface_api::{config::ApiConfig, create_router, AppState};
use test_utils::{assert_error_body_has_field, InputFixtures, QuestionFixtures, QuotePayloadBuilder};

struct TestApp {
    router: Router,
    policies: Arc<InMemoryPolicyRepository>,
}

fn app_with_questions(loader: QuestionConfigLoader) -> TestApp {
    let policies = Arc::new(InMemoryPolicyRepository::new());
    let state = AppState::new(policies.clone(), Arc::new(loader), ApiConfig::default());
    TestApp {
        router: create_router(state),
        policies,
    }
}

fn app() -> TestApp {
    app_with_questions(QuestionConfigLoader::new(Arc::new(EmbeddedQuestionSource::new())))
}

async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = router
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

mod health_tests {
    use super::*;

    #[tokio::test]
    async fn test_health() {
        let app = app();
        let (status, body) = send(&app.router, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_ready_with_bundled_questions() {
        let app = app();
        let (status, body) = send(&app.router, Method::GET, "/health/ready", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["checks"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_not_ready_without_questions() {
        let app = app_with_questions(QuestionConfigLoader::new(Arc::new(InMemoryQuestionSource::new())));
        let (status, body) = send(&app.router, Method::GET, "/health/ready", None).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "not_ready");
    }
}

mod product_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_products() {
        let app = app();
        let (status, body) = send(&app.router, Method::GET, "/api/v1/products", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([
                { "productType": "household", "displayName": "Household", "questionsUrl": "/api/v1/products/household/questions" },
                { "productType": "buyToLet", "displayName": "Buy to Let", "questionsUrl": "/api/v1/products/buyToLet/questions" }
            ])
        );
    }

    #[tokio::test]
    async fn test_get_questions() {
        let app = app();
        let (status, body) =
            send(&app.router, Method::GET, "/api/v1/products/buyToLet/questions", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["productType"], "buyToLet");
        assert_eq!(body["questions"][2]["key"], "isPropertyLetToStudents");
    }

    #[tokio::test]
    async fn test_unknown_product_is_not_found() {
        let app = app();
        let (status, body) =
            send(&app.router, Method::GET, "/api/v1/products/motor/questions", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
    }

    #[tokio::test]
    async fn test_product_path_is_case_sensitive() {
        let app = app();
        let (status, _) =
            send(&app.router, Method::GET, "/api/v1/products/HOUSEHOLD/questions", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) =
            send(&app.router, Method::GET, "/api/v1/policies?productType=BuyToLet", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_question_load_failure_hides_detail() {
        let source = Arc::new(InMemoryQuestionSource::new());
        source.set_unavailable(ProductType::Household, true).await;
        let app = app_with_questions(QuestionConfigLoader::new(source));

        let (status, body) =
            send(&app.router, Method::GET, "/api/v1/products/household/questions", None).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["message"], "Failed to load questions. Please try again.");
    }

    #[tokio::test]
    async fn test_invalid_question_config_is_server_error() {
        let source = InMemoryQuestionSource::new().with_document(
            ProductType::Household,
            json!({ "productType": "household", "version": "1.0.0", "questions": [{ "key": "a" }] }),
        );
        let app = app_with_questions(QuestionConfigLoader::new(Arc::new(source)));

        let (status, body) =
            send(&app.router, Method::GET, "/api/v1/products/household/questions", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Failed to load questions. Please try again.");
    }

    #[tokio::test]
    async fn test_validate_answers_with_optional_question() {
        let source = InMemoryQuestionSource::new().with_document(
            ProductType::Household,
            QuestionFixtures::document(ProductType::Household, &[("propertyType", false), ("hasGarden", true)]),
        );
        let app = app_with_questions(QuestionConfigLoader::new(Arc::new(source)));

        let (status, body) = send(
            &app.router,
            Method::POST,
            "/api/v1/products/household/answers/validate",
            Some(json!({})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "valid": true, "answers": {} }));
    }

    #[tokio::test]
    async fn test_validate_answers_reports_errors() {
        let app = app();
        let (status, body) = send(
            &app.router,
            Method::POST,
            "/api/v1/products/household/answers/validate",
            Some(json!({ "propertyType": "DetachedHouse", "numberOfBedrooms": 9, "yearOfConstruction": 1990 })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_error_body_has_field(&body, "productAnswers.numberOfBedrooms", "Maximum 6 bedrooms allowed");
    }
}

mod policy_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_policy_normalises_and_stores() {
        let app = app();
        let payload = QuotePayloadBuilder::household()
            .with_property("postcode", "sw1a1aa")
            .build();

        let (status, body) = send(&app.router, Method::POST, "/api/v1/policies", Some(payload)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["property"]["postcode"], "SW1A 1AA");
        assert_eq!(body["productType"], "household");
        assert!(body["id"].as_str().is_some());
        assert_eq!(app.policies.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_create_policy_field_errors() {
        let app = app();
        let payload = QuotePayloadBuilder::household()
            .with_answer("numberOfBedrooms", 7)
            .with_policyholder("firstName", "")
            .build();

        let (status, body) = send(&app.router, Method::POST, "/api/v1/policies", Some(payload)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_error_body_has_field(&body, "productAnswers.numberOfBedrooms", "Maximum 6 bedrooms allowed");
        assert_error_body_has_field(&body, "policyholder.firstName", "First name is required");
        assert_eq!(app.policies.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_household_with_buy_to_let_answers() {
        let app = app();
        let payload = QuotePayloadBuilder::buy_to_let()
            .with_section("productType", json!("household"))
            .build();

        let (status, body) = send(&app.router, Method::POST, "/api/v1/policies", Some(payload)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_error_body_has_field(
            &body,
            "productAnswers.yearOfConstruction",
            "Year of construction is required",
        );
    }

    #[tokio::test]
    async fn test_create_policy_requires_known_product() {
        let app = app();
        let missing = QuotePayloadBuilder::household().without_section("productType").build();
        let (status, _) = send(&app.router, Method::POST, "/api/v1/policies", Some(missing)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let unknown = QuotePayloadBuilder::household()
            .with_section("productType", json!("motor"))
            .build();
        let (status, body) = send(&app.router, Method::POST, "/api/v1/policies", Some(unknown)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().contains("motor"));
    }

    #[tokio::test]
    async fn test_list_policies_newest_first_with_filter() {
        let app = app();
        let first = app.policies.create(InputFixtures::household()).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        let second = app.policies.create(InputFixtures::buy_to_let()).await.unwrap();

        let (status, body) = send(&app.router, Method::GET, "/api/v1/policies", None).await;
        assert_eq!(status, StatusCode::OK);
        let ids: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec![second.id().to_string(), first.id().to_string()]);
        assert_eq!(body[0]["productLabel"], "Buy to Let");
        assert_eq!(body[1]["policyholderName"], "John Doe");

        let (_, filtered) =
            send(&app.router, Method::GET, "/api/v1/policies?productType=household", None).await;
        assert_eq!(filtered.as_array().unwrap().len(), 1);
        assert_eq!(filtered[0]["productType"], "household");
    }

    #[tokio::test]
    async fn test_get_and_delete_policy() {
        let app = app();
        let record = app.policies.create(InputFixtures::household()).await.unwrap();
        let uri = format!("/api/v1/policies/{}", record.id());

        let (status, body) = send(&app.router, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["policyholder"]["dateOfBirth"], "1990-01-01");

        let (status, _) = send(&app.router, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app.router, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app.router, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_malformed_policy_id() {
        let app = app();
        let (status, _) = send(&app.router, Method::GET, "/api/v1/policies/not-an-id", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
