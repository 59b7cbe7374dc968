//! HTTP round-trip tests for the synchronizer API

use std::future::IntoFuture;
use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use core_kernel::FixedClock;
use interface_api::config::ApiConfig;
use interface_api::dto::synchronizer::{ChoiceItem, DatalistResponse};
use interface_api::error::ErrorResponse;
use interface_api::{create_router, AppState};
use serde_json::{json, Value};
use test_utils::{ClockFixtures, FilterBuilder};

fn server() -> TestServer {
    server_with(ApiConfig::default())
}

fn server_with(config: ApiConfig) -> TestServer {
    let clock = Arc::new(FixedClock::at(ClockFixtures::mid_2024()));
    let state = AppState::new(config, clock).unwrap();
    TestServer::new(create_router(state)).unwrap()
}

mod descriptor {
    use super::*;

    #[tokio::test]
    async fn test_root_serves_app_descriptor() {
        let response = server().get("/").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["id"], "period-sync");
        assert_eq!(body["responsibleFor"]["dataSynchronization"], true);
    }

    #[tokio::test]
    async fn test_validate_accepts_anyone() {
        let response = server().post("/validate").json(&json!({})).await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.json::<Value>(), json!({ "name": "Public" }));
    }

    #[tokio::test]
    async fn test_health() {
        let response = server().get("/health").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.json::<Value>()["status"], "healthy");
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = server().get("/logo").await;

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.json::<ErrorResponse>(),
            ErrorResponse {
                message: "Not found".to_string(),
                code: 404
            }
        );
    }

    #[tokio::test]
    async fn test_config_and_schema() {
        let server = server();

        let config: Value = server.post("/api/v1/synchronizer/config").await.json();
        assert_eq!(config["types"][0]["id"], "period");

        let schema: Value = server.post("/api/v1/synchronizer/schema").await.json();
        assert_eq!(schema["period"]["dates"]["subType"], "date-range");
    }
}

mod datalist {
    use super::*;

    async fn items(field: &str) -> Vec<ChoiceItem> {
        let response = server()
            .post("/api/v1/synchronizer/datalist")
            .json(&json!({ "field": field, "types": ["period"] }))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
        response.json::<DatalistResponse>().items
    }

    #[tokio::test]
    async fn test_types() {
        let items = items("types").await;

        assert_eq!(items.len(), 5);
        assert_eq!(items[0], ChoiceItem::new("Days", "Day"));
        assert_eq!(items[4], ChoiceItem::new("Years", "Year"));
    }

    #[tokio::test]
    async fn test_timezones_sorted_by_title() {
        let items = items("timezone").await;

        assert!(items.len() > 400);
        assert!(items.windows(2).all(|pair| pair[0].title <= pair[1].title));
        assert!(items.iter().any(|item| item.value == "Europe/Amsterdam"));
    }

    #[tokio::test]
    async fn test_locales() {
        let items = items("locale").await;

        assert!(items.contains(&ChoiceItem::new("Deutsch (de-AT)", "de-AT")));
        assert!(items.contains(&ChoiceItem::new("English (en)", "en")));
        assert!(items.contains(&ChoiceItem::new("Svenska (sv-SE)", "sv-SE")));
        assert!(items.contains(&ChoiceItem::new("日本語 (ja)", "ja")));
    }

    #[tokio::test]
    async fn test_unknown_field_has_no_items() {
        assert!(items("account").await.is_empty());
    }
}

mod data {
    use super::*;

    const DATA: &str = "/api/v1/synchronizer/data";

    #[tokio::test]
    async fn test_single_year() {
        let response = server()
            .post(DATA)
            .json(&FilterBuilder::new().types(&["Year"]).request_json())
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        let items = body["items"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(
            items[0],
            json!({
                "type": "Year",
                "dates": "{\"start\":\"2024-01-01\",\"end\":\"2025-01-01\"}",
                "relative": 0,
                "semantic": "this year",
                "number": 2024,
                "name": "2024 (this year)",
                "id": "4543eb48-165b-5899-aa3f-4ba77f7bfea5"
            })
        );
    }

    #[tokio::test]
    async fn test_all_types_for_a_year() {
        let response = server()
            .post(DATA)
            .json(&FilterBuilder::new().from_year(2023).all_types().request_json())
            .await;

        let body: Value = response.json();
        let items = body["items"].as_array().unwrap();
        let days = items.iter().filter(|item| item["type"] == "Day").count();
        assert_eq!(days, 365);
        assert_eq!(items[0]["type"], "Day");
        assert_eq!(items.last().unwrap()["type"], "Year");
        assert_eq!(items[0]["dotw"], "Sunday");
        assert_eq!(items[0]["is_in"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_missing_timezone_and_locale_use_configured_defaults() {
        let config = ApiConfig {
            default_locale: "fr".to_string(),
            ..ApiConfig::default()
        };
        let response = server_with(config)
            .post(DATA)
            .json(&json!({
                "requestedType": "period",
                "filter": { "from": "2024", "types": ["Year"] }
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["items"][0]["semantic"], "cette année");
    }

    #[tokio::test]
    async fn test_long_range_does_not_hold_up_other_requests() {
        let server = server();
        let long_range = FilterBuilder::new()
            .from_year(1900)
            .num_years(50)
            .all_types()
            .request_json();

        let (data, health) = tokio::join!(
            server.post(DATA).json(&long_range).into_future(),
            server.get("/health").into_future(),
        );

        assert_eq!(health.status_code(), StatusCode::OK);
        assert_eq!(data.status_code(), StatusCode::OK);
        let body: Value = data.json();
        let years = body["items"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|item| item["type"] == "Year")
            .count();
        assert_eq!(years, 50);
    }

    #[tokio::test]
    async fn test_timezone_names_ignore_case() {
        let response = server()
            .post(DATA)
            .json(&FilterBuilder::new().timezone("europe/berlin").types(&["Year"]).request_json())
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_zone_with_skipped_day() {
        let response = server()
            .post(DATA)
            .json(
                &FilterBuilder::new()
                    .from_year(2011)
                    .timezone("Pacific/Apia")
                    .types(&["Day", "Month"])
                    .request_json(),
            )
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["items"].as_array().unwrap().len(), 365 + 12);
    }

    #[tokio::test]
    async fn test_other_dataset_is_rejected() {
        let response = server()
            .post(DATA)
            .json(&json!({ "requestedType": "notperiod", "filter": {} }))
            .await;

        assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.json::<ErrorResponse>(),
            ErrorResponse {
                message: "Only this database can be synchronized".to_string(),
                code: 500
            }
        );
    }

    #[tokio::test]
    async fn test_unknown_type_is_rejected() {
        let response = server()
            .post(DATA)
            .json(&FilterBuilder::new().types(&["Fortnight"]).request_json())
            .await;

        assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.json::<ErrorResponse>().message,
            "Unknown period type: Fortnight"
        );
    }

    #[tokio::test]
    async fn test_unknown_timezone_is_rejected() {
        let response = server()
            .post(DATA)
            .json(&FilterBuilder::new().timezone("Nowhere/City").request_json())
            .await;

        assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.json::<ErrorResponse>().message,
            "Unknown timezone: Nowhere/City"
        );
    }

    #[tokio::test]
    async fn test_malformed_body_is_rejected_with_error_body() {
        let response = server()
            .post(DATA)
            .text("{ not json")
            .content_type("application/json")
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<ErrorResponse>().code, 400);
    }
}
