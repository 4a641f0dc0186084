//! HTTP integration tests
//!
//! Run the reqwest transport against a local mock provider

use andromeda_client::models::*;
use andromeda_client::{AndromedaClient, AndromedaError};
use httpmock::prelude::*;
use serde_json::json;
use std::time::Duration;

const API_KEY: &str = "mock-api-key";

fn credentials(server: &MockServer) -> Credentials {
    Credentials::new(API_KEY, server.base_url())
}

fn client() -> AndromedaClient {
    AndromedaClient::new().expect("Failed to create client")
}

#[tokio::test]
async fn test_get_sites_sends_api_key_and_query() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/Sites")
                .query_param("id", "1201")
                .query_param("userName", "operator")
                .header("apikey", API_KEY);
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"Id": "site-guid", "AccountNumber": 1201, "Name": "Office", "IsStateArm": true}));
        })
        .await;

    let input = GetSitesInput::new(credentials(&server), "1201").with_user_name("operator");
    let site = client().get_sites(&RequestContext::new(), &input).await.unwrap();

    mock.assert_async().await;
    assert_eq!(site.id, "site-guid");
    assert_eq!(site.account_number, 1201);
    assert_eq!(site.name, "Office");
    assert!(site.is_state_arm);
}

#[tokio::test]
async fn test_user_objects_sends_json_body() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/MyAlarm/UserObjects")
                .header("apikey", API_KEY)
                .header("content-type", "application/json")
                .json_body(json!({"Phone": "+79991234567"}));
            then.status(200).json_body(json!([
                {"ObjectGUID": "obj-1", "CustomerID": "cust-1", "Role": "admin", "IsPanic": true},
                {"ObjectGUID": "obj-2", "CustomerID": "cust-1", "Role": "user", "IsPanic": false}
            ]));
        })
        .await;

    let input = GetUserObjectsInput::new(credentials(&server), "+79991234567");
    let objects = client()
        .get_user_objects(&RequestContext::new(), &input)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(objects.len(), 2);
    assert_eq!(objects[0].object_guid, "obj-1");
    assert_eq!(objects[1].role, "user");
    assert!(!objects[1].is_panic);
}

#[tokio::test]
async fn test_panic_permission_put_with_empty_body() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/MyAlarm")
                .query_param("custId", "cust-3")
                .query_param("isPanic", "False");
            then.status(200);
        })
        .await;

    let input = ChangePanicPermissionInput::new(credentials(&server), "cust-3", false);
    let response = client()
        .change_panic_permission(&RequestContext::new(), &input)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.message, "");
}

#[tokio::test]
async fn test_start_panic_check_is_post() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/CheckPanic")
                .query_param("siteId", "site-9")
                .query_param("stopOnEvent", "True")
                .query_param("checkInterval", "90");
            then.status(200)
                .json_body(json!({"Status": 0, "Description": "Check started", "CheckPanicId": "cp-77"}));
        })
        .await;

    let input = StartPanicCheckInput::new(credentials(&server), "site-9").with_check_interval(90);
    let started = client()
        .start_panic_check(&RequestContext::new(), &input)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(started.check_panic_id, "cp-77");
    assert_eq!(started.description, "Check started");
}

#[tokio::test]
async fn test_bad_request_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/Parts");
            then.status(400)
                .json_body(json!({"Message": "bad site", "SpResultCode": 7}));
        })
        .await;

    let input = GetPartitionsInput::new(credentials(&server), "unknown");
    let err = client()
        .get_partitions(&RequestContext::new(), &input)
        .await
        .unwrap_err();

    assert!(matches!(err, AndromedaError::Provider { code: 7, .. }));
    assert_eq!(err.to_string(), "bad site");
}

#[tokio::test]
async fn test_unexpected_status_is_generic_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/Zones");
            then.status(503).body("maintenance");
        })
        .await;

    let input = GetZonesInput::new(credentials(&server), "site");
    let err = client()
        .get_zones(&RequestContext::new(), &input)
        .await
        .unwrap_err();

    assert!(matches!(err, AndromedaError::RequestFailed { status: 503 }));
    assert!(err.is_provider());
}

#[tokio::test]
async fn test_slow_provider_times_out() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/Customers");
            then.status(200).delay(Duration::from_secs(2)).body("[]");
        })
        .await;

    let client = AndromedaClient::with_timeout(Duration::from_millis(200)).unwrap();
    let input = GetCustomersInput::new(credentials(&server), "site");
    let err = client
        .get_customers(&RequestContext::new(), &input)
        .await
        .unwrap_err();

    assert!(matches!(err, AndromedaError::Timeout(_)));
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let credentials = Credentials::new(API_KEY, format!("http://127.0.0.1:{}", port));
    let input = GetMyAlarmUsersInput::new(credentials, "site");
    let err = client()
        .get_my_alarm_users(&RequestContext::new(), &input)
        .await
        .unwrap_err();

    assert!(matches!(err, AndromedaError::HttpClient(_)));
    assert_eq!(err.kind(), "transport_error");
}
