//! Aggregating provider against a stubbed upstream API.

use profile_service::domain::errors::FetchError;
use profile_service::domain::models::UpstreamConfig;
use profile_service::domain::ports::ProfileProvider;
use profile_service::infrastructure::upstream::{JsonPlaceholderProfileProvider, UpstreamClient};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider_for(mock_server: &MockServer) -> JsonPlaceholderProfileProvider {
    let config = UpstreamConfig {
        base_url: mock_server.uri(),
        ..UpstreamConfig::default()
    };
    JsonPlaceholderProfileProvider::new(UpstreamClient::new(&config).unwrap())
}

fn user_one_body() -> serde_json::Value {
    serde_json::json!({
        "id": 1,
        "name": "Leanne Graham",
        "username": "Bret",
        "email": "Sincere@april.biz",
        "address": { "street": "Kulas Light", "city": "Gwenborough" },
        "phone": "1-770-736-8031 x56442"
    })
}

fn user_one_posts_body() -> serde_json::Value {
    serde_json::json!([
        {
            "userId": 1,
            "id": 1,
            "title": "sunt aut facere repellat provident occaecati excepturi optio reprehenderit",
            "body": "quia et suscipit"
        },
        {
            "userId": 1,
            "id": 2,
            "title": "qui est esse",
            "body": "est rerum tempore"
        }
    ])
}

#[tokio::test]
async fn aggregates_user_and_posts_preserving_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/1"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_one_body()))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/posts"))
        .and(query_param("userId", "1"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_one_posts_body()))
        .mount(&mock_server)
        .await;

    let profile = provider_for(&mock_server).get_by_id(1).await.unwrap();

    assert_eq!(profile.name, "Leanne Graham");
    assert_eq!(profile.username, "Bret");
    assert_eq!(profile.email, "Sincere@april.biz");
    assert_eq!(profile.posts.len(), 2);
    assert_eq!(profile.posts[0].id, 1);
    assert_eq!(
        profile.posts[0].title,
        "sunt aut facere repellat provident occaecati excepturi optio reprehenderit"
    );
    assert_eq!(profile.posts[1].id, 2);
    assert_eq!(profile.posts[1].title, "qui est esse");
}

#[tokio::test]
async fn user_with_no_posts_yields_empty_posts() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 3,
            "name": "Clementine Bauch",
            "username": "Samantha",
            "email": "Nathan@yesenia.net"
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/posts"))
        .and(query_param("userId", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let profile = provider_for(&mock_server).get_by_id(3).await.unwrap();
    assert!(profile.posts.is_empty());
}

#[tokio::test]
async fn missing_user_yields_not_found_even_when_posts_succeed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/99"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/posts"))
        .and(query_param("userId", "99"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let result = provider_for(&mock_server).get_by_id(99).await;
    assert!(matches!(result, Err(FetchError::NotFound)));
}

#[tokio::test]
async fn missing_posts_resource_yields_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_one_body()))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let result = provider_for(&mock_server).get_by_id(1).await;
    assert!(matches!(result, Err(FetchError::NotFound)));
}

#[tokio::test]
async fn not_found_wins_over_a_concurrent_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/5"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let result = provider_for(&mock_server).get_by_id(5).await;
    assert!(matches!(result, Err(FetchError::NotFound)));
}

#[tokio::test]
async fn server_error_yields_unavailable_with_cause() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    match provider_for(&mock_server).get_by_id(1).await {
        Err(FetchError::UpstreamUnavailable(cause)) => {
            assert!(cause.contains("500"), "cause should name the status: {cause}");
        }
        other => panic!("expected UpstreamUnavailable, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_yields_unavailable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let result = provider_for(&mock_server).get_by_id(1).await;
    assert!(matches!(result, Err(FetchError::UpstreamUnavailable(_))));
}

#[tokio::test]
async fn connection_refused_yields_unavailable() {
    // Nothing is listening on this port.
    let config = UpstreamConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        ..UpstreamConfig::default()
    };
    let provider = JsonPlaceholderProfileProvider::new(UpstreamClient::new(&config).unwrap());

    let result = provider.get_by_id(1).await;
    assert!(matches!(result, Err(FetchError::UpstreamUnavailable(_))));
}
