//! Unified error extraction over the wire: structured server messages,
//! generic fallbacks, auth mapping, and transport failures.

mod common;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use velo::error::ClientError;
use velo::repo::RouteRepository;

async fn repo_against(server: &MockServer) -> RouteRepository {
    let (api, _context) = common::api_for(&server.uri());
    RouteRepository::new(api)
}

async fn mount_route_failure(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/routes/1"))
        .respond_with(template)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_structured_message_is_surfaced_verbatim() {
    let server = MockServer::start().await;
    mount_route_failure(
        &server,
        ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "message": "route is no longer available"
        })),
    )
    .await;

    let err = repo_against(&server).await.get(1).await.unwrap_err();
    assert_eq!(
        err,
        ClientError::Transport("route is no longer available".to_string())
    );
}

#[tokio::test]
async fn test_alternate_error_field_is_surfaced() {
    let server = MockServer::start().await;
    mount_route_failure(
        &server,
        ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "error": "database unavailable"
        })),
    )
    .await;

    let err = repo_against(&server).await.get(1).await.unwrap_err();
    assert_eq!(err.message(), "database unavailable");
}

#[tokio::test]
async fn test_unparsable_body_falls_back_to_status() {
    let server = MockServer::start().await;
    mount_route_failure(
        &server,
        ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"),
    )
    .await;

    let err = repo_against(&server).await.get(1).await.unwrap_err();
    assert_eq!(err, ClientError::Transport("connection error: 502".to_string()));
}

#[tokio::test]
async fn test_unauthorized_maps_to_auth_variant() {
    let server = MockServer::start().await;
    mount_route_failure(
        &server,
        ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "message": "token expired"
        })),
    )
    .await;

    let err = repo_against(&server).await.get(1).await.unwrap_err();
    assert_eq!(err, ClientError::Auth("token expired".to_string()));
}

#[tokio::test]
async fn test_no_response_maps_to_network_variant() {
    let (api, _context) = common::api_for("http://127.0.0.1:9");
    let repo = RouteRepository::new(api);

    let err = repo.get(1).await.unwrap_err();
    assert!(err.is_network());
    assert!(err.message().starts_with("network error:"));
}
