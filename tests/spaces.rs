//! Execution tests for space operations.

use cfapi::{
    list_organization_spaces, CloudFoundryClient, CloudFoundryError, Get, List,
    ListOrganizationSpacesRequest, ListSpacesRequest, Space,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn space(id: &str, name: &str, organization_id: &str) -> serde_json::Value {
    serde_json::json!({
        "metadata": {
            "guid": id,
            "url": format!("/v2/spaces/{id}"),
            "created_at": "2016-06-08T16:41:35Z",
            "updated_at": null
        },
        "entity": {
            "name": name,
            "organization_guid": organization_id,
            "space_quota_definition_guid": null,
            "allow_ssh": true
        }
    })
}

fn envelope(resources: Vec<serde_json::Value>, next_url: Option<&str>) -> serde_json::Value {
    serde_json::json!({
        "total_results": resources.len(),
        "total_pages": 1,
        "prev_url": null,
        "next_url": next_url,
        "resources": resources
    })
}

#[tokio::test]
async fn test_get_space() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/spaces/test-space-id"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(space("test-space-id", "test-space", "test-organization-id")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = CloudFoundryClient::new("test-token", &mock_server.uri()).unwrap();
    let space = Space::get(&client, "test-space-id".to_string()).await.unwrap();

    assert_eq!(space.id(), "test-space-id");
    assert_eq!(space.entity.organization_id, "test-organization-id");
}

#[tokio::test]
async fn test_get_space_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/spaces/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "code": 40004,
            "description": "The app space could not be found: missing",
            "error_code": "CF-SpaceNotFound"
        })))
        .mount(&mock_server)
        .await;

    let client = CloudFoundryClient::new("test-token", &mock_server.uri()).unwrap();
    let err = Space::get(&client, "missing".to_string()).await.unwrap_err();

    assert!(err.is_not_found());
    assert!(matches!(
        err,
        CloudFoundryError::NotFound {
            entity_type: "Space",
            ..
        }
    ));
}

#[tokio::test]
async fn test_list_spaces_by_organization() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/spaces"))
        .and(query_param("q", "organization_guid:test-organization-id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            vec![space("test-space-id", "test-space", "test-organization-id")],
            None,
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = CloudFoundryClient::new("test-token", &mock_server.uri()).unwrap();
    let request = ListSpacesRequest {
        organization_ids: vec!["test-organization-id".to_string()],
        ..Default::default()
    };

    let spaces = Space::list_all(&client, &request).await.unwrap();
    assert_eq!(spaces.len(), 1);
    assert_eq!(spaces[0].entity.name, "test-space");
}

#[tokio::test]
async fn test_list_organization_spaces_walks_pages() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/organizations/test-organization-id/spaces"))
        .and(query_param("q", "name IN development,production"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            vec![space("dev-id", "development", "test-organization-id")],
            Some("/v2/organizations/test-organization-id/spaces?page=2"),
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/organizations/test-organization-id/spaces"))
        .and(query_param("q", "name IN development,production"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            vec![space("prod-id", "production", "test-organization-id")],
            None,
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = CloudFoundryClient::new("test-token", &mock_server.uri()).unwrap();
    let request = ListOrganizationSpacesRequest {
        organization_id: "test-organization-id".to_string(),
        names: vec!["development".to_string(), "production".to_string()],
        ..Default::default()
    };

    let spaces = list_organization_spaces(&client, &request).await.unwrap();
    let ids: Vec<&str> = spaces.iter().map(|s| s.id()).collect();
    assert_eq!(ids, vec!["dev-id", "prod-id"]);
}
