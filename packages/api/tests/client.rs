//! HTTP-level tests for the API client.
//!
//! Each test mounts the server's answer on a wiremock server and checks what
//! the client sent and how it decoded the envelope.

use api::{
    ApiClient, Backend, Credentials, Error, EventInput, PersonInput, ProfileUpdate, RelationType,
    RelationshipInput,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

async fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(format!("{}/api", server.uri())).expect("valid base url")
}

#[tokio::test]
async fn test_login_success_returns_token_and_user() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({"username": "ada", "password": "hunter22"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Login successful",
            "token": "tok-1",
            "user": {"id": 1, "username": "ada", "email": "ada@example.org", "full_name": "Ada King"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let grant = client
        .login(&Credentials {
            username: "ada".into(),
            password: "hunter22".into(),
        })
        .await
        .unwrap();

    assert_eq!(grant.token, "tok-1");
    assert_eq!(grant.user.display_name(), "Ada King");
}

#[tokio::test]
async fn test_login_rejected_is_auth_error_with_server_text() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "error": "Invalid username or password"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .login(&Credentials {
            username: "ada".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err, Error::Auth("Invalid username or password".into()));
}

#[tokio::test]
async fn test_bearer_token_is_attached() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/people"))
        .and(header("authorization", "Bearer tok-7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [
                {"id": 1, "given_name": "Ann", "family_name": "Roe", "other_names": null,
                 "gender": "female", "birth_date": "1901-05-02", "death_date": "1980-01-01",
                 "birth_place": "York", "bio": null, "relation": "grandmother"},
                {"id": 2, "given_name": "Ben", "family_name": "Roe", "birth_date": null,
                 "death_date": null}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let people = client.list_people(Some("tok-7")).await.unwrap();

    assert_eq!(people.len(), 2);
    assert_eq!(people[0].full_name(), "Ann Roe");
    assert_eq!(people[0].status().label(), "Deceased");
    assert_eq!(people[1].status().label(), "Alive");
}

#[tokio::test]
async fn test_list_401_is_auth_error() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "error": "Authentication required"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.list_events(Some("stale")).await.unwrap_err();
    assert!(err.is_auth());
}

#[tokio::test]
async fn test_create_person_returns_new_id() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/people"))
        .and(body_json(json!({
            "given_name": "Cara",
            "family_name": "Roe",
            "other_names": "",
            "gender": "",
            "birth_date": "1950-03-04",
            "death_date": null,
            "birth_place": "",
            "bio": "",
            "relation": ""
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "message": "Person created successfully",
            "id": 42
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let input = PersonInput {
        given_name: "Cara".into(),
        family_name: "Roe".into(),
        birth_date: Some("1950-03-04".into()),
        ..Default::default()
    };
    let id = client.create_person(Some("tok"), &input).await.unwrap();
    assert_eq!(id, Some(42));
}

#[tokio::test]
async fn test_application_error_is_verbatim() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/relationships/3"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "success": false,
            "error": "A person cannot have a relationship with themselves"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let input = RelationshipInput {
        person1_id: 1,
        person2_id: 1,
        kind: RelationType::Brother,
        details: String::new(),
    };
    let err = client
        .update_relationship(Some("tok"), 3, &input)
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "A person cannot have a relationship with themselves"
    );
}

#[tokio::test]
async fn test_relationship_types_skip_unknown_entries() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/relationships/types"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": ["father", "mother", "godparent", "wife"]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let types = client.relationship_types(Some("tok")).await.unwrap();
    assert_eq!(
        types,
        vec![RelationType::Father, RelationType::Mother, RelationType::Wife]
    );
}

#[tokio::test]
async fn test_profile_update_and_event_delete() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/auth/me"))
        .and(body_json(json!({"full_name": "Ada L", "email": "ada@example.org"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "user": {"id": 1, "username": "ada", "email": "ada@example.org", "full_name": "Ada L"}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/events/8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let user = client
        .update_profile(
            Some("tok"),
            &ProfileUpdate::new("Ada L".into(), "ada@example.org".into(), ""),
        )
        .await
        .unwrap();
    assert_eq!(user.full_name.as_deref(), Some("Ada L"));

    client.delete_event(Some("tok"), 8).await.unwrap();
}

#[tokio::test]
async fn test_non_json_body_is_connection_error() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let input = EventInput {
        created_by: 1,
        title: "Birth".into(),
        event_date: None,
        place: String::new(),
        description: String::new(),
    };
    let err = client.create_event(Some("tok"), &input).await.unwrap_err();
    assert!(matches!(err, Error::Connection(_)));
}

#[tokio::test]
async fn test_html_405_from_spa_fallback_is_connection_error() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    // The server's GET-only frontend fallback answers unknown POSTs like this.
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .respond_with(
            ResponseTemplate::new(405)
                .insert_header("content-type", "text/html; charset=utf-8")
                .set_body_string("<!doctype html><title>405 Method Not Allowed</title>"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.logout(Some("tok")).await.unwrap_err();
    assert!(matches!(err, Error::Connection(_)));
    assert!(!err.is_auth());
}

#[tokio::test]
async fn test_refused_connection_is_connection_error() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    // Bind then drop to get a port nothing listens on.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = ApiClient::new(format!("http://127.0.0.1:{port}/api")).unwrap();

    let err = client.health().await.unwrap_err();
    assert!(matches!(err, Error::Connection(_)));
    assert!(err.to_string().starts_with("Connection error: "));
}
