mod common;

use masto_http::api::{V1, V2};
use masto_http::{params, Connection, HttpMethod, MastoError, TransportCode};
use mockito::{Matcher, Server};
use serde_json::json;
use std::io::Write;

#[test]
fn test_get_sends_query_string() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/api/v1/timelines/public")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".into(), "4".into()),
            Matcher::UrlEncoded("local".into(), "true".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([{ "id": "1" }]).to_string())
        .create();

    let instance = common::instance_for(&server, "");
    let connection = Connection::new(&instance).unwrap();
    let answer = connection
        .get(V1::TimelinesPublic, &params! { "limit" => "4", "local" => "true" })
        .unwrap();

    mock.assert();
    assert!(answer.is_success());
    assert_eq!(answer.transport_code, TransportCode::OK);
    assert_eq!(answer.header("Content-Type"), "application/json");
    assert_eq!(answer.body, r#"[{"id":"1"}]"#);
}

#[test]
fn test_get_sends_list_parameters() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/api/v1/accounts/relationships")
        .match_query(Matcher::Regex(r"id\[\]=1&id\[\]=2".into()))
        .with_status(200)
        .with_body("[]")
        .create();

    let instance = common::instance_for(&server, "");
    let connection = Connection::new(&instance).unwrap();
    let answer = connection
        .get(V1::AccountsRelationships, &params! { "id" => ["1", "2"] })
        .unwrap();

    mock.assert();
    assert!(answer.is_success());
}

#[test]
fn test_placeholder_is_substituted() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/api/v1/statuses/42/favourite")
        .match_header("authorization", "Bearer abc")
        .with_status(200)
        .with_body(json!({ "id": "42", "favourited": true }).to_string())
        .create();

    let instance = common::instance_for(&server, "abc");
    let connection = Connection::new(&instance).unwrap();
    let answer = connection
        .post(V1::StatusesIdFavourite, &params! { "id" => "42" })
        .unwrap();

    mock.assert();
    assert!(answer.is_success());
}

#[test]
fn test_post_sends_multipart_form() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/api/v1/statuses")
        .match_header("content-type", Matcher::Regex("^multipart/form-data".into()))
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"(?s)name="status".*?\r\n\r\nHow is the weather\?\r\n"#.into()),
            Matcher::Regex(r#"(?s)name="poll\[options\]\[\]".*?\r\n\r\nSunny\r\n"#.into()),
            Matcher::Regex(r#"(?s)name="poll\[options\]\[\]".*?\r\n\r\nRainy\r\n"#.into()),
        ]))
        .with_status(200)
        .with_body(json!({ "id": "7" }).to_string())
        .create();

    let instance = common::instance_for(&server, "abc");
    let connection = Connection::new(&instance).unwrap();
    let answer = connection
        .post(
            V1::Statuses,
            &params! {
                "status" => "How is the weather?",
                "poll[options]" => ["Sunny", "Rainy"],
                "poll[expires_in]" => "86400",
            },
        )
        .unwrap();

    mock.assert();
    assert!(answer.is_success());
}

#[test]
fn test_post_uploads_file() {
    let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
    file.write_all(b"not really a png").unwrap();

    let mut server = Server::new();
    let mock = server
        .mock("POST", "/api/v2/media")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="file"; filename=""#.into()),
            Matcher::Regex("not really a png".into()),
            Matcher::Regex(r#"(?s)name="description".*?\r\n\r\nA cat\r\n"#.into()),
        ]))
        .with_status(200)
        .with_body(json!({ "id": "9", "type": "image" }).to_string())
        .create();

    let instance = common::instance_for(&server, "abc");
    let connection = Connection::new(&instance).unwrap();
    let upload = format!("@file:{}", file.path().display());
    let answer = connection
        .post(V2::Media, &params! { "file" => upload, "description" => "A cat" })
        .unwrap();

    mock.assert();
    assert!(answer.is_success());
}

#[test]
fn test_missing_upload_is_error() {
    let server = Server::new();
    let instance = common::instance_for(&server, "abc");
    let connection = Connection::new(&instance).unwrap();
    let err = connection
        .post(V2::Media, &params! { "file" => "@file:/nonexistent/cat.png" })
        .unwrap_err();
    assert!(matches!(err, MastoError::Upload { .. }));
    assert_eq!(err.code(), TransportCode::READ_ERROR);
}

#[test]
fn test_http_error_is_answer() {
    let mut server = Server::new();
    let mock = server
        .mock("DELETE", "/api/v1/statuses/404")
        .with_status(404)
        .with_body(json!({ "error": "Record not found" }).to_string())
        .create();

    let instance = common::instance_for(&server, "abc");
    let connection = Connection::new(&instance).unwrap();
    let answer = connection
        .delete(V1::StatusesId, &params! { "id" => "404" })
        .unwrap();

    mock.assert();
    assert!(!answer.is_success());
    assert_eq!(answer.transport_code, TransportCode::OK);
    assert_eq!(answer.http_status, 404);
    assert!(answer.body.contains("Record not found"));
}

#[test]
fn test_patch_and_put() {
    let mut server = Server::new();
    let patch = server
        .mock("PATCH", "/api/v1/accounts/update_credentials")
        .match_body(Matcher::Regex(r#"(?s)name="display_name".*?\r\n\r\nAlice\r\n"#.into()))
        .with_status(200)
        .create();
    let put = server
        .mock("PUT", "/api/v1/media/3")
        .with_status(200)
        .create();

    let instance = common::instance_for(&server, "abc");
    let connection = Connection::new(&instance).unwrap();
    let answer = connection
        .patch(V1::AccountsUpdateCredentials, &params! { "display_name" => "Alice" })
        .unwrap();
    assert!(answer.is_success());
    let answer = connection
        .put(V1::MediaId, &params! { "id" => "3", "description" => "new" })
        .unwrap();
    assert!(answer.is_success());

    patch.assert();
    put.assert();
}

#[test]
fn test_pagination_from_link_header() {
    let mut server = Server::new();
    let link = format!(
        r#"<{url}/api/v1/timelines/home?max_id=105>; rel="next", <{url}/api/v1/timelines/home?min_id=107>; rel="prev""#,
        url = server.url()
    );
    let _first = server
        .mock("GET", "/api/v1/timelines/home")
        .with_status(200)
        .with_header("Link", &link)
        .with_body("[]")
        .create();
    let older = server
        .mock("GET", "/api/v1/timelines/home")
        .match_query(Matcher::UrlEncoded("max_id".into(), "105".into()))
        .with_status(200)
        .with_body("[]")
        .create();

    let instance = common::instance_for(&server, "abc");
    let connection = Connection::new(&instance).unwrap();
    let answer = connection.get(V1::TimelinesHome, &params! {}).unwrap();
    let next = answer.next();
    assert_eq!(next.len(), 1);
    assert!(answer.prev().contains_key("min_id"));

    let answer = connection.get(V1::TimelinesHome, &next).unwrap();
    assert!(answer.is_success());
    older.assert();
}

#[test]
fn test_absolute_path_is_used_as_is() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/nodeinfo/2.0")
        .with_status(200)
        .with_body("{}")
        .create();

    let instance = common::instance_for(&server, "");
    let connection = Connection::new(&instance).unwrap();
    let uri = format!("{}/nodeinfo/2.0", server.url());
    let answer = connection.call(HttpMethod::Get, uri, &params! {}).unwrap();

    mock.assert();
    assert!(answer.is_success());
}

#[test]
fn test_connection_refused_is_answer() {
    let server = Server::new();
    let mut instance = common::instance_for(&server, "");
    // Route everything through a proxy that is not listening.
    instance.set_proxy("http://127.0.0.1:9").unwrap();
    let connection = Connection::new(&instance).unwrap();
    let answer = connection.get(V1::Instance, &params! {}).unwrap();

    assert!(!answer.is_success());
    assert!(!answer.transport_code.is_ok());
    assert_eq!(answer.http_status, 0);
    assert!(!answer.error_message.is_empty());
}
