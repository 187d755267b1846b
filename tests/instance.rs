mod common;

use mockito::Server;
use serde_json::json;

#[test]
fn test_max_chars_is_fetched_once() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/api/v1/instance")
        .with_status(200)
        .with_body(r#"{"uri":"example.com", "max_toot_chars" : 5000, "version":"3.5.3"}"#)
        .expect(1)
        .create();

    let instance = common::instance_for(&server, "");
    assert_eq!(instance.max_chars(), 5000);
    assert_eq!(instance.max_chars(), 5000);
    mock.assert();
}

#[test]
fn test_max_chars_from_configuration() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/api/v1/instance")
        .with_status(200)
        .with_body(
            json!({
                "uri": "example.com",
                "configuration": { "statuses": { "max_characters": 700, "max_media_attachments": 4 } }
            })
            .to_string(),
        )
        .create();

    let instance = common::instance_for(&server, "");
    assert_eq!(instance.max_chars(), 700);
}

#[test]
fn test_max_chars_defaults() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/api/v1/instance")
        .with_status(200)
        .with_body(json!({ "uri": "example.com" }).to_string())
        .create();
    let instance = common::instance_for(&server, "");
    assert_eq!(instance.max_chars(), 500);

    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/api/v1/instance")
        .with_status(503)
        .create();
    let instance = common::instance_for(&server, "");
    assert_eq!(instance.max_chars(), 500);
}

#[test]
fn test_max_chars_failure_is_not_cached() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/api/v1/instance")
        .with_status(500)
        .expect(2)
        .create();

    let instance = common::instance_for(&server, "");
    assert_eq!(instance.max_chars(), 500);
    assert_eq!(instance.max_chars(), 500);
    mock.assert();
}

#[test]
fn test_nodeinfo_selects_last_sorted_link() {
    let mut server = Server::new();
    let discovery = json!({
        "links": [
            { "rel": "http://nodeinfo.diaspora.software/ns/schema/2.1", "href": format!("{}/nodeinfo/2.1.json", server.url()) },
            { "rel": "http://nodeinfo.diaspora.software/ns/schema/2.0", "href": format!("{}/nodeinfo/2.0.json", server.url()) },
        ]
    });
    let _discovery = server
        .mock("GET", "/.well-known/nodeinfo")
        .with_status(200)
        .with_body(discovery.to_string())
        .create();
    let old = server
        .mock("GET", "/nodeinfo/2.0.json")
        .with_status(200)
        .expect(0)
        .create();
    let new = server
        .mock("GET", "/nodeinfo/2.1.json")
        .with_status(200)
        .with_body(
            json!({
                "version": "2.1",
                "metadata": { "postFormats": ["text/plain", "text/html", "text/markdown"] }
            })
            .to_string(),
        )
        .expect(2)
        .create();

    let instance = common::instance_for(&server, "");
    assert_eq!(
        instance.post_formats(),
        vec!["text/plain", "text/html", "text/markdown"]
    );
    // Cached: the document is not fetched again.
    assert_eq!(instance.post_formats().len(), 3);

    // nodeinfo() itself always fetches.
    let answer = instance.nodeinfo().unwrap();
    assert!(answer.is_success());
    assert!(answer.body.contains("\"2.1\""));

    old.assert();
    new.assert();
}

#[test]
fn test_post_formats_default() {
    let mut server = Server::new();
    let _discovery = server
        .mock("GET", "/.well-known/nodeinfo")
        .with_status(404)
        .create();

    let instance = common::instance_for(&server, "");
    let answer = instance.nodeinfo().unwrap();
    assert_eq!(answer.http_status, 404);
    assert_eq!(instance.post_formats(), vec!["text/plain"]);
}

#[test]
fn test_post_formats_missing_in_document() {
    let mut server = Server::new();
    let _discovery = server
        .mock("GET", "/.well-known/nodeinfo")
        .with_status(200)
        .with_body(json!({ "links": [{ "href": format!("{}/nodeinfo/2.0", server.url()) }] }).to_string())
        .create();
    let _document = server
        .mock("GET", "/nodeinfo/2.0")
        .with_status(200)
        .with_body(json!({ "version": "2.0", "metadata": {} }).to_string())
        .create();

    let instance = common::instance_for(&server, "");
    assert_eq!(instance.post_formats(), vec!["text/plain"]);
}

#[test]
fn test_setter_reaches_own_session_only() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/api/v1/instance")
        .match_header("authorization", "Bearer second")
        .with_status(200)
        .with_body(r#"{"max_toot_chars":1000}"#)
        .create();

    let mut instance = common::instance_for(&server, "first");
    let earlier = masto_http::Connection::new(&instance).unwrap();
    instance.set_access_token("second").unwrap();

    assert_eq!(instance.max_chars(), 1000);
    assert_eq!(
        earlier.session().config().access_token.as_deref(),
        Some("first")
    );
    mock.assert();
}
