//! Curl command generation tests
//!
//! Commands are split back into words with a POSIX shell splitter, so these
//! check what a shell would actually pass to curl.

use http_to_curl::{generate_curl_command, BodyKind, RequestBody, RequestDescriptor};
use serde_json::json;

fn words(command: &str) -> Vec<String> {
    shlex::split(command).expect("command is not valid shell")
}

fn host(method: &str, url: &str) -> RequestDescriptor {
    RequestDescriptor::new(method, url).with_header("Host", "example.com")
}

// ============================================================================
// Token Order
// ============================================================================

#[test]
fn test_url_is_last_and_method_appears_once() {
    let request = host("delete", "https://example.com/items/1?force=true")
        .with_header("Accept", "*/*");
    let words = words(&generate_curl_command(&request).unwrap());

    assert_eq!(words.first().map(String::as_str), Some("curl"));
    assert_eq!(words.last().map(String::as_str), Some("https://example.com/items/1?force=true"));
    assert_eq!(words.iter().filter(|w| *w == "-X").count(), 1);

    let x = words.iter().position(|w| w == "-X").unwrap();
    assert_eq!(words[x + 1], "DELETE");
    assert_eq!(x + 2, words.len() - 1);
}

#[test]
fn test_headers_come_before_body() {
    let request = host("post", "https://example.com")
        .with_header("Content-Type", "application/json")
        .with_body(RequestBody::json(&json!({"a": 1})).unwrap());
    let words = words(&generate_curl_command(&request).unwrap());

    assert_eq!(
        words,
        vec![
            "curl",
            "-H",
            "Host: example.com",
            "-H",
            "Content-type: application/json",
            "-d",
            r#"{"a":1}"#,
            "-X",
            "POST",
            "https://example.com",
        ]
    );
}

#[test]
fn test_interleaved_repeated_headers() {
    let request = RequestDescriptor::new("GET", "https://example.com")
        .with_header("A", "1")
        .with_header("B", "2")
        .with_header("A", "3");

    assert_eq!(
        generate_curl_command(&request).unwrap(),
        "curl -H 'A: 1' -H 'B: 2' -H 'A: 3' -X 'GET' 'https://example.com'"
    );
}

// ============================================================================
// Quoting
// ============================================================================

#[test]
fn test_hostile_values_survive_the_shell() {
    let nasty = r#"it's $(rm -rf /) `id` "quoted" \ back; & | > <"#;
    let request = host("post", "https://example.com/?q='x'")
        .with_header("X-Nasty", nasty)
        .with_body(RequestBody::json(&json!({"msg": nasty})).unwrap());
    let words = words(&generate_curl_command(&request).unwrap());

    assert!(words.contains(&format!("X-Nasty: {}", nasty)));
    let d = words.iter().position(|w| w == "-d").unwrap();
    let body: serde_json::Value = serde_json::from_str(&words[d + 1]).unwrap();
    assert_eq!(body["msg"], nasty);
    assert_eq!(words.last().unwrap(), "https://example.com/?q='x'");
}

#[test]
fn test_single_quote_escape_form() {
    let request = RequestDescriptor::new("GET", "https://example.com").with_header("X-Name", "O'Brien");
    let command = generate_curl_command(&request).unwrap();

    assert!(command.contains(r"-H 'X-Name: O'\''Brien'"), "{}", command);
}

#[test]
fn test_empty_header_value() {
    let request = RequestDescriptor::new("GET", "https://example.com").with_header("X-Empty", "");
    let words = words(&generate_curl_command(&request).unwrap());

    assert_eq!(words[2], "X-Empty: ");
}

// ============================================================================
// Bodies
// ============================================================================

#[test]
fn test_form_body_is_urlencoded() {
    let request = host("post", "https://example.com")
        .with_body(RequestBody::form(&json!({"foo": "bar", "q": "a b&c"})).unwrap());

    assert_eq!(
        generate_curl_command(&request).unwrap(),
        "curl -H 'Host: example.com' -d 'foo=bar&q=a+b%26c' -X 'POST' 'https://example.com'"
    );
}

#[test]
fn test_body_ignored_for_non_body_methods() {
    for method in ["get", "delete", "head", "options"] {
        let request = host(method, "https://example.com")
            .with_body(RequestBody::json(&json!({"ignored": true})).unwrap());
        let words = words(&generate_curl_command(&request).unwrap());
        assert!(!words.iter().any(|w| w == "-d"), "{} rendered a body", method);
    }
}

#[test]
fn test_unclassified_bodies_are_omitted() {
    for kind in [BodyKind::Multipart, BodyKind::Raw] {
        let request = host("post", "https://example.com").with_body(RequestBody::new(kind, json!("raw")));
        assert_eq!(
            generate_curl_command(&request).unwrap(),
            "curl -H 'Host: example.com' -X 'POST' 'https://example.com'"
        );
    }
}

#[test]
fn test_unicode_json_body_is_verbatim() {
    let request = host("put", "https://example.com")
        .with_body(RequestBody::json(&json!({"name": "Zoë", "city": "東京"})).unwrap());
    let words = words(&generate_curl_command(&request).unwrap());

    let d = words.iter().position(|w| w == "-d").unwrap();
    assert_eq!(words[d + 1], r#"{"name":"Zoë","city":"東京"}"#);
}

// ============================================================================
// Threading
// ============================================================================

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_core_types_are_send_and_sync() {
    assert_send_sync::<RequestDescriptor>();
    assert_send_sync::<RequestBody>();
    assert_send_sync::<http_to_curl::HeaderList>();
    assert_send_sync::<http_to_curl::RequestOptions>();
    assert_send_sync::<http_to_curl::CommandLineGenerator>();
    assert_send_sync::<http_to_curl::CurlClient>();
    assert_send_sync::<http_to_curl::hooks::BeforeSendHooks>();
    assert_send_sync::<http_to_curl::Config>();
}

#[test]
fn test_translate_from_many_threads() {
    let request = std::sync::Arc::new(
        host("post", "https://example.com")
            .with_body(RequestBody::json(&json!({"n": 1})).unwrap()),
    );
    let expected = generate_curl_command(&request).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let request = request.clone();
            std::thread::spawn(move || generate_curl_command(&request).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
