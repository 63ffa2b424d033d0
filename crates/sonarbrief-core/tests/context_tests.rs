// Rust guideline compliant 2026-10-19

//! Integration tests for code context and rule lookups.

use serde_json::json;
use sonarbrief_core::context::{EMPTY_CONTEXT_PLACEHOLDER, NO_LINE_PLACEHOLDER};
use sonarbrief_core::testing::ScriptedTransport;
use sonarbrief_core::{Config, SonarClient};

const FILE: &str = "myproj:src/app.ts";

fn config() -> Config {
    Config::new("test-token", "myproj").with_base_url("http://sonar.test/api")
}

#[test]
fn test_context_requests_window_around_line() {
    let transport = ScriptedTransport::new();
    transport.reply("sources/lines", 200, json!({ "sources": [] }).to_string());

    let client = SonarClient::new(config(), &transport);
    client.fetch_context(FILE, Some(10));

    let request = &transport.requests_to("sources/lines")[0];
    assert_eq!(request.param("key"), Some(FILE));
    assert_eq!(request.param("from"), Some("5"));
    assert_eq!(request.param("to"), Some("15"));
    assert_eq!(request.bearer_token, "test-token");
}

#[test]
fn test_context_window_clamps_at_line_one() {
    let transport = ScriptedTransport::new();
    transport.reply("sources/lines", 200, json!({ "sources": [] }).to_string());

    let client = SonarClient::new(config(), &transport);
    client.fetch_context(FILE, Some(2));

    let request = &transport.requests_to("sources/lines")[0];
    assert_eq!(request.param("from"), Some("1"));
    assert_eq!(request.param("to"), Some("7"));
}

#[test]
fn test_context_renders_numbered_lines() {
    let transport = ScriptedTransport::new();
    transport.reply(
        "sources/lines",
        200,
        json!({
            "sources": [
                { "line": 1, "code": "import a from 'a';" },
                { "line": 2, "code": "export const b = 1;" }
            ]
        })
        .to_string(),
    );

    let client = SonarClient::new(config(), &transport);
    let context = client.fetch_context(FILE, Some(1));

    assert_eq!(context, "1: import a from 'a';\n2: export const b = 1;");
}

#[test]
fn test_context_placeholders_are_distinct() {
    let transport = ScriptedTransport::new();
    transport
        .reply("sources/lines", 200, json!({ "sources": [] }).to_string())
        .reply("sources/lines", 404, "not found")
        .fail("sources/lines", "connection reset");

    let client = SonarClient::new(config(), &transport);
    let no_line = client.fetch_context(FILE, None);
    let empty = client.fetch_context(FILE, Some(3));
    let status = client.fetch_context(FILE, Some(3));
    let failure = client.fetch_context(FILE, Some(3));

    assert_eq!(no_line, NO_LINE_PLACEHOLDER);
    assert_eq!(empty, EMPTY_CONTEXT_PLACEHOLDER);
    assert_eq!(status, "(Failed to fetch context: HTTP 404)");
    assert!(failure.starts_with("(Failed to fetch context:"));
    assert!(failure.contains("connection reset"));

    let all = [&no_line, &empty, &status, &failure];
    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_context_without_line_sends_no_request() {
    let transport = ScriptedTransport::new();
    let client = SonarClient::new(config(), &transport);

    client.fetch_context(FILE, None);

    assert!(transport.requests().is_empty());
}

#[test]
fn test_rule_description_returns_name() {
    let transport = ScriptedTransport::new();
    transport.reply(
        "rules/show",
        200,
        json!({ "rule": { "key": "typescript:S1128", "name": "Unnecessary imports should be removed" } })
            .to_string(),
    );

    let client = SonarClient::new(config(), &transport);
    let name = client.fetch_rule_description("typescript:S1128");

    assert_eq!(name, "Unnecessary imports should be removed");
    let request = &transport.requests_to("rules/show")[0];
    assert_eq!(request.param("key"), Some("typescript:S1128"));
}

#[test]
fn test_rule_description_falls_back_on_failure() {
    let transport = ScriptedTransport::new();
    transport
        .reply("rules/show", 404, "unknown rule")
        .fail("rules/show", "timeout")
        .reply("rules/show", 200, json!({ "rule": {} }).to_string());

    let client = SonarClient::new(config(), &transport);

    assert_eq!(client.fetch_rule_description("x:1"), "N/A");
    assert_eq!(client.fetch_rule_description("x:1"), "N/A");
    assert_eq!(client.fetch_rule_description("x:1"), "N/A");
}
