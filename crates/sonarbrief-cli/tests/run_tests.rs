// Rust guideline compliant 2026-10-19

//! Integration tests for the run loop.

use serde_json::json;
use sonarbrief_cli::run;
use sonarbrief_core::testing::ScriptedTransport;
use sonarbrief_core::NO_ISSUES_REPORT;
use std::collections::HashMap;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

#[test]
fn test_run_missing_token_makes_no_request() {
    let transport = ScriptedTransport::new();

    let result = run(env(&[("PROJECT_KEY", "proj")]), &transport);

    let err = result.expect_err("missing token should fail");
    assert!(err.to_string().contains("SONAR_TOKEN environment variable is required"));
    assert!(transport.requests().is_empty());
}

#[test]
fn test_run_missing_project_makes_no_request() {
    let transport = ScriptedTransport::new();

    let result = run(env(&[("SONAR_TOKEN", "tok")]), &transport);

    let err = result.expect_err("missing project key should fail");
    assert!(err.to_string().contains("PROJECT_KEY environment variable is required"));
    assert!(transport.requests().is_empty());
}

#[test]
fn test_run_with_no_issues() {
    let transport = ScriptedTransport::new();
    transport.reply(
        "issues/search",
        200,
        json!({ "paging": { "pageIndex": 1, "pageSize": 100, "total": 0 }, "issues": [] })
            .to_string(),
    );

    let report = run(env(&[("SONAR_TOKEN", "tok"), ("PROJECT_KEY", "proj")]), &transport)
        .expect("run should succeed");

    assert_eq!(report, NO_ISSUES_REPORT);
    let request = &transport.requests()[0];
    assert_eq!(request.url, "https://sonarcloud.io/api/issues/search");
    assert_eq!(request.bearer_token, "tok");
    assert_eq!(request.param("projectKeys"), Some("proj"));
}

#[test]
fn test_run_survives_search_failure() {
    let transport = ScriptedTransport::new();
    transport.reply("issues/search", 401, "Unauthorized");

    let report = run(env(&[("SONAR_TOKEN", "bad"), ("PROJECT_KEY", "proj")]), &transport)
        .expect("search failures are not fatal");

    assert_eq!(report, NO_ISSUES_REPORT);
}

#[test]
fn test_run_formats_fetched_issues() {
    let transport = ScriptedTransport::new();
    transport
        .reply(
            "issues/search",
            200,
            json!({
                "paging": { "pageIndex": 1, "pageSize": 100, "total": 1 },
                "issues": [{
                    "key": "K1",
                    "component": "proj:web:src/index.tsx",
                    "line": 3,
                    "type": "CODE_SMELL",
                    "severity": "MAJOR",
                    "message": "Extract this nested ternary operation",
                    "rule": "typescript:S3358",
                    "effort": "5min",
                    "tags": ["confusing"],
                    "status": "OPEN"
                }]
            })
            .to_string(),
        )
        .reply(
            "sources/lines",
            200,
            json!({ "sources": [{ "line": 3, "code": "const a = x ? y ? 1 : 2 : 3;" }] })
                .to_string(),
        )
        .reply(
            "rules/show",
            200,
            json!({ "rule": { "name": "Ternary operators should not be nested" } }).to_string(),
        );

    let report = run(env(&[("SONAR_TOKEN", "tok"), ("PROJECT_KEY", "proj")]), &transport)
        .expect("run should succeed");

    assert!(report.contains("Module: web\n"));
    assert!(report.contains("File: src/index.tsx\n"));
    assert!(report.contains("3: const a = x ? y ? 1 : 2 : 3;\n"));
    assert!(report.contains("Rule Description: Ternary operators should not be nested\n"));
    assert!(report.contains("Tags: confusing\n"));
    assert!(report.contains(
        "LLM Fix Prompt: Refactor the nested ternary into separate if-statements or a variable assignment for clarity.\n"
    ));
    let context_request = &transport.requests_to("sources/lines")[0];
    assert_eq!(context_request.param("from"), Some("1"));
    assert_eq!(context_request.param("to"), Some("8"));
}
