use rideshare_gate::{Decision, Headers};

pub fn assert_allowed(decision: Decision, status: u16) -> (Headers, Option<String>) {
    assert!(
        decision.allowed,
        "expected an allow decision, got {decision:?}"
    );
    assert_eq!(decision.status, status);
    (decision.headers, decision.body)
}

pub fn assert_denied(decision: Decision, status: u16) -> (Headers, Option<String>) {
    assert!(
        !decision.allowed,
        "expected a deny decision, got {decision:?}"
    );
    assert_eq!(decision.status, status);
    (decision.headers, decision.body)
}

pub fn assert_header_eq(headers: &Headers, name: &str, expected: &str) {
    assert_eq!(
        headers.get(name).map(String::as_str),
        Some(expected),
        "header {name} mismatch in {headers:?}"
    );
}

pub fn assert_message_contains(body: Option<String>, needle: &str) {
    let body = body.expect("decision should carry a diagnostic body");
    assert!(
        body.contains(needle),
        "body {body:?} does not contain {needle:?}"
    );
}
