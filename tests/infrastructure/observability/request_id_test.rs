use quizgen::infrastructure::observability::{REQUEST_ID_HEADER, RequestId};

#[test]
fn given_request_id_header_constant_when_accessed_then_returns_correct_value() {
    assert_eq!(REQUEST_ID_HEADER, "x-request-id");
}

#[test]
fn given_request_id_when_created_then_contains_value() {
    let request_id = RequestId("test-123".to_string());
    assert_eq!(request_id.0, "test-123");
}
