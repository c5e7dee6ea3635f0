use quizgen::infrastructure::observability::sanitize_prompt;

#[test]
fn given_empty_prompt_when_sanitizing_then_returns_placeholder() {
    assert_eq!(sanitize_prompt("   "), "[EMPTY]");
}

#[test]
fn given_short_prompt_when_sanitizing_then_returned_trimmed() {
    assert_eq!(sanitize_prompt("  Photosynthesis  "), "Photosynthesis");
}

#[test]
fn given_long_prompt_when_sanitizing_then_truncated_with_length_note() {
    let long = "a".repeat(500);

    let sanitized = sanitize_prompt(&long);

    assert!(sanitized.contains("... (500 chars total)"));
    assert!(sanitized.len() < long.len());
}

#[test]
fn given_bearer_token_when_sanitizing_then_redacted() {
    let sanitized = sanitize_prompt("quiz about Bearer sk-abc123 tokens");

    assert!(sanitized.contains("Bearer [REDACTED]"));
    assert!(!sanitized.contains("sk-abc123"));
}

#[test]
fn given_api_key_parameter_when_sanitizing_then_redacted() {
    let sanitized = sanitize_prompt("call with api_key=secret123&topic=math");

    assert!(sanitized.contains("api_key=[REDACTED]"));
    assert!(!sanitized.contains("secret123"));
}
