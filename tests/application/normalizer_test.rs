use quizgen::application::ports::{RawAnswer, RawQuestion};
use quizgen::application::services::{RejectReason, normalize};
use quizgen::domain::QuestionType;

fn raw(text: &str, answer: RawAnswer) -> RawQuestion {
    RawQuestion {
        text: text.to_string(),
        answer,
        options: None,
        explanation: None,
    }
}

#[test]
fn given_true_string_answer_when_normalizing_true_false_then_answer_and_options_are_canonical() {
    let item = raw(
        "The mitochondria is the powerhouse of the cell.",
        RawAnswer::Text("True".to_string()),
    );

    let question = normalize(item, QuestionType::TrueFalse, None).unwrap();

    assert_eq!(question.correct_answer, "True");
    assert_eq!(
        question.options,
        Some(vec!["True".to_string(), "False".to_string()])
    );
}

#[test]
fn given_boolean_answer_when_normalizing_true_false_then_answer_is_rendered() {
    let item = raw("Water boils at 90 degrees Celsius.", RawAnswer::Bool(false));

    let question = normalize(item, QuestionType::TrueFalse, None).unwrap();

    assert_eq!(question.correct_answer, "False");
}

#[test]
fn given_mixed_case_false_string_when_normalizing_true_false_then_coerced() {
    let item = raw("The sun orbits the earth.", RawAnswer::Text("FALSE".to_string()));

    let question = normalize(item, QuestionType::TrueFalse, None).unwrap();

    assert_eq!(question.correct_answer, "False");
}

#[test]
fn given_non_boolean_answer_when_normalizing_true_false_then_rejected() {
    let item = raw("Pick one.", RawAnswer::Text("Maybe".to_string()));

    let result = normalize(item, QuestionType::TrueFalse, None);

    assert!(matches!(result, Err(RejectReason::NonBooleanAnswer(_))));
}

#[test]
fn given_single_option_when_normalizing_multiple_choice_then_rejected() {
    let item = RawQuestion {
        text: "Which planet is closest to the sun?".to_string(),
        answer: RawAnswer::Text("Mercury".to_string()),
        options: Some(vec!["Mercury".to_string()]),
        explanation: None,
    };

    let result = normalize(item, QuestionType::MultipleChoice, None);

    assert!(matches!(result, Err(RejectReason::TooFewOptions(1))));
}

#[test]
fn given_missing_options_when_normalizing_multiple_choice_then_rejected() {
    let item = raw(
        "Which planet is closest to the sun?",
        RawAnswer::Text("Mercury".to_string()),
    );

    let result = normalize(item, QuestionType::MultipleChoice, None);

    assert!(matches!(result, Err(RejectReason::MissingOptions)));
}

#[test]
fn given_enough_options_when_normalizing_multiple_choice_then_options_kept_in_order() {
    let item = RawQuestion {
        text: "Which planet is closest to the sun?".to_string(),
        answer: RawAnswer::Text("Mercury".to_string()),
        options: Some(vec![
            "Venus".to_string(),
            "Mercury".to_string(),
            "Mars".to_string(),
        ]),
        explanation: Some("Mercury orbits at 0.39 AU.".to_string()),
    };

    let question = normalize(item, QuestionType::MultipleChoice, Some("Astronomy")).unwrap();

    assert_eq!(
        question.options,
        Some(vec![
            "Venus".to_string(),
            "Mercury".to_string(),
            "Mars".to_string()
        ])
    );
    assert_eq!(question.domain.as_deref(), Some("Astronomy"));
    assert_eq!(
        question.explanation.as_deref(),
        Some("Mercury orbits at 0.39 AU.")
    );
}

#[test]
fn given_legacy_blank_marker_when_normalizing_fill_in_blank_then_rewritten() {
    let item = raw("The sky is [blank].", RawAnswer::Text("blue".to_string()));

    let question = normalize(item, QuestionType::FillInBlank, None).unwrap();

    assert_eq!(question.text, "The sky is ___.");
    assert_eq!(question.options, None);
}

#[test]
fn given_no_blank_marker_when_normalizing_fill_in_blank_then_rejected() {
    let item = raw("The sky is blue.", RawAnswer::Text("blue".to_string()));

    let result = normalize(item, QuestionType::FillInBlank, None);

    assert!(matches!(result, Err(RejectReason::MissingBlankMarker)));
}

#[test]
fn given_empty_text_when_normalizing_then_rejected() {
    let item = raw("   ", RawAnswer::Text("answer".to_string()));

    let result = normalize(item, QuestionType::ShortAnswer, None);

    assert!(matches!(result, Err(RejectReason::EmptyText)));
}

#[test]
fn given_empty_answer_when_normalizing_short_answer_then_rejected() {
    let item = raw("Explain photosynthesis.", RawAnswer::Text("  ".to_string()));

    let result = normalize(item, QuestionType::ShortAnswer, None);

    assert!(matches!(result, Err(RejectReason::EmptyAnswer)));
}

#[test]
fn given_short_answer_item_when_normalizing_then_no_options() {
    let item = raw(
        "Explain photosynthesis.",
        RawAnswer::Text("Plants convert light into chemical energy.".to_string()),
    );

    let question = normalize(item, QuestionType::ShortAnswer, None).unwrap();

    assert_eq!(question.options, None);
    assert_eq!(question.question_type, QuestionType::ShortAnswer);
}
