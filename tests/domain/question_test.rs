use quizgen::domain::{DifficultyLevel, QuestionType, QuizQuestion};

#[test]
fn given_wire_name_when_parsing_question_type_then_round_trips() {
    for (name, expected) in [
        ("Multiple Choice", QuestionType::MultipleChoice),
        ("True/False", QuestionType::TrueFalse),
        ("Short Answer", QuestionType::ShortAnswer),
        ("Fill in the Blank", QuestionType::FillInBlank),
    ] {
        let parsed: QuestionType = name.parse().unwrap();
        assert_eq!(parsed, expected);
        assert_eq!(parsed.as_str(), name);
    }
}

#[test]
fn given_unknown_name_when_parsing_question_type_then_fails() {
    assert!("Essay".parse::<QuestionType>().is_err());
}

#[test]
fn given_difficulty_when_parsing_then_round_trips() {
    for name in ["Easy", "Medium", "Hard"] {
        let parsed: DifficultyLevel = name.parse().unwrap();
        assert_eq!(parsed.as_str(), name);
    }
}

#[test]
fn given_question_when_serializing_then_wire_fields_are_camel_case() {
    let question = QuizQuestion {
        id: 1,
        text: "The sky is ___.".to_string(),
        options: None,
        correct_answer: "blue".to_string(),
        question_type: QuestionType::FillInBlank,
        domain: None,
        explanation: None,
    };

    let json = serde_json::to_value(&question).unwrap();

    assert_eq!(json["correctAnswer"], "blue");
    assert_eq!(json["type"], "Fill in the Blank");
    assert_eq!(json["text"], "The sky is ___.");
    assert!(json.get("options").is_none());
    assert!(json.get("domain").is_none());
}

#[test]
fn given_true_false_question_when_serializing_then_options_are_present() {
    let question = QuizQuestion {
        id: 2,
        text: "Rust has a garbage collector.".to_string(),
        options: Some(vec!["True".to_string(), "False".to_string()]),
        correct_answer: "False".to_string(),
        question_type: QuestionType::TrueFalse,
        domain: Some("Memory management".to_string()),
        explanation: None,
    };

    let json = serde_json::to_value(&question).unwrap();

    assert_eq!(json["options"][0], "True");
    assert_eq!(json["options"][1], "False");
    assert_eq!(json["type"], "True/False");
    assert_eq!(json["domain"], "Memory management");
}
