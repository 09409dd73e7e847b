#![cfg(test)]

use super::*;

#[test]
fn test_score_field() {
    let mut score = Field::builder("score")
        .rule(Rule::positive("Score must be positive"))
        .rule(Rule::less_than(100, "Score must be < 100"))
        .build();

    let err = score.set(100).unwrap_err();
    assert_eq!(err.kind(), RuleKind::LessThan);
    assert_eq!(err.msg(), "Score must be < 100");
    assert_eq!(err.to_string(), "invalid score: Score must be < 100");
    assert_eq!(score.get(), None, "A rejected value must not be stored.");

    score.set(42).unwrap();
    assert_eq!(
        score.set(0).unwrap_err().kind(),
        RuleKind::Positive,
        "Rules should be reported in declaration order."
    );
    assert_eq!(score.get(), Some(&42), "The previous value survives a rejected set.");
    assert_eq!(score.take(), Some(42));
}

#[test]
fn test_sign_rules() {
    let cases: [(Rule<i64>, [bool; 3]); 5] = [
        (Rule::positive("p"), [false, false, true]),
        (Rule::positive_or_zero("pz"), [false, true, true]),
        (Rule::negative("n"), [true, false, false]),
        (Rule::negative_or_zero("nz"), [true, true, false]),
        (Rule::non_zero("nonzero"), [true, false, true]),
    ];

    for (rule, expected) in cases {
        let actual = [-1, 0, 1].map(|v| rule.test(&v));
        assert_eq!(actual, expected, "{:?} gave the wrong verdict for -1, 0, 1", rule.kind());
    }

    assert!(Rule::<f64>::positive("p").test(&0.5));
}

#[test]
fn test_comparison_rules() {
    assert!(Rule::less_or_equal_than(10, "").test(&10));
    assert!(!Rule::greater_than(10, "").test(&10));
    assert!(Rule::greater_or_equal_than(10, "").test(&10));
    assert!(!Rule::not_equal(String::from("root"), "").test(&String::from("root")));
}

#[test]
fn test_text_and_size_rules() {
    let mut name = Field::<String>::builder("name")
        .rule(Rule::not_blank("name is required"))
        .rule(Rule::size_less_or_equal_than(4, "name is too long"))
        .build();

    assert_eq!(name.set(String::new()).unwrap_err().kind(), RuleKind::NotBlank);
    assert_eq!(name.set(String::from(" \t\n")).unwrap_err().kind(), RuleKind::NotBlank);
    assert_eq!(name.set(String::from("alice")).unwrap_err().kind(), RuleKind::SizeLessOrEqualThan);
    assert!(name.set(String::from("çava")).is_ok(), "Sizes are counted in chars, not bytes.");

    let tags: Rule<Vec<&str>> = Rule::not_empty("at least one tag");
    assert!(!tags.test(&vec![]));
    assert!(Rule::<Vec<u8>>::size_equal(2, "").test(&vec![1, 2]));
    assert!(Rule::<Vec<u8>>::size_not_equal(2, "").test(&vec![1]));
    assert!(Rule::<&str>::size_greater_than(1, "").test(&"ab"));
    assert!(!Rule::<&str>::size_greater_or_equal_than(3, "").test(&"ab"));
    assert!(Rule::<&str>::size_less_than(3, "").test(&"ab"));
}

#[test]
fn test_builder_with_value() {
    let port = Field::builder("port")
        .rule(Rule::custom("port must not be privileged", |v: &u16| *v >= 1024))
        .with_value(80)
        .unwrap_err();
    assert_eq!(port.kind(), RuleKind::Custom);
    assert_eq!(port.field(), "port");

    let field = Field::builder("port")
        .rule(Rule::custom("port must not be privileged", |v: &u16| *v >= 1024))
        .with_value(8080)
        .unwrap();
    assert_eq!(field.get(), Some(&8080));
    assert_eq!(field.rules().len(), 1);
}
