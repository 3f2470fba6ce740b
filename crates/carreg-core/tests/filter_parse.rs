use carreg_core::filter::{Column, Operator, Predicate, Union};
use pretty_assertions::assert_eq;

fn parse(raw: &str) -> carreg_core::Result<Predicate> {
    Predicate::parse(Column::Mark, raw)
}

#[test]
fn bare_value_is_and_eq() {
    for raw in ["Lada", "X123XX150", "", "gt", "or", "with space"] {
        assert_eq!(
            parse(raw).unwrap(),
            Predicate::new(Union::And, Column::Mark, Operator::Eq, raw),
            "raw={raw:?}"
        );
    }
}

#[test]
fn union_and_operator() {
    assert_eq!(
        parse("or:like:X123").unwrap(),
        Predicate::new(Union::Or, Column::Mark, Operator::Like, "X123")
    );
}

#[test]
fn operator_without_union_defaults_to_and() {
    assert_eq!(
        Predicate::parse(Column::Year, "gt:2001").unwrap(),
        Predicate::new(Union::And, Column::Year, Operator::Gt, "2001")
    );
}

#[test]
fn explicit_and_union() {
    assert_eq!(
        Predicate::parse(Column::Year, "and:gt:2001").unwrap(),
        Predicate::new(Union::And, Column::Year, Operator::Gt, "2001")
    );
}

#[test]
fn keywords_ignore_case() {
    assert_eq!(
        parse("OR:LiKe:Lada").unwrap(),
        Predicate::new(Union::Or, Column::Mark, Operator::Like, "Lada")
    );
}

#[test]
fn every_operator_keyword() {
    let cases = [
        ("eq", Operator::Eq),
        ("neq", Operator::Ne),
        ("gt", Operator::Gt),
        ("get", Operator::Ge),
        ("lt", Operator::Lt),
        ("let", Operator::Le),
        ("like", Operator::Like),
    ];

    for (keyword, op) in cases {
        let raw = format!("{keyword}:v");
        assert_eq!(parse(&raw).unwrap().op, op, "keyword={keyword}");
        assert_eq!(op.keyword(), keyword);
    }
}

#[test]
fn gte_and_lte_spellings_are_not_keywords() {
    assert!(parse("gte:1").unwrap_err().is_invalid_operator());
    assert!(parse("lte:1").unwrap_err().is_invalid_operator());
}

#[test]
fn dangling_colon_is_empty_value() {
    let err = parse("and:").unwrap_err();
    assert!(err.is_empty_value(), "err={err}");

    let err = parse("eq:").unwrap_err();
    assert!(err.is_empty_value(), "err={err}");
}

#[test]
fn unknown_operator() {
    let err = parse("and:bogus:v").unwrap_err();
    assert!(err.is_invalid_operator(), "err={err}");
    assert_eq!(err.to_string(), "invalid filter operator: `bogus`");
}

#[test]
fn value_keeps_inner_colons() {
    assert_eq!(
        parse("like:12:30:00").unwrap(),
        Predicate::new(Union::And, Column::Mark, Operator::Like, "12:30:00")
    );
    assert_eq!(
        parse("or:eq:a:b").unwrap(),
        Predicate::new(Union::Or, Column::Mark, Operator::Eq, "a:b")
    );
}

#[test]
fn value_may_be_empty_after_operator() {
    assert_eq!(
        parse("or:eq:").unwrap(),
        Predicate::new(Union::Or, Column::Mark, Operator::Eq, "")
    );
}

#[test]
fn union_alone_with_operator_segment() {
    // `or:x` has two segments; `x` is then the operator keyword.
    assert!(parse("or:x").unwrap_err().is_invalid_operator());
}

#[test]
fn column_from_name() {
    for column in Column::ALL {
        assert_eq!(Column::from_name(column.name()).unwrap(), column);
    }

    let err = Column::from_name("car_id").unwrap_err();
    assert!(err.is_unknown_column());
}

#[test]
fn storage_names_follow_query_names() {
    for column in Column::ALL {
        assert_eq!(column.storage_name(), column.name());
    }
    assert_eq!(Column::OwnerPatronymic.storage_name(), "owner_patronymic");
}
