use super::{parse_variables, validate_variable_name, VariablesError};

#[test]
fn parses_key_value_pairs() {
    let variables = parse_variables("VAR1=100, VAR2 = -45 ,_x9=0").expect("must parse");
    assert_eq!(variables.len(), 3);
    assert_eq!(variables.get("VAR1"), Some(&100));
    assert_eq!(variables.get("VAR2"), Some(&-45));
    assert_eq!(variables.get("_x9"), Some(&0));
}

#[test]
fn blank_input_and_trailing_commas_are_ignored() {
    assert!(parse_variables("   ").expect("must parse").is_empty());
    assert_eq!(parse_variables("A=1,").expect("must parse").len(), 1);
}

#[test]
fn last_duplicate_wins() {
    let variables = parse_variables("A=1,A=2").expect("must parse");
    assert_eq!(variables.get("A"), Some(&2));
}

#[test]
fn rejects_entry_without_separator() {
    assert_eq!(
        parse_variables("A=1,B"),
        Err(VariablesError::MissingSeparator("B".to_string()))
    );
}

#[test]
fn rejects_non_integer_value() {
    let err = parse_variables("A=ten").expect_err("must fail");
    assert_eq!(
        err,
        VariablesError::InvalidValue {
            name: "A".to_string(),
            value: "ten".to_string(),
        }
    );
    assert_eq!(err.to_string(), "invalid integer `ten` for variable `A`");
}

#[test]
fn rejects_names_that_cannot_be_referenced() {
    assert_eq!(
        validate_variable_name("9lives"),
        Err(VariablesError::InvalidName("9lives".to_string()))
    );
    assert_eq!(
        validate_variable_name("a-b"),
        Err(VariablesError::InvalidName("a-b".to_string()))
    );
    assert_eq!(
        parse_variables("=5"),
        Err(VariablesError::InvalidName(String::new()))
    );
    assert_eq!(
        validate_variable_name("NOT"),
        Err(VariablesError::ReservedName("NOT".to_string()))
    );
    assert_eq!(validate_variable_name("not"), Ok(()));
}

#[test]
fn accepts_unicode_names_the_scanner_reads_as_identifiers() {
    let variables = parse_variables("größe=5,_ζ2=1").expect("must parse");
    assert_eq!(variables.get("größe"), Some(&5));
    assert_eq!(variables.get("_ζ2"), Some(&1));
    assert!(bexpr_eval::evaluate("größe > 4", &variables).expect("eval"));
}

#[test]
fn name_rule_agrees_with_scanner() {
    use bexpr_eval::{tokenize, TokenKind};

    for name in ["größe", "x", "_", "a1", "٣x", "9lives", "a-b", "a b", "AND", "OR", "é9", ""] {
        let scans_as_identifier = matches!(
            tokenize(name).as_deref(),
            Ok([identifier, end])
                if identifier.kind == TokenKind::Identifier
                    && identifier.text == name
                    && end.kind == TokenKind::End
        );
        assert_eq!(
            validate_variable_name(name).is_ok(),
            scans_as_identifier,
            "{name:?}"
        );
    }
}
