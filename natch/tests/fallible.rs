//! Handlers that return `Result`.

use natch::{MatchBuilder, NatchError, match_on, match_plain};

#[derive(Debug, PartialEq)]
enum ParseFailure {
    Missing(String),
    Invalid(String),
}

impl From<natch::MissingHandlerError<char>> for ParseFailure {
    fn from(err: natch::MissingHandlerError<char>) -> Self {
        ParseFailure::Missing(err.label().to_string())
    }
}

type Parse = fn(String) -> Result<i64, ParseFailure>;

fn decimal(s: String) -> Result<i64, ParseFailure> {
    s[1..]
        .parse()
        .map_err(|_| ParseFailure::Invalid(s.clone()))
}

fn hex(s: String) -> Result<i64, ParseFailure> {
    i64::from_str_radix(&s[1..], 16).map_err(|_| ParseFailure::Invalid(s.clone()))
}

fn prefix(s: &String) -> char {
    s.chars().next().unwrap_or(' ')
}

#[test]
fn test_try_dispatch_flattens_errors() {
    let parser = match_plain(prefix, [('d', decimal as Parse), ('x', hex as Parse)]);

    assert_eq!(parser.try_dispatch("d42".to_string()), Ok(42));
    assert_eq!(parser.try_dispatch("xff".to_string()), Ok(255));
    assert_eq!(
        parser.try_dispatch("dzz".to_string()),
        Err(ParseFailure::Invalid("dzz".to_string()))
    );
    assert_eq!(
        parser.try_dispatch("b101".to_string()),
        Err(ParseFailure::Missing("b".to_string()))
    );
}

#[test]
fn test_dispatch_keeps_handler_result_intact() {
    let parser = match_on(prefix, [('d', decimal as Parse)]);

    assert_eq!(
        parser.dispatch("d1x".to_string()),
        Ok(Err(ParseFailure::Invalid("d1x".to_string())))
    );
    assert!(parser.dispatch("q".to_string()).is_err());
}

#[test]
fn test_natch_error_as_handler_error() {
    let checked = MatchBuilder::new(|n: &i32| *n >= 0)
        .plain()
        .case(true, |n: i32| -> Result<u32, NatchError> { Ok(n.unsigned_abs()) })
        .build()
        .unwrap();

    assert_eq!(checked.try_dispatch(12).unwrap(), 12);

    let err = checked.try_dispatch(-1).unwrap_err();
    assert!(matches!(err, NatchError::MissingHandler(ref label) if label == "false"));
    assert_eq!(err.to_string(), "handler for case false is missing");
}
