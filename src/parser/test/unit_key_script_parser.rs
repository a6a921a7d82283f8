use crate::parser::{KeyScriptParser, KeySequenceParser};
use crate::keypad::KeyPress::{self, *};

fn op(label: &str) -> KeyPress {
    Operation(String::from(label))
}

#[test]
fn test_key_script_parser_basic() {
    let expected_keys = vec![Value(6.0), op("×"), Value(7.0), op("=")];

    let text = "6\n×\n7\n=\n";
    let keys = KeyScriptParser::new().parse_str(text).unwrap();
    assert_eq!(expected_keys, keys)
}

#[test]
fn test_key_script_parser_aliases() {
    let expected_keys = vec![Value(2.0), op("×"), op("π"), op("√"), op("±"), op("C"), op("÷")];

    let text = "2\n*\npi\nsqrt\nneg\nclear\n/";
    let keys = KeyScriptParser::new().parse_str(text).unwrap();
    assert_eq!(expected_keys, keys)
}

#[test]
fn test_key_script_parser_invalid_token() {
    let text = "4.5\n8\n+\nPOW\n0\n=\n";
    let error = KeyScriptParser::new().parse_str(text).expect_err("Testing Parser Error");
    assert_eq!(error.kind(), std::io::ErrorKind::InvalidInput);
    assert!(error.to_string().contains("POW"));
}

#[test]
fn test_key_script_parser_comma_delimited() {
    let expected_keys = vec![Value(10.0), op("+"), Value(5.0), op("=")];

    let text = "10,+,5,=";
    let keys = KeyScriptParser::new().using_delimiter(String::from(",")).parse_str(text).unwrap();
    assert_eq!(expected_keys, keys)
}

#[test]
fn test_key_script_parser_whitespace() {
    let expected_keys = vec![Value(10.0), op("+"), Value(5.0), op("+"), Value(2.0), op("=")];

    let text = "  10 +   5\t+ 2\n=  ";
    let keys = KeyScriptParser::new().using_whitespace().parse_str(text).unwrap();
    assert_eq!(expected_keys, keys)
}

#[test]
fn test_key_script_parser_with_comments() {
    let expected_keys = vec![Value(4.5), op("-"), Value(8.0), op("=")];

    let text = "# subtract\n    4.5   \n  -  \n\n\n\n     8   \n  =   \n";
    let keys = KeyScriptParser::new().parse_str(text).unwrap();
    assert_eq!(expected_keys, keys)
}

#[test]
fn test_key_script_parser_negative_value() {
    let keys = KeyScriptParser::new().parse_str("-3\n-\n-2").unwrap();
    assert_eq!(vec![Value(-3.0), op("-"), Value(-2.0)], keys)
}

#[test]
fn test_key_script_parser_empty_delimiter() {
    let error = KeyScriptParser::new().using_delimiter(String::new()).parse_str("12 + 3 =")
        .expect_err("Testing Parser Error");
    assert_eq!(error.kind(), std::io::ErrorKind::InvalidInput);
    assert!(error.to_string().contains("delimiter"));
}
