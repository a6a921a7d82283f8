use crate::keypad::Keypad;
use crate::parser::{KeyScriptParser, KeySequenceParser};
use approx::assert_relative_eq;

/*
    End to end runs of recorded key scripts through the keypad, checking what the display
    shows once every key has been pressed.
 */

fn run_script(parser: KeyScriptParser, script: &str) -> Keypad {
    let keys = parser.parse_str(script).unwrap();
    let mut keypad = Keypad::new();
    for key in &keys {
        keypad.press(key);
    }
    keypad
}

#[test]
fn script_multiply() {
    let keypad = run_script(KeyScriptParser::new(), "6\n×\n7\n=\n");

    assert_eq!(keypad.display(), "42");
    assert_eq!(keypad.brain().result(), Some(42.0));
}

#[test]
fn script_chained_addition() {
    let keypad = run_script(KeyScriptParser::new().using_whitespace(), "10 + 5 + 2 =");

    assert_eq!(keypad.display(), "17");
}

#[test]
fn script_chained_operator_keeps_typed_display() {
    let keypad = run_script(KeyScriptParser::new().using_whitespace(), "10 + 5 +");

    // Second + resolves 10 + 5 and waits for the next operand
    assert_eq!(keypad.display(), "5");
    assert_eq!(keypad.brain().result(), None);
    assert_eq!(*keypad.brain().pending_binary_operation().unwrap().first_operand(), 15.0);
}

#[test]
fn script_circle_area() {
    let keypad = run_script(KeyScriptParser::new().using_whitespace(), "pi * 3 * 3 =");

    assert_relative_eq!(keypad.brain().result().unwrap(), std::f64::consts::PI * 9.0, max_relative = 1e-12);
}

#[test]
fn script_clear_resumes_pending_operation() {
    let keypad = run_script(KeyScriptParser::new().using_whitespace(), "8 - C 3 =");

    assert_eq!(keypad.display(), "5");
}

#[test]
fn script_negate_and_root() {
    let keypad = run_script(KeyScriptParser::new().using_whitespace(), "-16 neg sqrt");

    assert_eq!(keypad.display(), "4");
}

#[test]
fn script_operator_without_operand() {
    let keypad = run_script(KeyScriptParser::new().using_whitespace(), "+ =");

    assert_eq!(keypad.display(), "0");
    assert_eq!(keypad.brain().result(), None);
    assert!(keypad.brain().pending_binary_operation().is_none());
}

#[test]
fn script_root_of_negative() {
    let keypad = run_script(KeyScriptParser::new().using_whitespace(), "-1 sqrt");

    assert_eq!(keypad.display(), "NaN");
}
