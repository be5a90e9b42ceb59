//! Whole key sequences, typed the way a user would press them.

use calccore::{CalcError, Evaluator, Input};

/// `~` is the sign key, `<` backspace, everything else as on the keypad.
fn press(ev: &mut Evaluator, keys: &str) -> Option<Result<String, CalcError>> {
    let mut last = None;
    for c in keys.chars().filter(|c| !c.is_whitespace()) {
        let input = match c {
            '~' => Input::ToggleSign,
            '<' => Input::Backspace,
            _ => Input::from_char(c).unwrap_or_else(|| panic!("no key for {:?}", c)),
        };
        match ev.handle(input) {
            Ok(Some(text)) => last = Some(Ok(text)),
            Ok(None) => {}
            Err(err) => last = Some(Err(err)),
        }
    }
    last
}

fn run(keys: &str) -> Evaluator {
    let mut ev = Evaluator::new();
    press(&mut ev, keys);
    ev
}

#[test]
fn test_addition() {
    let mut ev = Evaluator::new();
    assert_eq!(press(&mut ev, "5 + 3 ="), Some(Ok("8".to_string())));
    assert_eq!(ev.current_expression_text(), "5 + 3 =");
}

#[test]
fn test_division_errors() {
    let mut ev = Evaluator::new();
    assert_eq!(press(&mut ev, "8 / 0 ="), Some(Err(CalcError::DivisionByZero)));
    let mut ev = Evaluator::new();
    assert_eq!(press(&mut ev, "0 / 0 ="), Some(Err(CalcError::UndefinedResult)));
}

#[test]
fn test_chaining() {
    let mut ev = Evaluator::new();
    press(&mut ev, "5 + 3 +");
    assert_eq!(ev.current_expression_text(), "8 + ");
    assert_eq!(press(&mut ev, "2 ="), Some(Ok("10".to_string())));
}

#[test]
fn test_long_chain() {
    let ev = run("2 * 3 * 4 * 5 =");
    assert_eq!(ev.current_entry_text(), "120");
}

#[test]
fn test_substitution() {
    let mut ev = Evaluator::new();
    assert_eq!(press(&mut ev, "5 + - 3 ="), Some(Ok("2".to_string())));
}

#[test]
fn test_result_feeds_next_operation() {
    let ev = run("9 - 4 = * 3 =");
    assert_eq!(ev.current_entry_text(), "15");
    assert_eq!(ev.current_expression_text(), "5 * 3 =");
}

#[test]
fn test_decimals() {
    assert_eq!(run("0.1 + 0.2 =").current_entry_text(), "0.30000000000000004");
    assert_eq!(run("2.5 * 4 =").current_entry_text(), "10");
    assert_eq!(run("1 / 4 =").current_entry_text(), "0.25");
}

#[test]
fn test_negative_operands() {
    assert_eq!(run("6 ~ * 7 =").current_entry_text(), "-42");
    assert_eq!(run("3 - 10 =").current_entry_text(), "-7");
    assert_eq!(run("5 ~ ~ + 1 =").current_entry_text(), "6");
}

#[test]
fn test_backspace_while_typing() {
    let ev = run("123 < < 9 + 1 =");
    assert_eq!(ev.current_entry_text(), "20");
}

#[test]
fn test_error_locks_until_cleared() {
    let mut ev = Evaluator::new();
    press(&mut ev, "7 / 0 =");
    assert!(ev.is_error_state());
    assert_eq!(press(&mut ev, "+ . ~ ="), None);
    assert!(ev.is_error_state());
    assert_eq!(ev.current_entry_text(), "Division by zero");

    press(&mut ev, "C");
    assert!(!ev.is_error_state());
    assert_eq!(ev.current_entry_text(), "0");
    assert_eq!(ev.pending(), None);
    assert_eq!(ev.current_expression_text(), "");
}

#[test]
fn test_overflow() {
    // (10^20)^16 is past f64::MAX; (10^20)^15 is not.
    let huge = "9".repeat(20);
    let keys = format!("{}{} =", huge, format!(" * {}", huge).repeat(15));
    let mut ev = Evaluator::new();
    assert_eq!(press(&mut ev, &keys), Some(Err(CalcError::Overflow)));
    assert_eq!(ev.current_entry_text(), "Overflow");
}

#[test]
fn test_digit_concatenation_within_cap() {
    let ev = run("9876543210");
    assert_eq!(ev.current_entry_text(), "9876543210");
    let ev = run(&"1".repeat(30));
    assert_eq!(ev.current_entry_text(), "1".repeat(20));
}

#[test]
fn test_nineteen_digit_integers_are_exact() {
    let ev = run("9999999999999999999 - 1 =");
    assert_eq!(ev.current_entry_text(), "9999999999999999998");
    assert_eq!(ev.current_expression_text(), "9999999999999999999 - 1 =");
}

#[test]
fn test_twenty_digit_operand_echoed_unchanged() {
    let mut ev = Evaluator::new();
    press(&mut ev, "12345678901234567891 +");
    assert_eq!(ev.current_expression_text(), "12345678901234567891 + ");
    assert_eq!(press(&mut ev, "0 ="), Some(Ok("12345678901234567891".to_string())));
    assert_eq!(ev.current_expression_text(), "12345678901234567891 + 0 =");
}
