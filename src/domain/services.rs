//! Input dispatch for the terminal calculator.
//!
//! This module routes discrete input tokens (button labels) to the
//! calculator state machine. Classification is an exhaustive match over a
//! closed enumeration of input kinds, with digits and the decimal point
//! falling through to number entry.

use super::errors::CalcError;
use super::models::{Calculator, Operator};

/// A classified input token.
///
/// Every button on the calculator maps to exactly one of these kinds.
/// Tokens outside the recognized set classify as `Entry` and are appended
/// to the current number verbatim, so callers should only send tokens
/// from the fixed set.
#[derive(Debug, Clone, PartialEq)]
pub enum InputToken {
    /// One of the eight arithmetic operators
    Operator(Operator),
    /// "=" - apply the pending operation
    Equals,
    /// "C" - reset everything
    Clear,
    /// "CE" - clear the in-progress operand
    ClearEntry,
    /// "⌫" - delete the last character
    Backspace,
    /// "+/-" - toggle the sign of the current number
    ToggleSign,
    /// Digit or decimal point entry
    Entry(String),
}

impl InputToken {
    /// Classifies a raw token string into its input kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use tcalc::domain::{InputToken, Operator};
    ///
    /// assert_eq!(InputToken::classify("+"), InputToken::Operator(Operator::Add));
    /// assert_eq!(InputToken::classify("="), InputToken::Equals);
    /// assert_eq!(InputToken::classify("7"), InputToken::Entry("7".to_string()));
    /// ```
    pub fn classify(token: &str) -> InputToken {
        if let Some(operator) = Operator::from_token(token) {
            return InputToken::Operator(operator);
        }
        match token {
            "=" => InputToken::Equals,
            "C" => InputToken::Clear,
            "CE" => InputToken::ClearEntry,
            "⌫" => InputToken::Backspace,
            "+/-" => InputToken::ToggleSign,
            other => InputToken::Entry(other.to_string()),
        }
    }
}

/// Routes input tokens to calculator operations.
///
/// The dispatcher owns no state; it guarantees that no failure escapes to
/// the caller. Fallible operations report through `Result` and an `Err` is
/// recorded on the calculator as an error state, so the UI only ever
/// observes an error string.
pub struct InputDispatcher;

impl InputDispatcher {
    /// Dispatches one discrete input token against the calculator.
    ///
    /// After dispatch the caller should re-read `get_current_value` and
    /// `get_current_expression` and propagate both to the display.
    ///
    /// # Examples
    ///
    /// ```
    /// use tcalc::domain::{Calculator, InputDispatcher};
    ///
    /// let mut calc = Calculator::new();
    /// for token in ["1", "2", "+", "7", "="] {
    ///     InputDispatcher::process_input(&mut calc, token);
    /// }
    /// assert_eq!(calc.get_current_value(), "19");
    /// assert_eq!(calc.get_current_expression(), "12 + 7 = 19");
    /// ```
    pub fn process_input(calculator: &mut Calculator, token: &str) {
        let outcome = match InputToken::classify(token) {
            InputToken::Operator(operator) => calculator.set_operator(operator),
            InputToken::Equals => calculator.calculate(),
            InputToken::Clear => {
                calculator.clear();
                Ok(())
            }
            InputToken::ClearEntry => {
                calculator.clear_entry();
                Ok(())
            }
            InputToken::Backspace => {
                calculator.backspace();
                Ok(())
            }
            InputToken::ToggleSign => {
                calculator.toggle_sign();
                Ok(())
            }
            InputToken::Entry(text) => {
                calculator.append_number(&text);
                Ok(())
            }
        };

        if let Err(error) = outcome {
            calculator.set_error(error);
        } else if !calculator.has_error()
            && calculator.get_current_number().parse::<f64>().is_err()
        {
            // Editing can leave the buffer unrenderable (e.g. a bare "-"
            // after backspace). The display must never see that raw state.
            calculator.set_error(CalcError::Unknown);
        }
    }
}
