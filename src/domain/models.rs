use super::errors::{CalcError, DomainResult, ERROR_PLACEHOLDER};

/// An arithmetic operator recognized by the calculator.
///
/// The first five are binary operators over the accumulator and the
/// current operand. The last three are unary: they read only the
/// current operand and ignore the accumulator, acting as an immediate
/// transform of whatever is on the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
    Reciprocal,
    Square,
    SquareRoot,
}

impl Operator {
    /// Parses an operator button token, returning `None` for anything
    /// outside the closed set of eight symbols.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            "*" => Some(Operator::Multiply),
            "/" => Some(Operator::Divide),
            "%" => Some(Operator::Remainder),
            "1/x" => Some(Operator::Reciprocal),
            "x^2" => Some(Operator::Square),
            "√x" => Some(Operator::SquareRoot),
            _ => None,
        }
    }

    /// The symbol used for this operator in the expression display.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Remainder => "%",
            Operator::Reciprocal => "1/x",
            Operator::Square => "x^2",
            Operator::SquareRoot => "√x",
        }
    }

    /// Applies the operator to the accumulator and the current operand.
    ///
    /// Unary operators (`1/x`, `x^2`, `√x`) ignore `left` and transform
    /// `right` only.
    pub fn apply(self, left: f64, right: f64) -> DomainResult<f64> {
        match self {
            Operator::Add => Ok(left + right),
            Operator::Subtract => Ok(left - right),
            Operator::Multiply => Ok(left * right),
            Operator::Divide => {
                if right == 0.0 {
                    Err(CalcError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
            Operator::Remainder => Ok(left % right),
            Operator::Reciprocal => {
                if right == 0.0 {
                    Err(CalcError::DivisionByZero)
                } else {
                    Ok(1.0 / right)
                }
            }
            Operator::Square => Ok(right * right),
            Operator::SquareRoot => {
                if right < 0.0 {
                    Err(CalcError::NegativeSquareRoot)
                } else {
                    Ok(right.sqrt())
                }
            }
        }
    }
}

/// The calculator state machine.
///
/// Tracks the number being typed, the human-readable expression built so
/// far, a pending operator, and the accumulator carried between chained
/// operations. There are no named states beyond the flags: this is a flat
/// record mutated by the operations below.
///
/// The two text buffers are edited independently and can desynchronize
/// (backspace removes one character from each without checking they
/// describe the same logical position). That matches the behavior of the
/// button calculators this mimics.
///
/// # Examples
///
/// ```
/// use tcalc::domain::{Calculator, Operator};
///
/// let mut calc = Calculator::new();
/// calc.append_number("1");
/// calc.append_number("2");
/// calc.set_operator(Operator::Add).unwrap();
/// calc.append_number("7");
/// calc.calculate().unwrap();
/// assert_eq!(calc.get_current_value(), "19");
/// assert_eq!(calc.get_current_expression(), "12 + 7 = 19");
/// ```
#[derive(Debug, Clone)]
pub struct Calculator {
    /// Number currently being typed; never empty, defaults to "0"
    current_number: String,
    /// Full expression built so far, e.g. "12 + 7 = 19"
    current_expression: String,
    /// Operator awaiting its right-hand operand
    operator: Option<Operator>,
    /// Left-hand operand carried between chained operations
    previous_value: f64,
    /// When set, the next digit entry replaces the current number
    pending_clear: bool,
    /// Active error, if any; cleared only by `clear`
    error: Option<CalcError>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self {
            current_number: "0".to_string(),
            current_expression: String::new(),
            operator: None,
            previous_value: 0.0,
            pending_clear: false,
            error: None,
        }
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a digit or decimal point to the current number.
    ///
    /// Suppressed while an error is active; only `clear` recovers from an
    /// error state. A second decimal point is rejected, and a lone leading
    /// zero is replaced rather than extended. The token is appended to
    /// both the number buffer and the expression buffer.
    pub fn append_number(&mut self, token: &str) {
        if self.error.is_some() {
            return;
        }
        if self.pending_clear {
            self.current_number.clear();
            self.pending_clear = false;
        }
        if token == "." && self.current_number.contains('.') {
            return;
        }
        if self.current_number == "0" && token != "." {
            self.current_number.clear();
        }
        self.current_number.push_str(token);
        self.current_expression.push_str(token);
    }

    /// Sets the operator for the next calculation.
    ///
    /// If an operator is already pending, the pending operation is applied
    /// first, so chains evaluate left-to-right with no precedence. A
    /// failure in that chained calculation is recorded as an error state
    /// and the new operator is still installed afterwards.
    pub fn set_operator(&mut self, operator: Operator) -> DomainResult<()> {
        if self.operator.is_some() {
            if let Err(error) = self.calculate() {
                self.set_error(error);
            }
        } else if !self.current_number.is_empty() {
            self.previous_value = self
                .current_number
                .parse()
                .map_err(|_| CalcError::InvalidNumberFormat)?;
        }
        self.operator = Some(operator);
        self.current_expression.push(' ');
        self.current_expression.push_str(operator.symbol());
        self.current_expression.push(' ');
        self.pending_clear = true;
        Ok(())
    }

    /// Applies the pending operator to the accumulator and the current
    /// operand.
    ///
    /// No-op when no operator is pending. On success the result becomes
    /// both the new accumulator and the displayed number, and
    /// `" = <result>"` is appended to the expression.
    pub fn calculate(&mut self) -> DomainResult<()> {
        let Some(operator) = self.operator else {
            return Ok(());
        };

        let current_value: f64 = self
            .current_number
            .parse()
            .map_err(|_| CalcError::InvalidNumberFormat)?;
        let result = operator.apply(self.previous_value, current_value)?;

        self.previous_value = result;
        self.current_number = format_number(result);
        self.current_expression.push_str(" = ");
        self.current_expression.push_str(&format_number(result));
        self.operator = None;
        self.pending_clear = true;
        Ok(())
    }

    /// Resets the calculator to its initial state, clearing any error.
    pub fn clear(&mut self) {
        self.current_number.clear();
        self.current_number.push('0');
        self.current_expression.clear();
        self.operator = None;
        self.previous_value = 0.0;
        self.pending_clear = false;
        self.error = None;
    }

    /// Clears the in-progress operand.
    ///
    /// The expression is truncated back to just after its last space, so
    /// an operator prefix like `"12 + "` survives. An expression with no
    /// space is cleared entirely.
    pub fn clear_entry(&mut self) {
        self.current_number.clear();
        self.current_number.push('0');
        if !self.current_expression.is_empty() {
            match self.current_expression.rfind(' ') {
                Some(last_space) => self.current_expression.truncate(last_space + 1),
                None => self.current_expression.clear(),
            }
        }
    }

    /// Removes the last character typed.
    ///
    /// The number buffer re-defaults to "0" when emptied. The expression
    /// buffer loses its last character independently; the two buffers may
    /// desynchronize.
    pub fn backspace(&mut self) {
        self.current_number.pop();
        if self.current_number.is_empty() {
            self.current_number.push('0');
        }
        self.current_expression.pop();
    }

    /// Toggles the sign of the current number.
    ///
    /// A leading '-' is flipped on the number buffer (unless the number is
    /// "0"), and a trailing '-' is independently flipped on the expression
    /// buffer.
    pub fn toggle_sign(&mut self) {
        if !self.current_number.is_empty() && self.current_number != "0" {
            if self.current_number.starts_with('-') {
                self.current_number.remove(0);
            } else {
                self.current_number.insert(0, '-');
            }
        }
        if !self.current_expression.is_empty() {
            if self.current_expression.ends_with('-') {
                self.current_expression.pop();
            } else {
                self.current_expression.push('-');
            }
        }
    }

    /// Returns the string shown on the main display.
    ///
    /// The error message when an error is active; otherwise the current
    /// number, parsed and re-formatted so "1." renders as "1". A buffer
    /// that no longer parses is returned verbatim.
    pub fn get_current_value(&self) -> String {
        if let Some(error) = self.error {
            return error.to_string();
        }
        match self.current_number.parse::<f64>() {
            Ok(value) => format_number(value),
            Err(_) => self.current_number.clone(),
        }
    }

    /// Returns the expression line shown above the main display.
    pub fn get_current_expression(&self) -> String {
        self.current_expression.clone()
    }

    /// Raw number buffer, before any display formatting.
    pub fn get_current_number(&self) -> &str {
        &self.current_number
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Records an error and overwrites both buffers with the placeholder.
    pub fn set_error(&mut self, error: CalcError) {
        self.error = Some(error);
        self.current_number.clear();
        self.current_number.push_str(ERROR_PLACEHOLDER);
        self.current_expression.clear();
        self.current_expression.push_str(ERROR_PLACEHOLDER);
    }
}

/// Formats a result for display.
///
/// A value equal to its own truncation to a 64-bit integer renders without
/// a decimal point ("19", not "19.0"); everything else uses the default
/// float formatting.
pub fn format_number(value: f64) -> String {
    if value.is_finite()
        && value == value.trunc()
        && value >= i64::MIN as f64
        && value <= i64::MAX as f64
    {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
