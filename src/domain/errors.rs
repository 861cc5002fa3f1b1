/// Placeholder text written into both display buffers when an error occurs.
pub const ERROR_PLACEHOLDER: &str = "Error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    InvalidNumberFormat,
    DivisionByZero,
    NegativeSquareRoot,
    Unknown,
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalcError::InvalidNumberFormat => {
                write!(f, "Error: invalid number format")
            }
            CalcError::DivisionByZero => {
                write!(f, "Error: division by zero")
            }
            CalcError::NegativeSquareRoot => {
                write!(f, "Error: negative number")
            }
            CalcError::Unknown => {
                write!(f, "Error: unknown error")
            }
        }
    }
}

impl std::error::Error for CalcError {}

pub type DomainResult<T> = Result<T, CalcError>;
