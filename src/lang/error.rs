use super::Column;

/// An interpreter error: one of the five fixed user-facing messages,
/// plus the column span where it was detected (never surfaced, kept
/// for debugging and tests).
#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    column: Column,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error { code, column: 0..0 }
    }

    pub fn in_column(&self, column: &Column) -> Error {
        debug_assert_eq!(self.column, 0..0);
        Error {
            code: self.code,
            column: column.clone(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorCode {
    SyntaxError,
    DivideByZero,
    InvalidNumber,
    LineNumberError,
    VariableNotDefined,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.column == (0..0) {
            write!(f, "Error {{ {} }}", self)
        } else {
            write!(
                f,
                "Error {{ {} ({}..{}) }}",
                self, self.column.start, self.column.end
            )
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let s = match self.code {
            SyntaxError => "SYNTAX ERROR",
            DivideByZero => "DIVIDE BY ZERO",
            InvalidNumber => "INVALID NUMBER",
            LineNumberError => "LINE NUMBER ERROR",
            VariableNotDefined => "VARIABLE NOT DEFINED",
        };
        write!(f, "{}", s)
    }
}
