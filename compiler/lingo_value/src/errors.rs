//! Error types for evaluation.
//!
//! Every failure a function or the evaluator can raise is an [`EvalError`].
//! Factory functions (e.g. `wrong_arg_count()`) are the public API; they
//! fill in a structured [`EvalErrorKind`] whose `Display` is the message
//! users see.
//!
//! # Categories
//!
//! Kinds fall into the categories of [`ErrorCategory`], so callers can tell
//! an arity problem from an unbound variable without parsing messages.

use std::fmt;

use crate::value::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Coarse classification of an [`EvalErrorKind`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    Arity,
    Type,
    Name,
    Lookup,
    Literal,
    Arithmetic,
    Other,
}

/// Typed error kind.
///
/// `function` fields hold the label of the function that raised the error;
/// positions are 1-based.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Arity
    ArityMismatch {
        function: String,
        expected: usize,
        got: usize,
    },
    TooFewArguments {
        function: String,
        minimum: usize,
        got: usize,
    },
    TooManyArguments {
        function: String,
        maximum: usize,
        got: usize,
    },

    // Type
    ArgumentType {
        function: String,
        position: usize,
        found: String,
    },

    // Name
    InvalidVariableName {
        function: String,
        position: usize,
        name: String,
    },

    // Lookup
    UndefinedVariable {
        function: String,
        name: String,
    },
    UndefinedFunction {
        name: String,
    },
    UnknownFunction {
        function: String,
        name: String,
    },
    MissingColumn {
        key: String,
    },

    // Literal
    InvalidLiteral {
        function: String,
        literal: String,
    },

    // Arithmetic
    IntegerOverflow {
        function: String,
    },

    /// Errors raised by host functions without a structured kind.
    Custom {
        message: String,
    },
}

impl EvalErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ArityMismatch { .. }
            | Self::TooFewArguments { .. }
            | Self::TooManyArguments { .. } => ErrorCategory::Arity,
            Self::ArgumentType { .. } => ErrorCategory::Type,
            Self::InvalidVariableName { .. } => ErrorCategory::Name,
            Self::UndefinedVariable { .. }
            | Self::UndefinedFunction { .. }
            | Self::UnknownFunction { .. }
            | Self::MissingColumn { .. } => ErrorCategory::Lookup,
            Self::InvalidLiteral { .. } => ErrorCategory::Literal,
            Self::IntegerOverflow { .. } => ErrorCategory::Arithmetic,
            Self::Custom { .. } => ErrorCategory::Other,
        }
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Arity
            Self::ArityMismatch {
                function,
                expected,
                got,
            } => write!(
                f,
                "({function}) Wrong number of arguments ({got} instead of {expected})"
            ),
            Self::TooFewArguments {
                function,
                minimum,
                got,
            } => write!(
                f,
                "({function}) Wrong number of arguments ({got} while at least {minimum} arguments are expected)"
            ),
            Self::TooManyArguments {
                function,
                maximum,
                got,
            } => write!(
                f,
                "({function}) Wrong number of arguments ({got} while at most {maximum} arguments are expected)"
            ),

            // Type
            Self::ArgumentType {
                function,
                position,
                found,
            } => write!(
                f,
                "({function}) unsupported type '{found}' for param {position}"
            ),

            // Name
            Self::InvalidVariableName {
                function,
                position,
                name,
            } => write!(
                f,
                "({function}) invalid variable name '{name}' for param {position}"
            ),

            // Lookup
            Self::UndefinedVariable { function, name } => {
                write!(f, "({function}) variable '{name}' not defined")
            }
            Self::UndefinedFunction { name } => write!(f, "Function '{name}' not available"),
            Self::UnknownFunction { function, name } => {
                write!(f, "({function}) could not find function '{name}'")
            }
            Self::MissingColumn { key } => write!(f, "key '{key}' not present"),

            // Literal
            Self::InvalidLiteral { function, literal } => {
                write!(f, "({function}) invalid literal '{literal}'")
            }

            // Arithmetic
            Self::IntegerOverflow { function } => write!(f, "({function}) integer overflow"),

            Self::Custom { message } => write!(f, "{message}"),
        }
    }
}

/// Additional context attached to an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalNote {
    pub message: String,
}

impl EvalNote {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Secondary context, innermost first.
    pub notes: Vec<EvalNote>,
}

impl EvalError {
    /// Create an error with just a message.
    ///
    /// Uses the `Custom` kind; prefer a factory function when one fits.
    pub fn new(message: impl Into<String>) -> Self {
        Self::from_kind(EvalErrorKind::Custom {
            message: message.into(),
        })
    }

    fn from_kind(kind: EvalErrorKind) -> Self {
        Self {
            kind,
            notes: Vec::new(),
        }
    }

    /// Add a context note to this error.
    #[must_use]
    pub fn with_note(mut self, note: EvalNote) -> Self {
        self.notes.push(note);
        self
    }

    #[inline]
    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for EvalError {}

// Arity Errors

/// Exact argument count violated.
#[cold]
pub fn wrong_arg_count(function: &str, got: usize, expected: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        function: function.to_string(),
        expected,
        got,
    })
}

/// Fewer arguments than the function's minimum.
#[cold]
pub fn too_few_args(function: &str, got: usize, minimum: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TooFewArguments {
        function: function.to_string(),
        minimum,
        got,
    })
}

/// More arguments than the function's maximum.
#[cold]
pub fn too_many_args(function: &str, got: usize, maximum: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TooManyArguments {
        function: function.to_string(),
        maximum,
        got,
    })
}

// Type Errors

/// Argument at `position` has an unsupported type.
#[cold]
pub fn wrong_arg_type(function: &str, position: usize, found: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArgumentType {
        function: function.to_string(),
        position,
        found: found.type_name().to_string(),
    })
}

// Name Errors

/// Variable name reserved for hidden bindings.
#[cold]
pub fn invalid_variable_name(function: &str, position: usize, name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidVariableName {
        function: function.to_string(),
        position,
        name: name.to_string(),
    })
}

// Lookup Errors

/// Variable not bound in the environment.
#[cold]
pub fn undefined_variable(function: &str, name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        function: function.to_string(),
        name: name.to_string(),
    })
}

/// No function registered under a node kind.
#[cold]
pub fn undefined_function(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedFunction {
        name: name.to_string(),
    })
}

/// A function asked about another function that does not exist.
#[cold]
pub fn unknown_function(function: &str, name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownFunction {
        function: function.to_string(),
        name: name.to_string(),
    })
}

/// Dictionary column not declared.
#[cold]
pub fn missing_column(key: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MissingColumn {
        key: key.to_string(),
    })
}

// Literal Errors

/// Literal text that does not parse for the furnishing function.
#[cold]
pub fn invalid_literal(function: &str, literal: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidLiteral {
        function: function.to_string(),
        literal: literal.to_string(),
    })
}

// Arithmetic Errors

/// Integer overflow.
#[cold]
pub fn integer_overflow(function: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow {
        function: function.to_string(),
    })
}
