use crate::ast::Span;
use std::fmt;
use std::sync::Arc;

/// Detailed error information with source location
#[derive(Debug, Clone)]
pub struct ErrorDetails {
    pub message: String,
    pub span: Span,
    pub source_text: Arc<str>,
    pub suggestion: Option<String>,
}

/// Error types for the Mathema pipeline
#[derive(Debug, Clone)]
pub enum MathemaError {
    /// The (normalized) input could not be parsed as an expression or equation
    Parse(Box<ErrorDetails>),

    /// The input is well formed but outside the closed forms the solver knows
    Unsupported(String),

    /// A literal division by zero was requested (e.g. `cot(u) = 0`)
    DivisionByZero(String),

    /// The chapter taxonomy could not be read or decoded
    Taxonomy(String),

    /// Internal engine error without a specific source location
    Engine(String),

    /// A configured resource limit was exceeded
    ResourceLimitExceeded {
        limit_name: String,
        limit_value: String,
        actual_value: String,
        suggestion: String,
    },
}

impl MathemaError {
    /// Create a parse error with source information
    pub fn parse(message: impl Into<String>, span: Span, source_text: Arc<str>) -> Self {
        Self::Parse(Box::new(ErrorDetails {
            message: message.into(),
            span,
            source_text,
            suggestion: None,
        }))
    }

    /// Create a parse error with suggestion
    pub fn parse_with_suggestion(
        message: impl Into<String>,
        span: Span,
        source_text: Arc<str>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::Parse(Box::new(ErrorDetails {
            message: message.into(),
            span,
            source_text,
            suggestion: Some(suggestion.into()),
        }))
    }

    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported(message.into())
    }

    pub fn limit_exceeded(
        limit_name: &str,
        limit_value: impl fmt::Display,
        actual_value: impl fmt::Display,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::ResourceLimitExceeded {
            limit_name: limit_name.to_string(),
            limit_value: limit_value.to_string(),
            actual_value: actual_value.to_string(),
            suggestion: suggestion.into(),
        }
    }
}

impl fmt::Display for MathemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathemaError::Parse(details) => {
                write!(f, "Parse error: {}", details.message)?;
                if let Some(suggestion) = &details.suggestion {
                    write!(f, " (suggestion: {})", suggestion)?;
                }
                write!(f, " at {}:{}", details.span.line, details.span.col)
            }
            MathemaError::Unsupported(msg) => write!(f, "Unsupported: {}", msg),
            MathemaError::DivisionByZero(msg) => write!(f, "Division by zero: {}", msg),
            MathemaError::Taxonomy(msg) => write!(f, "Taxonomy error: {}", msg),
            MathemaError::Engine(msg) => write!(f, "Engine error: {}", msg),
            MathemaError::ResourceLimitExceeded {
                limit_name,
                limit_value,
                actual_value,
                suggestion,
            } => write!(
                f,
                "Resource limit exceeded: {} (limit {}, actual {}). {}",
                limit_name, limit_value, actual_value, suggestion
            ),
        }
    }
}

impl std::error::Error for MathemaError {}

impl From<std::fmt::Error> for MathemaError {
    fn from(err: std::fmt::Error) -> Self {
        MathemaError::Engine(format!("Format error: {}", err))
    }
}
