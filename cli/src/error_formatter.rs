use ariadne::{Color, Label, Report, ReportKind, Source};
use mathema::MathemaError;

const SOURCE_ID: &str = "input";

/// Format a MathemaError with fancy terminal output using Ariadne
pub fn format_error(error: &MathemaError) -> String {
    match error {
        MathemaError::Parse(details) => {
            let mut output = Vec::new();

            let enhanced_message = format!(
                "Parse error: {} (at column {})",
                details.message, details.span.col
            );

            let mut report = Report::build(ReportKind::Error, SOURCE_ID, details.span.start)
                .with_message(enhanced_message)
                .with_label(
                    Label::new((SOURCE_ID, details.span.start..details.span.end))
                        .with_message("")
                        .with_color(Color::Red),
                );

            if let Some(suggestion) = &details.suggestion {
                report = report.with_help(suggestion);
            }

            match report.finish().write(
                (SOURCE_ID, Source::from(details.source_text.as_ref())),
                &mut output,
            ) {
                Ok(_) => String::from_utf8_lossy(&output).to_string(),
                Err(_) => format!("{}", error),
            }
        }
        MathemaError::Unsupported(msg) => format!("Unsupported equation: {}", msg),
        MathemaError::DivisionByZero(msg) => format!("Division by zero: {}", msg),
        MathemaError::Taxonomy(msg) => format!("Taxonomy error: {}", msg),
        MathemaError::Engine(msg) => format!("Engine error: {}", msg),
        MathemaError::ResourceLimitExceeded {
            limit_name,
            limit_value,
            actual_value,
            suggestion,
        } => {
            format!(
                "Resource limit exceeded: {}\n  Limit: {}\n  Actual: {}\n  {}",
                limit_name, limit_value, actual_value, suggestion
            )
        }
    }
}
