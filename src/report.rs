use crate::{error::Error, interpreter::value::Value};

/// Formats a successful result, e.g. `Result: 14` or `Result: 1.5`.
///
/// ## Example
/// ```
/// use linecalc::{interpreter::value::Value, report::format_result};
///
/// assert_eq!(format_result(&Value::Integer(14)), "Result: 14");
/// assert_eq!(format_result(&Value::Floating(2.0)), "Result: 2.0");
/// ```
#[must_use]
pub fn format_result(value: &Value) -> String {
    format!("Result: {value}")
}

/// Formats an error as a single line, e.g. `Error! division by zero at ...`.
#[must_use]
pub fn format_error(error: &Error) -> String {
    format!("Error! {error}")
}

/// Formats an error followed by the source line it points at and a caret
/// under the reported column.
///
/// Errors without a position, or whose position lies outside the source,
/// render as [`format_error`] alone.
///
/// ## Example
/// ```
/// use linecalc::{report::render_error_with_source, run};
///
/// let err = run("2 $ 3", "stdin").unwrap_err();
/// assert_eq!(render_error_with_source(&err),
///            "Error! illegal character '$' at line 0, col 3 in file stdin\n  | 2 $ 3\n  |    ^");
/// ```
#[must_use]
pub fn render_error_with_source(error: &Error) -> String {
    let mut rendered = format_error(error);

    let Some(position) = error.position() else {
        return rendered;
    };
    if position.line >= position.source().lines().count().max(1) {
        return rendered;
    }

    let marker = " ".repeat(position.column);
    rendered.push_str(&format!("\n  | {}\n  | {marker}^", position.line_text()));
    rendered
}
