/// Numeric rendering helpers.
///
/// Formatting of floating-point values in plain fixed notation, shared by the
/// token display form and the result formatter.
pub mod num;
