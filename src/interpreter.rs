/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the syntax tree bottom-up, applies unary and binary
/// arithmetic, promotes integers to floating-point values when the operands
/// mix, and produces a single result.
///
/// # Responsibilities
/// - Evaluates AST nodes in post-order.
/// - Applies checked 32-bit integer arithmetic and IEEE float arithmetic.
/// - Reports runtime errors such as division by zero or integer overflow.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads one line of raw source text and produces the ordered
/// sequence of tokens: numeric literals, operators and parentheses, closed by
/// an end-of-input token.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with type and source
///   location.
/// - Handles integer and floating-point literals.
/// - Reports lexical errors for illegal characters and oversized literals.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser over the token sequence with one token of
/// lookahead. Binary operators are folded left-associatively.
///
/// # Responsibilities
/// - Converts tokens into AST nodes.
/// - Validates the grammar, reporting errors with location info.
/// - Bounds nesting depth so adversarial input cannot exhaust the stack.
pub mod parser;
/// Source positions.
///
/// Tracks byte index, line and column while the lexer walks the source and
/// records them on every token.
pub mod position;
/// The value module defines the result type of evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum with its integer and floating-point variants.
/// - Provides promotion from integer to floating-point.
/// - Renders results in their display form.
pub mod value;
