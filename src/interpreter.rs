/// The evaluator module walks a parsed tree and computes its value.
///
/// The evaluator only ever sees the three node kinds the parser can build,
/// so the only way it can fail is arithmetic: division by zero.
///
/// # Responsibilities
/// - Evaluates numbers, unary and binary operations.
/// - Applies integer/float promotion and true division.
/// - Reports division by zero with the position of the operator.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens:
/// numbers, the four arithmetic operators and parentheses. It is the first
/// half of the sandboxing boundary; any other character is rejected here.
///
/// # Responsibilities
/// - Converts the input into tokens paired with their byte offsets.
/// - Distinguishes integer literals from float literals.
/// - Reports invalid characters and out-of-range literals.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The parser implements a fixed, precedence-climbing grammar and is the
/// second half of the sandboxing boundary: it can only construct numbers,
/// unary and binary operations.
///
/// # Responsibilities
/// - Converts tokens into [`crate::ast::Expr`] nodes.
/// - Rejects malformed input, unbalanced parentheses and trailing tokens.
/// - Bounds nesting depth so hostile input cannot exhaust the stack.
pub mod parser;
/// The value module defines the numeric result type.
///
/// # Responsibilities
/// - Defines [`value::Value`] with its integer and float variants.
/// - Provides conversion and promotion helpers.
/// - Formats values so integers and floats remain distinguishable.
pub mod value;
