/// Parser state, depth accounting and the top-level entry points.
pub mod core;

/// Binary operator parsing.
///
/// Handles the two left-associative precedence levels: additive (`+`, `-`)
/// and multiplicative (`*`, `/`).
pub mod binary;

/// Unary operator and primary expression parsing.
///
/// Handles prefix `+`/`-`, numeric literals and parenthesized groups.
pub mod unary;
