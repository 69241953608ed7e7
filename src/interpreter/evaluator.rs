/// Core evaluation logic.
///
/// Contains the tree walk and the result type shared by the evaluator.
pub mod core;

/// Unary operator evaluation.
///
/// Handles identity and negation.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements the four arithmetic operations, integer/float promotion and
/// the division-by-zero check.
pub mod binary;
