/// Default maximum expression depth.
///
/// Counts both parenthesis/unary nesting and the height of operator chains,
/// which is what bounds recursion in the parser and the evaluator.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Smallest accepted depth limit. A lone number has depth 1.
pub const MIN_MAX_DEPTH: usize = 1;

/// Largest accepted depth limit.
///
/// Every level costs a handful of parser frames; at this depth the parser,
/// the evaluator and the tree's drop all stay well inside a 2 MiB thread
/// stack, even in unoptimized builds.
pub const MAX_DEPTH_CEILING: usize = 512;

/// Resource limits applied while parsing.
///
/// `max_depth` is clamped to `MIN_MAX_DEPTH..=MAX_DEPTH_CEILING` when it is
/// used, so no configuration can let deep input exhaust the stack.
///
/// ```
/// use sandcalc::{Limits, error::ErrorKind, evaluate_expression_with, limits::MAX_DEPTH_CEILING};
///
/// let limits = Limits { max_depth: 4 };
/// assert!(evaluate_expression_with("((1))", &limits).is_ok());
///
/// let err = evaluate_expression_with("((((((1))))))", &limits).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::NestingTooDeep);
///
/// assert_eq!(Limits { max_depth: usize::MAX }.effective_max_depth(), MAX_DEPTH_CEILING);
/// assert_eq!(Limits { max_depth: 0 }.effective_max_depth(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum depth of the expression tree and of parser recursion.
    pub max_depth: usize,
}

impl Limits {
    /// The depth limit actually enforced: `max_depth` clamped to
    /// `MIN_MAX_DEPTH..=MAX_DEPTH_CEILING`.
    #[must_use]
    pub const fn effective_max_depth(&self) -> usize {
        if self.max_depth < MIN_MAX_DEPTH {
            MIN_MAX_DEPTH
        } else if self.max_depth > MAX_DEPTH_CEILING {
            MAX_DEPTH_CEILING
        } else {
            self.max_depth
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }
}
