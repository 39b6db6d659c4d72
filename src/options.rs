pub const DEFAULT_MAX_DEPTH: usize = 128;
/// Hard ceiling on `max_depth`. Nesting this deep still fits on a 2 MiB
/// thread stack in debug builds; larger requests are clamped to it.
pub const MAX_DEPTH_LIMIT: usize = 512;

/// Engine configuration. The default reproduces the classic calculator
/// behaviour exactly; every switch here is an opt-in deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalOptions {
    /// Maximum number of nested factors (parentheses, signs, function
    /// arguments) before evaluation fails with `DepthExceeded`. Never above
    /// `MAX_DEPTH_LIMIT` once it reaches the evaluator.
    pub max_depth: usize,
    /// Accept the button symbols `!`, `|x|` and `%` as function names.
    pub symbol_aliases: bool,
    /// Reject a `(` that is never closed instead of tolerating it.
    pub strict_parens: bool,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            symbol_aliases: false,
            strict_parens: false,
        }
    }
}

impl EvalOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamped to `MAX_DEPTH_LIMIT`.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.min(MAX_DEPTH_LIMIT);
        self
    }

    pub fn with_symbol_aliases(mut self, enabled: bool) -> Self {
        self.symbol_aliases = enabled;
        self
    }

    pub fn with_strict_parens(mut self, enabled: bool) -> Self {
        self.strict_parens = enabled;
        self
    }
}
