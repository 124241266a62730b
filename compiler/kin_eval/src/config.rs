//! Interpreter limits.

/// Environment variable overriding [`EvalConfig::max_call_depth`].
pub const MAX_DEPTH_ENV: &str = "KIN_MAX_DEPTH";

/// Depth limits enforced by the interpreter.
///
/// Exceeding either limit is a recursion-limit error rather than a host
/// stack overflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    /// Maximum number of nested procedure/function calls.
    pub max_call_depth: usize,
    /// Maximum nesting of statements and expressions being evaluated.
    pub max_nesting_depth: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            max_call_depth: 1000,
            max_nesting_depth: 10_000,
        }
    }
}

impl EvalConfig {
    /// Defaults, with the call depth taken from `KIN_MAX_DEPTH` when it holds
    /// a positive integer.
    pub fn from_env() -> Self {
        let value = std::env::var(MAX_DEPTH_ENV).ok();
        Self::default().with_depth_override(value.as_deref())
    }

    #[must_use]
    pub fn with_max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    #[must_use]
    pub fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }

    fn with_depth_override(self, value: Option<&str>) -> Self {
        match value.and_then(|v| v.trim().parse::<usize>().ok()) {
            Some(depth) if depth > 0 => self.with_max_call_depth(depth),
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests;
