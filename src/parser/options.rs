//! Parse options

/// Options controlling how strictly a unit is parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Enforce the declared order of the module/submodule header
    /// (`yang-version`, then `namespace`, then `prefix`). When off, header
    /// statements may appear in any order within the header region.
    pub strict_header_order: bool,
    /// Abort at the first block with cardinality violations instead of
    /// collecting them across the whole unit
    pub fail_fast: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            strict_header_order: true,
            fail_fast: false,
        }
    }
}

impl ParseOptions {
    /// Options accepting header statements in any order
    pub fn lenient() -> Self {
        Self {
            strict_header_order: false,
            ..Self::default()
        }
    }

    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }
}
