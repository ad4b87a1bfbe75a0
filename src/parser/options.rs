//! Parsing options and configuration.

/// Options for splitting and classifying Markdown input.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Whether to classify lines in parallel
    pub parallel: bool,

    /// Minimum line count before parallel classification kicks in
    pub parallel_threshold: usize,

    /// Apply Unicode NFC normalization to the input first
    pub normalize_unicode: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable parallel classification.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel classification.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Set the line count at which classification goes parallel.
    pub fn with_parallel_threshold(mut self, lines: usize) -> Self {
        self.parallel_threshold = lines;
        self
    }

    /// Enable or disable NFC normalization.
    pub fn with_unicode_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 2048,
            normalize_unicode: false,
        }
    }
}
