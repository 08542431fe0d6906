//! Structure inference options.

/// Options for turning a span document into sections.
#[derive(Debug, Clone)]
pub struct StructureOptions {
    /// Whether to analyze pages in parallel
    pub parallel: bool,
}

impl StructureOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable parallel page analysis.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Analyze pages in parallel.
    ///
    /// Page analysis shares no state between pages, so results are
    /// identical to a sequential run.
    pub fn parallel(mut self) -> Self {
        self.parallel = true;
        self
    }

    /// Analyze pages one at a time, in order (the default).
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for StructureOptions {
    fn default() -> Self {
        Self { parallel: false }
    }
}

/// How style identifiers are keyed when building a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Granularity {
    /// Key styles by the full (size, font, color) triple
    #[default]
    Granular,

    /// Key styles by font size alone. Coarse catalogs are for counting
    /// only; they are not meaningful input for tag assignment.
    Coarse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_builder() {
        let options = StructureOptions::new().parallel();
        assert!(options.parallel);

        let options = options.sequential();
        assert!(!options.parallel);

        let options = StructureOptions::new().with_parallel(true);
        assert!(options.parallel);
    }

    #[test]
    fn test_default_options() {
        let options = StructureOptions::default();
        assert!(!options.parallel);
        assert_eq!(Granularity::default(), Granularity::Granular);
    }
}
