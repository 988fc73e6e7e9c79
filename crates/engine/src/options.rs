/// Number of rows the export is padded (and capped) to.
pub const DEFAULT_TARGET: usize = 300;

/// First identifier handed out to filler records.
pub const DEFAULT_SYNTHETIC_START: i64 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Export size: padding fills up to it, truncation cuts down to it.
    pub target: usize,
    pub synthetic_start: i64,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET,
            synthetic_start: DEFAULT_SYNTHETIC_START,
        }
    }
}

impl PipelineOptions {
    /// Largest number a filler record can receive, `None` when
    /// `synthetic_start + target - 1` does not fit in an `i64`.
    pub fn last_filler_number(&self) -> Option<i64> {
        let span = i64::try_from(self.target.saturating_sub(1)).ok()?;
        self.synthetic_start.checked_add(span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_filler_number_default() {
        assert_eq!(PipelineOptions::default().last_filler_number(), Some(3299));
    }

    #[test]
    fn last_filler_number_overflow() {
        let options = PipelineOptions { target: 300, synthetic_start: i64::MAX };
        assert_eq!(options.last_filler_number(), None);

        let edge = PipelineOptions { target: 1, synthetic_start: i64::MAX };
        assert_eq!(edge.last_filler_number(), Some(i64::MAX));
    }
}
