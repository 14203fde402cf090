//! Randomness contracts used by simulations hosted on the desktop.

/// Host source of uniformly distributed integers.
pub trait RandomSource {
    /// Returns a value uniformly drawn from `0..bound`.
    ///
    /// `bound` must be non-zero.
    ///
    /// # Errors
    ///
    /// Returns an error string when the host entropy source is unavailable.
    fn next_below(&mut self, bound: u32) -> Result<u32, String>;
}

#[derive(Debug, Clone, Default)]
/// Deterministic source that replays a fixed script of values, wrapping each into range.
///
/// Once the script is exhausted every further draw fails, which lets callers exercise their
/// fallback paths.
pub struct SequenceRandomSource {
    values: Vec<u32>,
    cursor: usize,
}

impl SequenceRandomSource {
    /// Creates a source that yields `values` in order.
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of values drawn so far.
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceRandomSource {
    fn next_below(&mut self, bound: u32) -> Result<u32, String> {
        if bound == 0 {
            return Err("random bound must be non-zero".to_string());
        }
        let value = self
            .values
            .get(self.cursor)
            .copied()
            .ok_or_else(|| "random sequence exhausted".to_string())?;
        self.cursor += 1;
        Ok(value % bound)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn sequence_wraps_values_into_bound_and_then_fails() {
        let mut source = SequenceRandomSource::new([3, 25, 40]);
        assert_eq!(source.next_below(20), Ok(3));
        assert_eq!(source.next_below(20), Ok(5));
        assert_eq!(source.next_below(20), Ok(0));
        assert_eq!(source.drawn(), 3);
        assert!(source.next_below(20).is_err());
    }

    #[test]
    fn zero_bound_is_rejected() {
        let mut source = SequenceRandomSource::new([1]);
        assert!(source.next_below(0).is_err());
        assert_eq!(source.drawn(), 0);
    }
}
