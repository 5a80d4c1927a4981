#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    #[error("missing sequence to sort")]
    MissingSequence,
    #[error("heap range [{begin}, {end}] is invalid for a sequence of length {len}")]
    RangeOutOfBounds { begin: usize, end: usize, len: usize },
}
