//! Feed parsing errors.

/// The feed's top-level layout did not match what the parser expects.
///
/// Raised only for structural problems that mean the upstream format has
/// changed. Individual malformed records are skipped rather than reported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedFormatError {
    /// The feed did not split into exactly four `*`-separated segments.
    #[error("unexpected top-level field count: expected 4, got {0}")]
    SegmentCount(usize),
}
