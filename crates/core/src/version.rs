//! Optimistic-concurrency primitives.

use crate::error::{DomainError, DomainResult};

/// Version expectation supplied by a caller on a mutating operation.
///
/// This is the only concurrency-coordination primitive the store offers:
/// a caller that wants to reject stale writes reads the current version,
/// then sends it back as `Exact`. On mismatch the write is refused and the
/// caller must re-read before retrying.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ExpectedVersion {
    /// Skip version checking (last-write-wins).
    #[default]
    Any,
    /// Require the record to be at an exact version.
    Exact(u64),
}

impl ExpectedVersion {
    pub fn matches(self, actual: u64) -> bool {
        match self {
            ExpectedVersion::Any => true,
            ExpectedVersion::Exact(v) => v == actual,
        }
    }

    pub fn check(self, actual: u64) -> DomainResult<()> {
        if self.matches(actual) {
            Ok(())
        } else {
            Err(DomainError::version_conflict("Version mismatch"))
        }
    }
}
