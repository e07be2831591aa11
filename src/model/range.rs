//! Byte range owned by a marker.

/// Inclusive byte range with a `-1` sentinel for "unset".
///
/// # Invariants
/// - Either both fields are `-1` (invalid) or both are `>= 0`
/// - `start > end` is allowed; drags can run backwards. Use [`ByteRange::normalized`]
///   before doing geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ByteRange {
    start: i64,
    end: i64,
}

impl ByteRange {
    /// Sentinel value shared by both fields of an unset range.
    pub const UNSET: i64 = -1;

    /// The unset range.
    pub const INVALID: Self = Self {
        start: Self::UNSET,
        end: Self::UNSET,
    };

    /// Create a valid range.
    ///
    /// # Panics
    /// Panics if either end is negative; use [`ByteRange::INVALID`] for the unset state.
    pub fn new(start: i64, end: i64) -> Self {
        assert!(
            start >= 0 && end >= 0,
            "byte range ends must be non-negative (start: {start}, end: {end})"
        );
        Self { start, end }
    }

    /// Range covering exactly one byte.
    pub fn single(index: i64) -> Self {
        Self::new(index, index)
    }

    /// First end as set (not normalised).
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Second end as set (not normalised).
    pub fn end(&self) -> i64 {
        self.end
    }

    /// True for the unset sentinel.
    pub fn is_invalid(&self) -> bool {
        self.start == Self::UNSET && self.end == Self::UNSET
    }

    /// Ends ordered so that `lo <= hi`, or `None` when unset.
    pub fn normalized(&self) -> Option<(u64, u64)> {
        if self.is_invalid() {
            return None;
        }
        let lo = self.start.min(self.end);
        let hi = self.start.max(self.end);
        Some((lo as u64, hi as u64))
    }

    /// Number of bytes covered (0 when unset).
    pub fn len(&self) -> u64 {
        self.normalized().map_or(0, |(lo, hi)| hi - lo + 1)
    }

    /// True when unset.
    pub fn is_empty(&self) -> bool {
        self.is_invalid()
    }

    /// Check whether `index` lies within the normalised range.
    pub fn contains(&self, index: u64) -> bool {
        self.normalized()
            .is_some_and(|(lo, hi)| (lo..=hi).contains(&index))
    }
}

impl Default for ByteRange {
    fn default() -> Self {
        Self::INVALID
    }
}
