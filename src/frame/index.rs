//! Zero-based frame positioning within a sequence.

use derive_more::{Display, From, Into};

/// Zero-based ordinal describing a frame's slot within its sequence.
///
/// # Examples
///
/// ```
/// use qrseq::frame::FrameIndex;
/// let index = FrameIndex::new(3);
/// assert_eq!(index.get(), 3);
/// assert_eq!(index.slot(), 3_usize);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Into)]
#[display("{_0}")]
pub struct FrameIndex(u8);

impl FrameIndex {
    /// Construct an index from a `u8` value.
    #[must_use]
    pub const fn new(value: u8) -> Self { Self(value) }

    /// Return the first valid frame index.
    #[must_use]
    pub const fn zero() -> Self { Self(0) }

    /// Return the underlying numeric value.
    #[must_use]
    pub const fn get(self) -> u8 { self.0 }

    /// Return the index as a slot offset.
    #[must_use]
    pub fn slot(self) -> usize { usize::from(self.0) }
}
