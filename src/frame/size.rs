//! The closed set of frame capacities.
//!
//! A frame size is the allocated length of one frame on the wire, header
//! included. Only the six powers of two below are accepted; anything else is
//! treated as a corrupt header.

use std::{fmt, str::FromStr};

use super::{FrameError, HEADER_LEN, MAX_FRAMES, ParseFrameSizeError};

/// Allocated size in bytes of a frame's wire encoding.
///
/// # Examples
///
/// ```
/// use qrseq::frame::FrameSize;
///
/// let size = FrameSize::try_from(64).expect("64 is a valid frame size");
/// assert_eq!(size, FrameSize::Bytes64);
/// assert_eq!(size.payload_capacity(), 60);
/// assert!(FrameSize::try_from(100).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum FrameSize {
    /// 32-byte frames carrying 28 payload bytes.
    Bytes32 = 32,
    /// 64-byte frames carrying 60 payload bytes.
    Bytes64 = 64,
    /// 128-byte frames carrying 124 payload bytes.
    Bytes128 = 128,
    /// 256-byte frames carrying 252 payload bytes.
    Bytes256 = 256,
    /// 512-byte frames carrying 508 payload bytes.
    Bytes512 = 512,
    /// 1024-byte frames carrying 1020 payload bytes.
    Bytes1024 = 1024,
}

impl FrameSize {
    /// Every supported size, smallest first.
    pub const ALL: [Self; 6] = [
        Self::Bytes32,
        Self::Bytes64,
        Self::Bytes128,
        Self::Bytes256,
        Self::Bytes512,
        Self::Bytes1024,
    ];

    /// Return the size in bytes as carried in the header.
    #[must_use]
    pub const fn get(self) -> u16 { self as u16 }

    /// Number of payload bytes a single frame of this size can carry.
    #[must_use]
    pub const fn payload_capacity(self) -> usize { self as usize - HEADER_LEN }

    /// Largest buffer that can be split into frames of this size.
    #[must_use]
    pub const fn max_input_len(self) -> usize { self.payload_capacity() * MAX_FRAMES }

    /// Smallest frame size able to carry `len` bytes.
    ///
    /// Returns `None` when `len` exceeds the ceiling of the largest size.
    ///
    /// # Examples
    ///
    /// ```
    /// use qrseq::frame::FrameSize;
    ///
    /// assert_eq!(FrameSize::smallest_for(100), Some(FrameSize::Bytes32));
    /// assert_eq!(FrameSize::smallest_for(10_000), Some(FrameSize::Bytes64));
    /// assert_eq!(FrameSize::smallest_for(usize::MAX), None);
    /// ```
    #[must_use]
    pub fn smallest_for(len: usize) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|size| len <= size.max_input_len())
    }
}

impl TryFrom<u16> for FrameSize {
    type Error = FrameError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|size| size.get() == value)
            .ok_or(FrameError::InvalidFrameSize { found: value })
    }
}

impl From<FrameSize> for u16 {
    fn from(value: FrameSize) -> Self { value.get() }
}

impl FromStr for FrameSize {
    type Err = ParseFrameSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let found = input
            .parse::<u64>()
            .map_err(|_| ParseFrameSizeError::NotANumber {
                input: input.to_owned(),
            })?;
        u16::try_from(found)
            .ok()
            .and_then(|raw| Self::try_from(raw).ok())
            .ok_or(ParseFrameSizeError::Unsupported { found })
    }
}

impl fmt::Display for FrameSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.get()) }
}
