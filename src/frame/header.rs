//! Bit-exact encoding of the 4-byte frame header.
//!
//! Layout: `[index: u8][total: u8][frame_size: u16 little-endian]`.

use super::{FrameError, FrameIndex, FrameSize, HEADER_LEN};
use crate::byte_order::{read_le_u16, write_le_u16};

/// Header describing a single frame.
///
/// `FrameHeader` is small enough to copy by value and carries everything an
/// assembler needs to place a frame into its slot.
///
/// # Examples
///
/// ```
/// use qrseq::frame::{FrameHeader, FrameIndex, FrameSize};
/// let header = FrameHeader::new(FrameIndex::new(2), 4, FrameSize::Bytes64);
/// assert_eq!(header.encode(), [2, 4, 64, 0]);
/// assert_eq!(FrameHeader::decode(&header.encode()), Ok(header));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHeader {
    index: FrameIndex,
    total: u8,
    frame_size: FrameSize,
}

impl FrameHeader {
    /// Create a new frame header.
    #[must_use]
    pub const fn new(index: FrameIndex, total: u8, frame_size: FrameSize) -> Self {
        Self {
            index,
            total,
            frame_size,
        }
    }

    /// Return the frame position within its sequence.
    #[must_use]
    pub const fn index(&self) -> FrameIndex { self.index }

    /// Return the declared number of frames in the sequence.
    #[must_use]
    pub const fn total(&self) -> u8 { self.total }

    /// Return the allocated frame size.
    #[must_use]
    pub const fn frame_size(&self) -> FrameSize { self.frame_size }

    /// Serialise the header to its wire form.
    #[must_use]
    pub fn encode(&self) -> [u8; HEADER_LEN] {
        encode_header(self.index, self.total, self.frame_size)
    }

    /// Parse a header from the start of `bytes`.
    ///
    /// Bytes beyond the header are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::MalformedHeader`] when fewer than four bytes are
    /// supplied and [`FrameError::InvalidFrameSize`] when the size field is
    /// not a supported capacity.
    pub fn decode(bytes: &[u8]) -> Result<Self, FrameError> {
        let (index, total, frame_size) = decode_header(bytes)?;
        Ok(Self::new(index, total, frame_size))
    }
}

/// Encode a header from its parts.
///
/// Callers are expected to have range-checked the inputs already.
#[must_use]
pub fn encode_header(index: FrameIndex, total: u8, frame_size: FrameSize) -> [u8; HEADER_LEN] {
    let [size_lo, size_hi] = write_le_u16(frame_size.get());
    [index.get(), total, size_lo, size_hi]
}

/// Decode `(index, total, frame_size)` from the first four bytes of `bytes`.
///
/// # Errors
///
/// Returns [`FrameError::MalformedHeader`] when fewer than four bytes are
/// supplied and [`FrameError::InvalidFrameSize`] when the size field is not a
/// supported capacity.
pub fn decode_header(bytes: &[u8]) -> Result<(FrameIndex, u8, FrameSize), FrameError> {
    let Some(&[index, total, size_lo, size_hi]) = bytes.first_chunk::<HEADER_LEN>() else {
        return Err(FrameError::MalformedHeader { len: bytes.len() });
    };
    let frame_size = FrameSize::try_from(read_le_u16([size_lo, size_hi]))?;
    Ok((FrameIndex::new(index), total, frame_size))
}
