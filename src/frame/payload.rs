//! Complete frames: a header plus the payload bytes it carries.

use super::{FrameError, FrameHeader, FrameIndex, FrameSize, HEADER_LEN, decode_header};

/// Metadata and payload for a single frame.
///
/// The payload never exceeds the capacity of the declared frame size; only
/// the last frame of a sequence is normally shorter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub(crate) header: FrameHeader,
    pub(crate) payload: Vec<u8>,
}

impl Frame {
    /// Construct a new frame.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::PayloadTooLong`] if `payload` does not fit in the
    /// slot reserved by the header's frame size.
    pub fn new(header: FrameHeader, payload: Vec<u8>) -> Result<Self, FrameError> {
        let capacity = header.frame_size().payload_capacity();
        if payload.len() > capacity {
            return Err(FrameError::PayloadTooLong {
                len: payload.len(),
                capacity,
            });
        }
        Ok(Self { header, payload })
    }

    /// Parse a frame from its wire bytes.
    ///
    /// Truncated final frames are accepted as-is and anything past the
    /// declared frame size is discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use qrseq::frame::{Frame, FrameSize};
    ///
    /// let frame = Frame::decode(&[1, 3, 32, 0, 0xAA, 0xBB]).expect("valid frame");
    /// assert_eq!(frame.header().index().get(), 1);
    /// assert_eq!(frame.header().total(), 3);
    /// assert_eq!(frame.header().frame_size(), FrameSize::Bytes32);
    /// assert_eq!(frame.payload(), &[0xAA, 0xBB]);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns the header errors of [`decode_header`].
    pub fn decode(bytes: &[u8]) -> Result<Self, FrameError> {
        let (index, total, frame_size) = decode_header(bytes)?;
        Ok(Self {
            header: FrameHeader::new(index, total, frame_size),
            payload: slice_frame_payload(bytes, frame_size).to_vec(),
        })
    }

    /// Serialise header and payload to wire bytes.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(HEADER_LEN + self.payload.len());
        buf.extend_from_slice(&self.header.encode());
        buf.extend_from_slice(&self.payload);
        buf
    }

    /// Return the frame header.
    #[must_use]
    pub fn header(&self) -> &FrameHeader { &self.header }

    /// Shorthand for the header's index.
    #[must_use]
    pub fn index(&self) -> FrameIndex { self.header.index() }

    /// Return the frame payload bytes.
    #[must_use]
    pub fn payload(&self) -> &[u8] { self.payload.as_slice() }

    /// Consume the frame, returning its components.
    #[must_use]
    pub fn into_parts(self) -> (FrameHeader, Vec<u8>) { (self.header, self.payload) }
}

/// Return the payload portion of a frame's wire bytes.
///
/// Yields `bytes[4..]` when the buffer is shorter than `frame_size` and
/// `bytes[4..frame_size]` otherwise, so trailing scanner noise past the
/// declared capacity is dropped. Buffers shorter than a header yield an empty
/// slice.
///
/// # Examples
///
/// ```
/// use qrseq::frame::{FrameSize, slice_frame_payload};
///
/// let mut wire = vec![0_u8, 1, 32, 0];
/// wire.extend(std::iter::repeat_n(7_u8, 40));
/// assert_eq!(slice_frame_payload(&wire, FrameSize::Bytes32).len(), 28);
/// assert_eq!(slice_frame_payload(&wire[..10], FrameSize::Bytes32).len(), 6);
/// ```
#[must_use]
pub fn slice_frame_payload(bytes: &[u8], frame_size: FrameSize) -> &[u8] {
    let end = bytes.len().min(usize::from(frame_size.get()));
    bytes.get(HEADER_LEN..end).unwrap_or_default()
}
