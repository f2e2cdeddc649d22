//! Outbound helper that splits a byte buffer into frames.
//!
//! [`Chunker`] deterministically slices a buffer into `payload_capacity`-sized
//! pieces, tagging each with a [`FrameHeader`] that records its index, the
//! total frame count and the chosen [`FrameSize`]. Only the last frame may be
//! shorter than the capacity; no padding is added.

use std::num::NonZeroU8;

use super::{ChunkError, Frame, FrameHeader, FrameIndex, FrameSize};

/// Splits buffers into frames of a fixed [`FrameSize`].
#[derive(Clone, Copy, Debug)]
pub struct Chunker {
    frame_size: FrameSize,
}

impl Chunker {
    /// Create a chunker producing frames of `frame_size` bytes.
    #[must_use]
    pub const fn new(frame_size: FrameSize) -> Self { Self { frame_size } }

    /// Return the frame size used for every produced frame.
    #[must_use]
    pub const fn frame_size(&self) -> FrameSize { self.frame_size }

    /// Split `data` into an ordered batch of frames.
    ///
    /// # Examples
    ///
    /// ```
    /// use qrseq::frame::{Chunker, FrameSize};
    ///
    /// let batch = Chunker::new(FrameSize::Bytes64)
    ///     .split(&[0_u8; 200])
    ///     .expect("200 bytes fit in 64-byte frames");
    /// let lengths: Vec<usize> = batch.frames().iter().map(|f| f.payload().len()).collect();
    /// assert_eq!(lengths, [60, 60, 60, 20]);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::EmptyInput`] for a zero-length buffer and
    /// [`ChunkError::OversizedInput`] when more than 255 frames would be
    /// required.
    pub fn split(&self, data: impl AsRef<[u8]>) -> Result<FrameBatch, ChunkError> {
        let data = data.as_ref();
        let capacity = self.frame_size.payload_capacity();
        let count = u8::try_from(data.len().div_ceil(capacity)).map_err(|_| {
            ChunkError::OversizedInput {
                len: data.len(),
                frame_size: self.frame_size,
                limit: self.frame_size.max_input_len(),
            }
        })?;
        // Zero frames only arise from an empty buffer.
        let total = NonZeroU8::new(count).ok_or(ChunkError::EmptyInput)?;

        let frames = (0..=u8::MAX)
            .zip(data.chunks(capacity))
            .map(|(index, chunk)| Frame {
                header: FrameHeader::new(FrameIndex::new(index), total.get(), self.frame_size),
                payload: chunk.to_vec(),
            })
            .collect();

        Ok(FrameBatch::new(self.frame_size, total, frames))
    }
}

/// Collection of frames produced for a single buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBatch {
    frame_size: FrameSize,
    total: NonZeroU8,
    frames: Vec<Frame>,
}

impl FrameBatch {
    fn new(frame_size: FrameSize, total: NonZeroU8, frames: Vec<Frame>) -> Self {
        debug_assert_eq!(frames.len(), usize::from(total.get()));
        Self {
            frame_size,
            total,
            frames,
        }
    }

    /// Return the frame size shared by all frames.
    #[must_use]
    pub const fn frame_size(&self) -> FrameSize { self.frame_size }

    /// Frame count written into every header.
    #[must_use]
    pub const fn total(&self) -> NonZeroU8 { self.total }

    /// Return the frames as a slice, ordered by index.
    #[must_use]
    pub fn frames(&self) -> &[Frame] { self.frames.as_slice() }

    /// Number of frames in the batch.
    #[expect(
        clippy::len_without_is_empty,
        reason = "batches are guaranteed non-empty"
    )]
    #[must_use]
    pub fn len(&self) -> usize { self.frames.len() }

    /// Consume the batch, returning all frames.
    #[must_use]
    pub fn into_frames(self) -> Vec<Frame> { self.frames }
}

impl IntoIterator for FrameBatch {
    type Item = Frame;
    type IntoIter = std::vec::IntoIter<Frame>;

    fn into_iter(self) -> Self::IntoIter { self.frames.into_iter() }
}
