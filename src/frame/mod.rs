//! Frame wire format and the chunker that produces frames.
//!
//! A frame is a 4-byte header followed by a payload slice. Headers are
//! self-describing so a receiver learns the frame size and the total frame
//! count from whichever frame it happens to see first.

pub mod chunker;
pub mod error;
pub mod header;
pub mod index;
pub mod payload;
pub mod size;

pub use chunker::{Chunker, FrameBatch};
pub use error::{ChunkError, FrameError, ParseFrameSizeError};
pub use header::{FrameHeader, decode_header, encode_header};
pub use index::FrameIndex;
pub use payload::{Frame, slice_frame_payload};
pub use size::FrameSize;

/// Length in bytes of an encoded [`FrameHeader`].
pub const HEADER_LEN: usize = 4;

/// Largest number of frames a single sequence can declare.
pub const MAX_FRAMES: usize = u8::MAX as usize;
