//! Reassembly of frames into the original payload.
//!
//! The assembler is a small state machine: empty until the first frame fixes
//! the frame size and total, partial while slots are being filled, and
//! complete (terminal) once every slot holds a payload.

pub mod error;
pub mod shared;
pub mod state;

pub use error::{AbsorbStatus, SequenceError};
pub use shared::SharedSequence;
pub use state::{Sequence, SequencePhase};
