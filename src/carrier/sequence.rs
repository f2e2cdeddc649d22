//! Carrier-level entry points on [`Sequence`].

use super::{
    CarrierError,
    ImageDecoder,
    ImageEncoder,
    RenderError,
    RenderOptions,
    from_carrier_text,
    render_frame,
    scan_frame,
    to_carrier_text,
};
use crate::{
    frame::Frame,
    sequence::{AbsorbStatus, Sequence, SequenceError},
};

impl Sequence {
    /// Carrier text for every frame of a complete sequence, ordered by index.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Incomplete`] unless the sequence is complete.
    pub fn carrier_texts(&self) -> Result<Vec<String>, SequenceError> {
        Ok(self.frames()?.iter().map(to_carrier_text).collect())
    }

    /// Render every frame of a complete sequence through `encoder`.
    ///
    /// Rendering stops at the first encoder failure.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Sequence`] unless the sequence is complete and
    /// [`RenderError::Encoder`] with the encoder's own error otherwise.
    pub fn render<E: ImageEncoder>(
        &self,
        encoder: &E,
        options: &RenderOptions,
    ) -> Result<Vec<E::Image>, RenderError<E::Error>> {
        self.frames()?
            .iter()
            .map(|frame| render_frame(encoder, frame, options).map_err(RenderError::Encoder))
            .collect()
    }

    /// Parse carrier text and absorb the frame it carries.
    ///
    /// Nothing is parsed once the sequence is complete.
    ///
    /// # Errors
    ///
    /// Returns [`CarrierError::Decode`] or [`CarrierError::Frame`] when the
    /// text is not a valid frame and [`CarrierError::Sequence`] when the
    /// sequence refuses it.
    pub fn absorb_carrier_text(&mut self, text: &str) -> Result<AbsorbStatus, CarrierError> {
        self.absorb_with(|| from_carrier_text(text))
    }

    /// Scan `image` through `decoder` and absorb the frame it carries.
    ///
    /// The decoder is not invoked once the sequence is complete.
    ///
    /// # Errors
    ///
    /// Returns [`CarrierError::Decode`] for any scanner failure,
    /// [`CarrierError::Frame`] for malformed frame bytes and
    /// [`CarrierError::Sequence`] when the sequence refuses the frame.
    pub fn absorb_image<D: ImageDecoder>(
        &mut self,
        decoder: &D,
        image: &D::Image,
    ) -> Result<AbsorbStatus, CarrierError> {
        self.absorb_with(|| scan_frame(decoder, image))
    }

    fn absorb_with(
        &mut self,
        decode: impl FnOnce() -> Result<Frame, CarrierError>,
    ) -> Result<AbsorbStatus, CarrierError> {
        if self.is_complete() {
            return Ok(AbsorbStatus::AlreadyComplete);
        }
        let frame = decode()?;
        Ok(self.absorb(frame)?)
    }
}
