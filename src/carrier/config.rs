//! Rendering settings handed to the image encoder.

use std::num::NonZeroUsize;

/// An opaque RGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    /// Pure white.
    pub const WHITE: Self = Self {
        r: 0xFF,
        g: 0xFF,
        b: 0xFF,
    };
}

/// Pixels per QR module used when no block size is given.
pub const DEFAULT_BLOCK_SIZE: NonZeroUsize = NonZeroUsize::MIN.saturating_add(2);

/// Settings that shape the raster produced for each frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Edge length in pixels of one QR module.
    pub block_size: NonZeroUsize,
    /// Quiet-zone width in pixels around the symbol.
    pub padding: usize,
    /// Colour of set modules.
    pub foreground: Rgb,
    /// Colour of unset modules and the quiet zone.
    pub background: Rgb,
}

impl RenderOptions {
    /// Black-on-white options with a quiet zone as wide as one block.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::num::NonZeroUsize;
    ///
    /// use qrseq::carrier::RenderOptions;
    ///
    /// let options = RenderOptions::with_block_size(NonZeroUsize::new(4).expect("non-zero"));
    /// assert_eq!(options.padding, 4);
    /// assert_eq!(options.image_side(21), 21 * 4 + 2 * 4);
    /// ```
    #[must_use]
    pub const fn with_block_size(block_size: NonZeroUsize) -> Self {
        Self {
            block_size,
            padding: block_size.get(),
            foreground: Rgb::BLACK,
            background: Rgb::WHITE,
        }
    }

    /// Edge length in pixels of a square image holding `modules` modules per
    /// side.
    #[must_use]
    pub const fn image_side(&self, modules: usize) -> usize {
        modules * self.block_size.get() + 2 * self.padding
    }
}

impl Default for RenderOptions {
    fn default() -> Self { Self::with_block_size(DEFAULT_BLOCK_SIZE) }
}
