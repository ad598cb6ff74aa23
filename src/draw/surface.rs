//! Persistent raster canvas backed by a Cairo image surface.

use super::render::render_shape;
use super::shape::Shape;
use log::warn;
use thiserror::Error;

/// Errors produced while creating or serializing the canvas surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Failed to create drawing surface: {0}")]
    Create(#[from] cairo::Error),

    #[error("Failed to encode canvas as PNG: {0}")]
    Encode(cairo::IoError),

    #[error("Failed to decode canvas snapshot: {0}")]
    Decode(cairo::IoError),
}

/// The drawing canvas.
///
/// Wraps an ARGB32 Cairo image surface that starts fully transparent and
/// accumulates every stamped shape. There is no scene graph behind it;
/// once a shape is stamped it only goes away through [`Surface::clear`] or
/// [`Surface::restore_png`].
pub struct Surface {
    inner: cairo::ImageSurface,
    width: i32,
    height: i32,
}

impl Surface {
    /// Creates a transparent canvas of the given pixel dimensions.
    pub fn new(width: i32, height: i32) -> Result<Self, SurfaceError> {
        let inner = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        Ok(Self {
            inner,
            width,
            height,
        })
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Stamps a shape permanently onto the canvas.
    ///
    /// A context that cannot be created degrades to a no-op with a warning;
    /// drawing must never take the pad down.
    pub fn stamp(&mut self, shape: &Shape) {
        match cairo::Context::new(&self.inner) {
            Ok(ctx) => render_shape(&ctx, shape),
            Err(err) => warn!("Skipping stamp, no drawing context: {err}"),
        }
    }

    /// Wipes the canvas back to fully transparent.
    pub fn clear(&mut self) {
        match cairo::Context::new(&self.inner) {
            Ok(ctx) => {
                ctx.set_operator(cairo::Operator::Clear);
                if let Err(err) = ctx.paint() {
                    warn!("Failed to clear canvas: {err}");
                }
                ctx.set_operator(cairo::Operator::Over);
            }
            Err(err) => warn!("Skipping clear, no drawing context: {err}"),
        }
    }

    /// Encodes the current canvas content as a PNG byte buffer.
    pub fn encode_png(&self) -> Result<Vec<u8>, SurfaceError> {
        let mut buffer = Vec::new();
        self.inner
            .write_to_png(&mut buffer)
            .map_err(SurfaceError::Encode)?;
        Ok(buffer)
    }

    /// Replaces the canvas content with a previously encoded PNG snapshot.
    ///
    /// The canvas is cleared first so snapshot transparency shows through
    /// instead of compositing over stale content.
    pub fn restore_png(&mut self, png_data: &[u8]) -> Result<(), SurfaceError> {
        let mut reader = png_data;
        let snapshot =
            cairo::ImageSurface::create_from_png(&mut reader).map_err(SurfaceError::Decode)?;

        self.clear();
        match cairo::Context::new(&self.inner) {
            Ok(ctx) => {
                if ctx.set_source_surface(&snapshot, 0.0, 0.0).is_ok() {
                    if let Err(err) = ctx.paint() {
                        warn!("Failed to paint snapshot onto canvas: {err}");
                    }
                }
            }
            Err(err) => warn!("Skipping snapshot restore, no drawing context: {err}"),
        }
        Ok(())
    }

    /// Returns a copy of the canvas as packed ARGB pixels, row-major.
    ///
    /// Values are premultiplied, as stored by Cairo. Degrades to an
    /// all-transparent buffer if the pixel data is inaccessible.
    pub fn pixels(&mut self) -> Vec<u32> {
        let len = (self.width * self.height) as usize;
        match self.inner.data() {
            Ok(data) => data
                .chunks_exact(4)
                .map(|px| u32::from_ne_bytes([px[0], px[1], px[2], px[3]]))
                .collect(),
            Err(err) => {
                warn!("Canvas pixel data unavailable: {err}");
                vec![0; len]
            }
        }
    }
}
