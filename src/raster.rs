use std::collections::HashMap;
use std::fmt;

use crate::error::RasterError;

/// Packed 8-bit RGBA color key.
///
/// Province identity is plain value equality on this type; no color-space
/// handling happens anywhere in the crate.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    /// The fixed sentinel for "outside the map". Fully transparent, and by
    /// convention never used as a province color.
    pub const VOID: Self = Self::new(0, 0, 0, 0);

    /// Creates a color from its four channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a fully opaque color.
    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Whether this color is the void/transparent key. Void never forms a
    /// region and is never registered as a neighbor.
    #[must_use]
    pub const fn is_void(self) -> bool {
        self.a == 0
    }
}

impl fmt::Debug for Rgba8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

/// Read-only view of a color-keyed raster.
///
/// The scanner only ever reads through [`Raster::sample`], which maps
/// out-of-bounds coordinates to [`Rgba8::VOID`] so corners on the image rim
/// are handled by the same logic as interior ones.
pub trait Raster {
    /// Width in pixels.
    fn width(&self) -> i32;

    /// Height in pixels.
    fn height(&self) -> i32;

    /// Color of an in-bounds pixel. Callers must guarantee
    /// `0 <= x < width` and `0 <= y < height`.
    fn pixel(&self, x: i32, y: i32) -> Rgba8;

    /// Color at `(x, y)`, with out-of-bounds reads mapped to [`Rgba8::VOID`].
    fn sample(&self, x: i32, y: i32) -> Rgba8 {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            Rgba8::VOID
        } else {
            self.pixel(x, y)
        }
    }
}

/// Raster backed by an owned pixel buffer in row-major order.
#[derive(Debug, Clone)]
pub struct BufferRaster {
    width: i32,
    height: i32,
    pixels: Vec<Rgba8>,
}

impl BufferRaster {
    /// Creates a raster from a row-major pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is non-positive or the buffer
    /// length does not equal `width * height`.
    pub fn from_pixels(
        width: i32,
        height: i32,
        pixels: Vec<Rgba8>,
    ) -> Result<Self, RasterError> {
        if width <= 0 || height <= 0 {
            return Err(RasterError::EmptyRaster { width, height });
        }
        let expected = (width as usize) * (height as usize);
        if pixels.len() != expected {
            return Err(RasterError::PixelCountMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Creates a raster by evaluating `f` at every pixel coordinate.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is non-positive.
    pub fn from_fn(
        width: i32,
        height: i32,
        mut f: impl FnMut(i32, i32) -> Rgba8,
    ) -> Result<Self, RasterError> {
        if width <= 0 || height <= 0 {
            return Err(RasterError::EmptyRaster { width, height });
        }
        let mut pixels = Vec::with_capacity((width as usize) * (height as usize));
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self::from_pixels(width, height, pixels)
    }
}

impl Raster for BufferRaster {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn pixel(&self, x: i32, y: i32) -> Rgba8 {
        let idx = (y * self.width + x).unsigned_abs() as usize;
        self.pixels.get(idx).copied().unwrap_or(Rgba8::VOID)
    }
}

/// Counts how many pixels carry each color, in one full-raster pass.
///
/// Regions report this as their pixel footprint; void pixels are counted
/// like any other color and filtered by the region builder.
#[must_use]
pub fn color_histogram<R: Raster + ?Sized>(raster: &R) -> HashMap<Rgba8, usize> {
    let mut counts = HashMap::new();
    for y in 0..raster.height() {
        for x in 0..raster.width() {
            *counts.entry(raster.pixel(x, y)).or_insert(0) += 1;
        }
    }
    counts
}

/// Builds a raster from ASCII art rows, one char per pixel.
///
/// Palette: `R`ed, `G`reen, `B`lue, `W`hite, `Y`ellow, `.` for void.
#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) fn ascii_raster(rows: &[&str]) -> BufferRaster {
    let width = i32::try_from(rows[0].len()).unwrap();
    let height = i32::try_from(rows.len()).unwrap();
    BufferRaster::from_fn(width, height, |x, y| {
        let ch = rows[y.unsigned_abs() as usize]
            .as_bytes()[x.unsigned_abs() as usize];
        match ch {
            b'R' => Rgba8::opaque(255, 0, 0),
            b'G' => Rgba8::opaque(0, 255, 0),
            b'B' => Rgba8::opaque(0, 0, 255),
            b'W' => Rgba8::opaque(255, 255, 255),
            b'Y' => Rgba8::opaque(255, 255, 0),
            _ => Rgba8::VOID,
        }
    })
    .unwrap()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn sample_maps_out_of_bounds_to_void() {
        let raster = ascii_raster(&["RR", "RR"]);
        assert_eq!(raster.sample(-1, 0), Rgba8::VOID);
        assert_eq!(raster.sample(0, -1), Rgba8::VOID);
        assert_eq!(raster.sample(2, 0), Rgba8::VOID);
        assert_eq!(raster.sample(0, 2), Rgba8::VOID);
        assert_eq!(raster.sample(1, 1), Rgba8::opaque(255, 0, 0));
    }

    #[test]
    fn from_pixels_rejects_empty_dimensions() {
        assert!(matches!(
            BufferRaster::from_pixels(0, 4, vec![]),
            Err(RasterError::EmptyRaster { .. })
        ));
        assert!(matches!(
            BufferRaster::from_pixels(4, -1, vec![]),
            Err(RasterError::EmptyRaster { .. })
        ));
    }

    #[test]
    fn from_pixels_rejects_wrong_buffer_length() {
        let err = BufferRaster::from_pixels(2, 2, vec![Rgba8::VOID; 3]).unwrap_err();
        assert!(matches!(
            err,
            RasterError::PixelCountMismatch {
                expected: 4,
                actual: 3
            }
        ));
    }

    #[test]
    fn histogram_counts_every_color() {
        let raster = ascii_raster(&["RG", "G."]);
        let counts = color_histogram(&raster);
        assert_eq!(counts[&Rgba8::opaque(255, 0, 0)], 1);
        assert_eq!(counts[&Rgba8::opaque(0, 255, 0)], 2);
        assert_eq!(counts[&Rgba8::VOID], 1);
    }

    #[test]
    fn void_is_transparent_only() {
        assert!(Rgba8::VOID.is_void());
        assert!(Rgba8::new(10, 20, 30, 0).is_void());
        assert!(!Rgba8::opaque(0, 0, 0).is_void());
    }

    #[test]
    fn debug_format_is_hex() {
        let c = Rgba8::opaque(255, 0, 16);
        assert_eq!(format!("{c:?}"), "#ff0010ff");
    }
}
