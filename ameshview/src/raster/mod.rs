//! Raster data model for decoded imagery.
//!
//! A [`Raster`] is a width × height grid of RGBA samples, row-major, built
//! once by the decode layer and treated as immutable afterwards. All three
//! source layers consumed by the compositor are `Raster`s of identical
//! dimensions.

use image::RgbaImage;

/// A single RGBA sample.
///
/// Alpha is meaningful only for the border overlay, where any non-zero
/// value marks a border pixel. The radar layer uses pure black as its
/// "no data" color key instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    /// Fully opaque pixel from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Pixel from all four components.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// True when the color matches the radar "no precipitation data" key
    /// (red, green, and blue all exactly zero). Alpha is ignored.
    pub fn is_color_key_black(&self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0
    }

    /// True when the pixel has any alpha coverage at all.
    pub fn has_alpha(&self) -> bool {
        self.a > 0
    }
}

/// An immutable 2D grid of [`Pixel`] samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl Raster {
    /// Builds a raster from a row-major pixel buffer.
    ///
    /// # Panics
    ///
    /// Panics if the buffer length does not equal `width * height`. The
    /// decode layer and compositor always produce exact buffers, so a
    /// mismatch is a programming error, not an input error.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Pixel>) -> Self {
        assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize),
            "pixel buffer length must equal width * height"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Builds a raster with every sample set to `pixel`.
    pub fn filled(width: u32, height: u32, pixel: Pixel) -> Self {
        Self {
            width,
            height,
            pixels: vec![pixel; (width as usize) * (height as usize)],
        }
    }

    /// Converts a decoded [`RgbaImage`] buffer.
    pub fn from_rgba_image(image: &RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        let pixels = image
            .pixels()
            .map(|p| Pixel::rgba(p.0[0], p.0[1], p.0[2], p.0[3]))
            .collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Copies the samples into an [`RgbaImage`] for encoding or display.
    pub fn to_rgba_image(&self) -> RgbaImage {
        let mut image = RgbaImage::new(self.width, self.height);
        for (pixel, out) in self.pixels.iter().zip(image.pixels_mut()) {
            *out = image::Rgba([pixel.r, pixel.g, pixel.b, pixel.a]);
        }
        image
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Row-major sample slice.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Sample at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Pixel {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.pixels[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// True when `other` has the same width and height.
    pub fn same_dimensions(&self, other: &Raster) -> bool {
        self.width == other.width && self.height == other.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_color_key_black() {
        assert!(Pixel::rgb(0, 0, 0).is_color_key_black());
        assert!(Pixel::rgba(0, 0, 0, 0).is_color_key_black());
        assert!(!Pixel::rgb(1, 0, 0).is_color_key_black());
        assert!(!Pixel::rgb(0, 1, 0).is_color_key_black());
        assert!(!Pixel::rgb(0, 0, 1).is_color_key_black());
    }

    #[test]
    fn test_pixel_has_alpha() {
        assert!(Pixel::rgba(0, 0, 0, 1).has_alpha());
        assert!(Pixel::rgb(0, 0, 0).has_alpha());
        assert!(!Pixel::rgba(255, 255, 255, 0).has_alpha());
    }

    #[test]
    fn test_raster_filled_dimensions() {
        let raster = Raster::filled(3, 2, Pixel::rgb(10, 20, 30));
        assert_eq!(raster.dimensions(), (3, 2));
        assert_eq!(raster.pixels().len(), 6);
        assert_eq!(raster.pixel(2, 1), Pixel::rgb(10, 20, 30));
    }

    #[test]
    fn test_raster_pixel_indexing_is_row_major() {
        let pixels = vec![
            Pixel::rgb(1, 0, 0),
            Pixel::rgb(2, 0, 0),
            Pixel::rgb(3, 0, 0),
            Pixel::rgb(4, 0, 0),
        ];
        let raster = Raster::from_pixels(2, 2, pixels);
        assert_eq!(raster.pixel(0, 0).r, 1);
        assert_eq!(raster.pixel(1, 0).r, 2);
        assert_eq!(raster.pixel(0, 1).r, 3);
        assert_eq!(raster.pixel(1, 1).r, 4);
    }

    #[test]
    #[should_panic(expected = "width * height")]
    fn test_raster_rejects_short_buffer() {
        Raster::from_pixels(2, 2, vec![Pixel::rgb(0, 0, 0)]);
    }

    #[test]
    fn test_rgba_image_round_trip() {
        let raster = Raster::from_pixels(
            2,
            1,
            vec![Pixel::rgba(1, 2, 3, 4), Pixel::rgba(5, 6, 7, 8)],
        );
        let image = raster.to_rgba_image();
        assert_eq!(Raster::from_rgba_image(&image), raster);
    }

    #[test]
    fn test_same_dimensions() {
        let a = Raster::filled(2, 3, Pixel::rgb(0, 0, 0));
        let b = Raster::filled(2, 3, Pixel::rgb(255, 255, 255));
        let c = Raster::filled(3, 2, Pixel::rgb(0, 0, 0));
        assert!(a.same_dimensions(&b));
        assert!(!a.same_dimensions(&c));
    }
}
