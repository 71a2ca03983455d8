//! Pixel compositing of the three source layers.
//!
//! Layer order is fixed: base map on the bottom, radar in the middle with
//! pure black as its "no data" color key, border overlay on top wherever it
//! has alpha coverage. Each pixel is evaluated independently, so the result
//! does not depend on traversal order, and the output is always a fresh
//! allocation; inputs are never written.

use thiserror::Error;

use crate::raster::{Pixel, Raster};

/// Errors that can occur during compositing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompositeError {
    /// The three layers no longer agree on dimensions: a broken upstream
    /// assumption, fatal for this cycle only.
    #[error(
        "raster dimensions differ: map {map_w}x{map_h}, border {border_w}x{border_h}, radar {radar_w}x{radar_h}"
    )]
    DimensionMismatch {
        map_w: u32,
        map_h: u32,
        border_w: u32,
        border_h: u32,
        radar_w: u32,
        radar_h: u32,
    },
}

/// Merges map, border, and radar into one fully opaque raster.
///
/// Pure: identical inputs produce byte-identical output.
pub fn composite(
    map: &Raster,
    border: &Raster,
    radar: &Raster,
) -> Result<Raster, CompositeError> {
    if !map.same_dimensions(border) || !map.same_dimensions(radar) {
        let (map_w, map_h) = map.dimensions();
        let (border_w, border_h) = border.dimensions();
        let (radar_w, radar_h) = radar.dimensions();
        return Err(CompositeError::DimensionMismatch {
            map_w,
            map_h,
            border_w,
            border_h,
            radar_w,
            radar_h,
        });
    }

    let mut pixels = Vec::with_capacity(map.pixels().len());
    for ((m, b), r) in map.pixels().iter().zip(border.pixels()).zip(radar.pixels()) {
        let mut out = *m;
        if !r.is_color_key_black() {
            out = *r;
        }
        if b.has_alpha() {
            out = *b;
        }
        pixels.push(Pixel::rgb(out.r, out.g, out.b));
    }

    Ok(Raster::from_pixels(map.width(), map.height(), pixels))
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Pixel = Pixel::rgb(255, 255, 255);
    const BLACK: Pixel = Pixel::rgb(0, 0, 0);
    const RED: Pixel = Pixel::rgb(255, 0, 0);

    fn one_pixel(map: Pixel, border: Pixel, radar: Pixel) -> Pixel {
        let map = Raster::filled(1, 1, map);
        let border = Raster::filled(1, 1, border);
        let radar = Raster::filled(1, 1, radar);
        composite(&map, &border, &radar).unwrap().pixel(0, 0)
    }

    #[test]
    fn test_black_radar_shows_map() {
        let clear = Pixel::rgba(0, 0, 0, 0);
        assert_eq!(one_pixel(WHITE, clear, BLACK), WHITE);
    }

    #[test]
    fn test_colored_radar_covers_map() {
        let clear = Pixel::rgba(0, 0, 0, 0);
        assert_eq!(one_pixel(WHITE, clear, RED), RED);
    }

    #[test]
    fn test_border_wins_over_radar_and_map() {
        let border = Pixel::rgba(10, 120, 60, 1);
        assert_eq!(one_pixel(WHITE, border, RED), Pixel::rgb(10, 120, 60));
        assert_eq!(one_pixel(WHITE, border, BLACK), Pixel::rgb(10, 120, 60));
    }

    #[test]
    fn test_almost_black_radar_still_covers() {
        let clear = Pixel::rgba(0, 0, 0, 0);
        assert_eq!(one_pixel(WHITE, clear, Pixel::rgb(0, 0, 1)), Pixel::rgb(0, 0, 1));
    }

    #[test]
    fn test_two_by_one_example() {
        // map all white, radar [black, red], border fully transparent:
        // the black radar pixel shows the map, the red one covers it.
        let map = Raster::filled(2, 1, WHITE);
        let border = Raster::filled(2, 1, Pixel::rgba(0, 0, 0, 0));
        let radar = Raster::from_pixels(2, 1, vec![BLACK, RED]);

        let merged = composite(&map, &border, &radar).unwrap();
        assert_eq!(merged.pixel(0, 0), WHITE);
        assert_eq!(merged.pixel(1, 0), RED);
    }

    #[test]
    fn test_idempotent() {
        let map = Raster::from_pixels(2, 1, vec![WHITE, Pixel::rgb(1, 2, 3)]);
        let border = Raster::from_pixels(2, 1, vec![Pixel::rgba(9, 9, 9, 200), Pixel::rgba(0, 0, 0, 0)]);
        let radar = Raster::from_pixels(2, 1, vec![RED, BLACK]);

        let first = composite(&map, &border, &radar).unwrap();
        let second = composite(&map, &border, &radar).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_output_is_opaque_and_same_size() {
        let map = Raster::filled(3, 2, WHITE);
        let border = Raster::filled(3, 2, Pixel::rgba(0, 0, 0, 0));
        let radar = Raster::filled(3, 2, BLACK);

        let merged = composite(&map, &border, &radar).unwrap();
        assert_eq!(merged.dimensions(), (3, 2));
        assert!(merged.pixels().iter().all(|p| p.a == 255));
    }

    #[test]
    fn test_dimension_mismatch_border() {
        let map = Raster::filled(2, 2, WHITE);
        let border = Raster::filled(3, 2, WHITE);
        let radar = Raster::filled(2, 2, BLACK);

        let err = composite(&map, &border, &radar).unwrap_err();
        assert!(matches!(err, CompositeError::DimensionMismatch { border_w: 3, .. }));
    }

    #[test]
    fn test_dimension_mismatch_radar() {
        let map = Raster::filled(2, 2, WHITE);
        let border = Raster::filled(2, 2, WHITE);
        let radar = Raster::filled(2, 3, BLACK);

        let err = composite(&map, &border, &radar).unwrap_err();
        assert!(matches!(err, CompositeError::DimensionMismatch { radar_h: 3, .. }));
    }
}
