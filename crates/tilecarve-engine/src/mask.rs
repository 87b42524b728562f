//! Corner-rounding opacity masks.
//!
//! A mask is a single-channel raster: 255 is fully opaque, 0 fully
//! transparent. Rounded corners are carved as hard-edged quarter circles.

use image::{GrayImage, Luma, RgbaImage};

use crate::coords::{CornerSet, PixelRect};

pub const OPAQUE: u8 = u8::MAX;
pub const TRANSPARENT: u8 = 0;

/// Largest radius whose corner regions stay disjoint on a `width × height` tile.
#[inline]
pub fn max_radius(width: u32, height: u32) -> u32 {
    width.min(height) / 2
}

/// Builds a `width × height` mask with each corner in `corners` rounded.
///
/// Per corner, the `radius × radius` square is blanked and the pixels whose
/// centre falls inside the circle of `radius` centred `radius` pixels in from
/// both edges are restored. `radius` above [`max_radius`] is clamped, and a
/// zero radius leaves the mask fully opaque.
pub fn build_mask(width: u32, height: u32, radius: u32, corners: CornerSet) -> GrayImage {
    let mut mask = GrayImage::from_pixel(width, height, Luma([OPAQUE]));
    let radius = radius.min(max_radius(width, height));
    if radius == 0 {
        return mask;
    }

    let bounds = PixelRect::of_size(width, height);
    for corner in corners.iter() {
        let square = bounds.corner_square(corner, radius);

        fill(&mut mask, square, TRANSPARENT);

        for (x, y) in square.pixels() {
            let (dx, dy) = bounds.offset_from_corner(corner, x, y);
            if inside_quarter_circle(dx, dy, radius) {
                mask.put_pixel(x, y, Luma([OPAQUE]));
            }
        }
    }

    mask
}

/// Multiplies the alpha channel of `image` by `mask`.
///
/// For an opaque image this is a straight replacement of alpha by the mask.
pub fn apply_mask(image: &mut RgbaImage, mask: &GrayImage) {
    debug_assert_eq!(image.dimensions(), mask.dimensions());
    for (pixel, m) in image.pixels_mut().zip(mask.pixels()) {
        pixel[3] = scale_alpha(pixel[3], m[0]);
    }
}

fn fill(mask: &mut GrayImage, region: PixelRect, value: u8) {
    for (x, y) in region.pixels() {
        mask.put_pixel(x, y, Luma([value]));
    }
}

/// Whether the centre of the pixel at corner offset `(dx, dy)` lies within
/// the circle of radius `r` centred at `(r, r)`.
///
/// Evaluated in doubled integer coordinates so pixel centres stay exact.
fn inside_quarter_circle(dx: u32, dy: u32, r: u32) -> bool {
    let r = i64::from(r);
    let ox = 2 * r - 2 * i64::from(dx) - 1;
    let oy = 2 * r - 2 * i64::from(dy) - 1;
    ox * ox + oy * oy <= 4 * r * r
}

#[inline]
fn scale_alpha(alpha: u8, mask: u8) -> u8 {
    ((u16::from(alpha) * u16::from(mask) + 127) / 255) as u8
}
