use super::Corner;

/// Axis-aligned rectangle in whole pixels (top-left origin, half-open).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    #[inline]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle at the origin covering a `width × height` raster.
    #[inline]
    pub const fn of_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Exclusive right edge.
    #[inline]
    pub const fn right(self) -> u32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    #[inline]
    pub const fn bottom(self) -> u32 {
        self.y + self.height
    }

    /// Half-open containment: the right and bottom edges are excluded.
    #[inline]
    pub const fn contains(self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// The `size × size` square anchored at `corner`, clipped to this rect.
    pub fn corner_square(self, corner: Corner, size: u32) -> PixelRect {
        let w = size.min(self.width);
        let h = size.min(self.height);
        let x = if corner.is_left() { self.x } else { self.right() - w };
        let y = if corner.is_top() { self.y } else { self.bottom() - h };
        PixelRect::new(x, y, w, h)
    }

    /// Offset of pixel `(x, y)` measured inward from `corner`.
    ///
    /// The corner pixel itself maps to `(0, 0)` for every corner, which makes
    /// corner-local computations mirror images of each other.
    pub fn offset_from_corner(self, corner: Corner, x: u32, y: u32) -> (u32, u32) {
        debug_assert!(self.contains(x, y));
        let dx = if corner.is_left() { x - self.x } else { self.right() - 1 - x };
        let dy = if corner.is_top() { y - self.y } else { self.bottom() - 1 - y };
        (dx, dy)
    }

    /// Every pixel coordinate in row-major order.
    pub fn pixels(self) -> impl Iterator<Item = (u32, u32)> {
        (self.y..self.bottom()).flat_map(move |y| (self.x..self.right()).map(move |x| (x, y)))
    }
}
