//! The fixed 8×2 auto-tile layout.
//!
//! Grid coordinates are 1-based `(row, col)` with row in `1..=2` and col in
//! `1..=8`. Coordinates missing from [`TILE_TABLE`] are transparent.

use crate::coords::{Corner, CornerSet, PixelRect};

pub const GRID_COLUMNS: u32 = 8;
pub const GRID_ROWS: u32 = 2;

/// What goes into one grid cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TileSpec {
    /// Cell is left fully transparent.
    Transparent,
    /// Copy of the base image with these corners rounded (empty = unmodified).
    Rounded(CornerSet),
}

impl TileSpec {
    #[inline]
    pub const fn has_content(self) -> bool {
        matches!(self, TileSpec::Rounded(_))
    }

    /// Short human-readable name used in the layout description.
    pub fn label(self) -> String {
        use Corner::*;

        let TileSpec::Rounded(corners) = self else {
            return "Transparent".to_owned();
        };
        let named = [
            (CornerSet::empty(), "Base image"),
            (CornerSet::all(), "All corners"),
            (CornerSet::from_corners(&[TopLeft, BottomLeft]), "Left side"),
            (CornerSet::from_corners(&[TopRight, BottomRight]), "Right side"),
            (CornerSet::from_corners(&[TopLeft, TopRight]), "Top side"),
            (CornerSet::from_corners(&[BottomLeft, BottomRight]), "Bottom side"),
            (CornerSet::from_corners(&[TopLeft]), "Top-left"),
            (CornerSet::from_corners(&[TopRight]), "Top-right"),
            (CornerSet::from_corners(&[BottomLeft]), "Bottom-left"),
            (CornerSet::from_corners(&[BottomRight]), "Bottom-right"),
        ];
        match named.iter().find(|(set, _)| *set == corners) {
            Some((_, name)) => (*name).to_owned(),
            None => corners.iter().map(Corner::as_str).collect::<Vec<_>>().join("+"),
        }
    }
}

const fn rounded(corners: &[Corner]) -> TileSpec {
    TileSpec::Rounded(CornerSet::from_corners(corners))
}

/// Explicit grid entries. Every other cell is transparent.
pub const TILE_TABLE: [((u32, u32), TileSpec); 11] = {
    use Corner::*;
    [
        ((1, 1), TileSpec::Rounded(CornerSet::all())),
        ((1, 2), rounded(&[TopLeft, BottomLeft])),
        ((1, 3), rounded(&[TopRight, BottomRight])),
        ((1, 4), rounded(&[TopLeft, TopRight])),
        ((1, 5), rounded(&[BottomLeft, BottomRight])),
        ((1, 6), rounded(&[TopRight])),
        ((1, 7), rounded(&[TopLeft])),
        ((1, 8), TileSpec::Transparent),
        ((2, 1), rounded(&[BottomRight])),
        ((2, 2), rounded(&[BottomLeft])),
        ((2, 3), TileSpec::Rounded(CornerSet::empty())),
    ]
};

/// Looks up a grid cell, defaulting to [`TileSpec::Transparent`].
pub fn tile_spec(row: u32, col: u32) -> TileSpec {
    TILE_TABLE
        .iter()
        .find(|(key, _)| *key == (row, col))
        .map_or(TileSpec::Transparent, |(_, spec)| *spec)
}

/// All grid cells in row-major order.
pub fn cells() -> impl Iterator<Item = (u32, u32)> {
    (1..=GRID_ROWS).flat_map(|row| (1..=GRID_COLUMNS).map(move |col| (row, col)))
}

/// Pixel region of cell `(row, col)` on a canvas of `tile_w × tile_h` tiles.
#[inline]
pub fn cell_rect(row: u32, col: u32, tile_w: u32, tile_h: u32) -> PixelRect {
    debug_assert!((1..=GRID_ROWS).contains(&row) && (1..=GRID_COLUMNS).contains(&col));
    PixelRect::new((col - 1) * tile_w, (row - 1) * tile_h, tile_w, tile_h)
}

/// Number of cells that receive a copy of the base image.
pub fn content_tile_count() -> usize {
    cells().filter(|&(r, c)| tile_spec(r, c).has_content()).count()
}

/// Human-readable description of the grid, one line per row.
pub fn describe() -> String {
    let mut out = format!("Tileset Layout ({GRID_COLUMNS}x{GRID_ROWS} tiles):\n");
    for row in 1..=GRID_ROWS {
        let labels: Vec<String> = (1..=GRID_COLUMNS).map(|col| tile_spec(row, col).label()).collect();
        out.push_str(&format!("Row {row}: {}\n", labels.join(" | ")));
    }
    out
}
