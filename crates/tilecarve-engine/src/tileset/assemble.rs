use image::{imageops, RgbaImage};

use crate::coords::CornerSet;
use crate::layout::{self, TileSpec, GRID_COLUMNS, GRID_ROWS};
use crate::mask::{apply_mask, build_mask};

use super::radius::{clamp_radius, RadiusClamp};

/// Summary of one assembled tileset.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TilesetReport {
    pub tileset_width: u32,
    pub tileset_height: u32,
    pub tile_width: u32,
    pub tile_height: u32,
    pub radius: RadiusClamp,
    pub content_tiles: usize,
    pub transparent_tiles: usize,
}

impl TilesetReport {
    #[inline]
    pub fn total_tiles(&self) -> usize {
        self.content_tiles + self.transparent_tiles
    }
}

/// An assembled canvas plus its report.
#[derive(Debug, Clone)]
pub struct Tileset {
    pub canvas: RgbaImage,
    pub report: TilesetReport,
}

/// Copies `base` and rounds `corners` with the given (already clamped) radius.
///
/// An empty corner set returns an untouched copy; no mask is built.
pub fn render_tile(base: &RgbaImage, radius: u32, corners: CornerSet) -> RgbaImage {
    let mut tile = base.clone();
    if !corners.is_empty() {
        let (w, h) = base.dimensions();
        let mask = build_mask(w, h, radius, corners);
        apply_mask(&mut tile, &mask);
    }
    tile
}

/// Lays out every grid cell of the auto-tile sheet for `base`.
///
/// `requested_radius` is clamped to half the smaller side of `base`; a
/// warning is logged when that changes it.
pub fn assemble_tileset(base: &RgbaImage, requested_radius: u32) -> Tileset {
    let (width, height) = base.dimensions();

    let radius = clamp_radius(width, height, requested_radius);
    if radius.was_clamped() {
        log::warn!(
            "radius {} is too large for image size {width}x{height}; using maximum radius {}",
            radius.requested,
            radius.effective
        );
    }
    if radius.effective == 0 {
        log::warn!("image {width}x{height} is too small to round corners; tiles are left square");
    }

    let mut canvas = RgbaImage::new(width * GRID_COLUMNS, height * GRID_ROWS);

    for (row, col) in layout::cells() {
        let TileSpec::Rounded(corners) = layout::tile_spec(row, col) else {
            log::trace!("cell ({row},{col}) left transparent");
            continue;
        };

        let cell = layout::cell_rect(row, col, width, height);
        let tile = render_tile(base, radius.effective, corners);
        imageops::replace(&mut canvas, &tile, i64::from(cell.x), i64::from(cell.y));

        log::debug!(
            "cell ({row},{col}) at ({}, {}) with {} rounded corner(s)",
            cell.x,
            cell.y,
            corners.len()
        );
    }

    let content_tiles = layout::content_tile_count();
    let report = TilesetReport {
        tileset_width: canvas.width(),
        tileset_height: canvas.height(),
        tile_width: width,
        tile_height: height,
        radius,
        content_tiles,
        transparent_tiles: (GRID_COLUMNS * GRID_ROWS) as usize - content_tiles,
    };

    Tileset { canvas, report }
}
