//! Integer pixel geometry shared by the mask builder and the tileset layout.
//!
//! Canonical space:
//! - Whole pixels
//! - Origin top-left
//! - +X right, +Y down

mod corner;
mod rect;

pub use corner::{Corner, CornerSet, ParseCornerError};
pub use rect::PixelRect;
