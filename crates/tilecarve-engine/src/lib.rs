//! Tilecarve engine crate.
//!
//! Builds rounded-corner opacity masks and assembles the fixed 8×2 auto-tile
//! sheet from a single base image. The CLI crate is a thin layer over
//! [`create_tileset`].

pub mod coords;
pub mod error;
pub mod layout;
pub mod logging;
pub mod mask;
pub mod tileset;

pub use error::{Error, Result};
pub use tileset::{assemble_tileset, create_tileset, Tileset, TilesetReport};
