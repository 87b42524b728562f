//! Tileset assembly.
//!
//! [`assemble_tileset`] works purely in memory; [`create_tileset`] wraps it
//! with loading the base image and writing the PNG.

mod assemble;
mod io;
mod radius;

pub use assemble::{assemble_tileset, render_tile, Tileset, TilesetReport};
pub use io::{create_tileset, encode_png, load_base_image, write_png};
pub use radius::{clamp_radius, RadiusClamp};
