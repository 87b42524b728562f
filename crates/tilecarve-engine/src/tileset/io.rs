use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::{Error, ProcessingCause, Result};

use super::assemble::{assemble_tileset, Tileset, TilesetReport};

/// Decodes `path` and normalizes it to RGBA (opaque alpha when absent).
pub fn load_base_image(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|e| Error::load(path, e))?;
    log::debug!(
        "loaded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );
    Ok(img.to_rgba8())
}

/// Encodes `canvas` as an RGBA PNG.
pub fn encode_png(canvas: &RgbaImage) -> std::result::Result<Vec<u8>, image::ImageError> {
    let mut bytes = Cursor::new(Vec::new());
    canvas.write_to(&mut bytes, ImageFormat::Png)?;
    Ok(bytes.into_inner())
}

/// Writes `canvas` to `path` as PNG regardless of the path's extension.
///
/// Encoding happens in memory first, so an encode failure never leaves a
/// partial file behind.
pub fn write_png(canvas: &RgbaImage, path: &Path) -> Result<()> {
    let bytes = encode_png(canvas).map_err(|e| Error::processing(path, ProcessingCause::Encode(e)))?;
    fs::write(path, bytes).map_err(|e| Error::processing(path, ProcessingCause::Io(e)))
}

/// Loads `source`, assembles the auto-tile sheet and saves it to `dest`.
///
/// A zero radius is rejected before any file is touched.
pub fn create_tileset(
    source: impl AsRef<Path>,
    dest: impl AsRef<Path>,
    radius: u32,
) -> Result<TilesetReport> {
    let (source, dest) = (source.as_ref(), dest.as_ref());

    if radius == 0 {
        return Err(Error::validation("radius must be greater than 0"));
    }

    let base = load_base_image(source)?;
    let Tileset { canvas, report } = assemble_tileset(&base, radius);
    write_png(&canvas, dest)?;

    log::info!(
        "wrote {}x{} tileset to {}",
        report.tileset_width,
        report.tileset_height,
        dest.display()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout;
    use image::{GenericImageView, Rgb, RgbImage, Rgba};
    use tempfile::TempDir;

    fn write_red(dir: &TempDir, name: &str, w: u32, h: u32) -> std::path::PathBuf {
        let path = dir.path().join(name);
        RgbaImage::from_pixel(w, h, Rgba([255, 0, 0, 255])).save(&path).unwrap();
        path
    }

    #[test]
    fn red_square_end_to_end() {
        let dir = TempDir::new().unwrap();
        let input = write_red(&dir, "red.png", 64, 64);
        let output = dir.path().join("tiles.png");

        let report = create_tileset(&input, &output, 10).unwrap();
        assert_eq!(report.radius.effective, 10);

        let out = image::open(&output).unwrap();
        assert_eq!(out.dimensions(), (512, 128));
        let out = out.to_rgba8();

        let base_cell = layout::cell_rect(2, 3, 64, 64);
        assert_eq!((base_cell.x, base_cell.y), (128, 64));
        assert!(base_cell.pixels().all(|(x, y)| *out.get_pixel(x, y) == Rgba([255, 0, 0, 255])));

        let empty_cell = layout::cell_rect(1, 8, 64, 64);
        assert_eq!((empty_cell.x, empty_cell.y), (448, 0));
        assert!(empty_cell.pixels().all(|(x, y)| out.get_pixel(x, y)[3] == 0));
    }

    #[test]
    fn oversized_radius_still_succeeds() {
        let dir = TempDir::new().unwrap();
        let input = write_red(&dir, "small.png", 10, 10);
        let output = dir.path().join("tiles.png");

        let report = create_tileset(&input, &output, 20).unwrap();
        assert!(report.radius.was_clamped());
        assert_eq!(report.radius.effective, 5);
        assert!(output.exists());
    }

    #[test]
    fn rgb_input_gets_opaque_alpha() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("rgb.png");
        RgbImage::from_pixel(8, 8, Rgb([0, 128, 0])).save(&input).unwrap();

        let base = load_base_image(&input).unwrap();
        assert!(base.pixels().all(|p| *p == Rgba([0, 128, 0, 255])));
    }

    #[test]
    fn zero_radius_fails_before_io() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("tiles.png");
        let err = create_tileset(dir.path().join("missing.png"), &output, 0).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn missing_input_is_not_found() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("tiles.png");
        let err = create_tileset(dir.path().join("missing.png"), &output, 20).unwrap_err();
        assert!(matches!(err, Error::ImageNotFound { .. }));
        assert!(err.to_string().starts_with("could not find image file"));
        assert!(!output.exists());
    }

    #[test]
    fn garbage_input_is_load_error() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("broken.png");
        fs::write(&input, b"definitely not a png").unwrap();
        let err = create_tileset(&input, dir.path().join("tiles.png"), 20).unwrap_err();
        assert!(matches!(err, Error::ImageLoad { .. }));
    }

    #[test]
    fn unwritable_destination_is_processing_error() {
        let dir = TempDir::new().unwrap();
        let input = write_red(&dir, "red.png", 8, 8);
        let output = dir.path().join("no-such-dir").join("tiles.png");
        let err = create_tileset(&input, &output, 2).unwrap_err();
        assert!(matches!(err, Error::ImageProcessing { cause: ProcessingCause::Io(_), .. }));
        assert!(!output.exists());
    }

    #[test]
    fn output_is_png_whatever_the_extension() {
        let dir = TempDir::new().unwrap();
        let input = write_red(&dir, "red.png", 8, 8);
        let output = dir.path().join("tiles.out");
        create_tileset(&input, &output, 2).unwrap();
        let bytes = fs::read(&output).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
    }
}
