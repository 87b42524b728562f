//! tilecarve - auto-tile sheet generator
//!
//! Turns one base image into an 8×2 sheet of corner-rounded tile variants.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, FromArgMatches, Parser};
use tilecarve_engine::error::validate_radius;
use tilecarve_engine::logging::{init_logging, LoggingConfig, WriteStyle};
use tilecarve_engine::{create_tileset, layout, TilesetReport};

/// Generate a complete tileset with curved corners from a single image
#[derive(Parser, Debug)]
#[command(name = "tilecarve")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input image file path
    input: PathBuf,

    /// Output tileset file path (always written as PNG)
    output: PathBuf,

    /// Corner radius in pixels
    #[arg(short, long, default_value_t = 20, allow_negative_numbers = true)]
    radius: i64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored log output
    #[arg(long)]
    no_color: bool,
}

fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let help = format!(
        "{}\nExamples:\n  tilecarve grass.png grass_tileset.png --radius 25\n  tilecarve stone.jpg stone_tiles.png -r 15",
        layout::describe()
    );
    let matches = Cli::command().after_help(help).try_get_matches_from(args)?;
    Cli::from_arg_matches(&matches)
}

fn run(cli: &Cli) -> Result<TilesetReport> {
    // Validate before touching the file system.
    let radius = validate_radius(cli.radius)?;
    Ok(create_tileset(&cli.input, &cli.output, radius)?)
}

fn print_summary(output: &Path, report: &TilesetReport) {
    println!("Tileset generated! Saved to: {}", output.display());
    println!("Tileset size: {}x{}", report.tileset_width, report.tileset_height);
    println!("Individual tile size: {}x{}", report.tile_width, report.tile_height);
    println!("Corner radius: {}px", report.radius.effective);
    println!(
        "Total tiles: {} ({} with content, {} transparent)",
        report.total_tiles(),
        report.content_tiles,
        report.transparent_tiles
    );
}

fn main() -> ExitCode {
    let cli = match parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // --help / --version land here too and are not failures.
            return if err.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        }
    };

    init_logging(LoggingConfig {
        default_level: if cli.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn },
        write_style: if cli.no_color { WriteStyle::Never } else { WriteStyle::Auto },
        ..LoggingConfig::default()
    });

    match run(&cli) {
        Ok(report) => {
            print_summary(&cli.output, &report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::debug!("run failed: {err:?}");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        parse_args(std::iter::once("tilecarve").chain(args.iter().copied())).unwrap()
    }

    // ── parsing ───────────────────────────────────────────────────────────

    #[test]
    fn radius_defaults_to_twenty() {
        let cli = cli(&["in.png", "out.png"]);
        assert_eq!(cli.radius, 20);
        assert_eq!(cli.input, PathBuf::from("in.png"));
        assert!(!cli.verbose);
    }

    #[test]
    fn short_and_long_radius() {
        assert_eq!(cli(&["a.png", "b.png", "-r", "15"]).radius, 15);
        assert_eq!(cli(&["a.png", "b.png", "--radius", "25"]).radius, 25);
    }

    #[test]
    fn negative_radius_reaches_validation() {
        assert_eq!(cli(&["a.png", "b.png", "-r", "-5"]).radius, -5);
    }

    #[test]
    fn malformed_radius_is_an_error() {
        let err = parse_args(["tilecarve", "a.png", "b.png", "-r", "big"]).unwrap_err();
        assert!(err.use_stderr());
    }

    #[test]
    fn help_is_not_an_error() {
        let err = parse_args(["tilecarve", "--help"]).unwrap_err();
        assert!(!err.use_stderr());
        assert!(err.to_string().contains("Row 1: All corners"));
    }

    // ── run ───────────────────────────────────────────────────────────────

    #[test]
    fn zero_radius_fails_without_output() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.png");
        RgbaImage::from_pixel(8, 8, Rgba([0, 0, 255, 255])).save(&input).unwrap();
        let output = dir.path().join("out.png");

        let args = cli(&[input.to_str().unwrap(), output.to_str().unwrap(), "-r", "0"]);
        let err = run(&args).unwrap_err();
        assert_eq!(format!("{err:#}"), "radius must be greater than 0");
        assert!(!output.exists());
    }

    #[test]
    fn missing_input_fails_without_output() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("nope.png");
        let output = dir.path().join("out.png");

        let args = cli(&[input.to_str().unwrap(), output.to_str().unwrap()]);
        let err = run(&args).unwrap_err();
        assert!(format!("{err:#}").contains("could not find image file"));
        assert!(!output.exists());
    }

    #[test]
    fn generates_sheet() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.png");
        RgbaImage::from_pixel(10, 10, Rgba([0, 0, 255, 255])).save(&input).unwrap();
        let output = dir.path().join("out.png");

        let args = cli(&[input.to_str().unwrap(), output.to_str().unwrap()]);
        let report = run(&args).unwrap();
        assert_eq!((report.tileset_width, report.tileset_height), (80, 20));
        assert_eq!(report.radius.effective, 5);
        assert_eq!(image::open(&output).unwrap().to_rgba8().dimensions(), (80, 20));
    }
}
