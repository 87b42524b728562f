use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

/// Underlying failure while writing the finished tileset.
#[derive(Debug)]
pub enum ProcessingCause {
    Encode(image::ImageError),
    Io(io::Error),
}

impl fmt::Display for ProcessingCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingCause::Encode(e) => write!(f, "png encode failed: {e}"),
            ProcessingCause::Io(e) => write!(f, "write failed: {e}"),
        }
    }
}

impl std::error::Error for ProcessingCause {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProcessingCause::Encode(e) => Some(e),
            ProcessingCause::Io(e) => Some(e),
        }
    }
}

/// Every way a tileset run can fail. All variants are terminal.
#[derive(Debug)]
pub enum Error {
    /// Rejected input, detected before any image I/O.
    Validation { message: String },
    /// The source path does not exist.
    ImageNotFound { path: PathBuf },
    /// The source exists but could not be read or decoded.
    ImageLoad { path: PathBuf, source: image::ImageError },
    /// Encoding or saving the tileset failed.
    ImageProcessing { path: PathBuf, cause: ProcessingCause },
}

impl Error {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Error::Validation { message: msg.into() }
    }

    pub(crate) fn processing(path: &Path, cause: ProcessingCause) -> Self {
        Error::ImageProcessing { path: path.to_path_buf(), cause }
    }

    /// Maps a decode failure, treating a missing file as [`Error::ImageNotFound`].
    pub(crate) fn load(path: &Path, source: image::ImageError) -> Self {
        match source {
            image::ImageError::IoError(ref e) if e.kind() == io::ErrorKind::NotFound => {
                Error::ImageNotFound { path: path.to_path_buf() }
            }
            source => Error::ImageLoad { path: path.to_path_buf(), source },
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation { message } => f.write_str(message),
            Error::ImageNotFound { path } => {
                write!(f, "could not find image file: {}", path.display())
            }
            Error::ImageLoad { path, .. } => {
                write!(f, "could not load image {}", path.display())
            }
            Error::ImageProcessing { path, .. } => {
                write!(f, "error processing image for {}", path.display())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Validation { .. } | Error::ImageNotFound { .. } => None,
            Error::ImageLoad { source, .. } => Some(source),
            Error::ImageProcessing { cause, .. } => Some(cause),
        }
    }
}

/// Converts a user-supplied radius into a usable one.
///
/// Only positivity is checked here; the upper bound depends on the image and
/// is handled by clamping during assembly.
pub fn validate_radius(radius: i64) -> Result<u32> {
    if radius <= 0 {
        return Err(Error::validation("radius must be greater than 0"));
    }
    u32::try_from(radius).map_err(|_| Error::validation(format!("radius {radius} is too large")))
}
