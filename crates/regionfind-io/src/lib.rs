//! regionfind-io - Image I/O for regionfind
//!
//! Loads frames and saves results for the region-growing pipeline.
//! Formats are selected with cargo features:
//!
//! - `png-format` (default): PNG via the `png` crate
//! - `pnm` (default): binary PPM
//!
//! # Examples
//!
//! ```
//! use regionfind_core::{Color, Image};
//! use regionfind_io::{ImageFormat, read_image_mem, write_image_mem};
//!
//! let image = Image::new_filled(8, 8, Color::RED).unwrap();
//! let bytes = write_image_mem(&image, ImageFormat::Pnm).unwrap();
//! let back = read_image_mem(&bytes).unwrap();
//! assert_eq!(back.get_color(3, 3), Some(Color::RED));
//! ```

mod error;
pub mod format;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use regionfind_core::Image;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor};
use std::path::Path;

/// Read an image from a file, detecting the format from its header.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    let reader = BufReader::new(File::open(path)?);
    read_image_format(reader, format)
}

/// Read an image from an in-memory buffer.
pub fn read_image_mem(data: &[u8]) -> IoResult<Image> {
    let format = detect_format_from_bytes(data)?;
    read_image_format(Cursor::new(data), format)
}

fn read_image_format<R: std::io::BufRead + std::io::Seek>(
    reader: R,
    format: ImageFormat,
) -> IoResult<Image> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pnm(reader),
        #[cfg(not(all(feature = "png-format", feature = "pnm")))]
        other => {
            drop(reader);
            Err(unsupported(other))
        }
    }
}

/// Write an image to a file in the given format.
pub fn write_image<P: AsRef<Path>>(image: &Image, path: P, format: ImageFormat) -> IoResult<()> {
    let writer = BufWriter::new(File::create(path)?);
    write_image_format(image, writer, format)
}

/// Encode an image into a byte vector.
pub fn write_image_mem(image: &Image, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_image_format(image, &mut buffer, format)?;
    Ok(buffer)
}

fn write_image_format<W: std::io::Write>(
    image: &Image,
    writer: W,
    format: ImageFormat,
) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(image, writer),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::write_pnm(image, writer),
        #[cfg(not(all(feature = "png-format", feature = "pnm")))]
        other => {
            let _ = (image, writer);
            Err(unsupported(other))
        }
    }
}

#[cfg(not(all(feature = "png-format", feature = "pnm")))]
fn unsupported(format: ImageFormat) -> IoError {
    IoError::UnsupportedFormat(format!(
        "{} support not enabled",
        format.extension()
    ))
}
