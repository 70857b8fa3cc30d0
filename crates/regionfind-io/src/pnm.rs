//! PPM (binary `P6`) format support
//!
//! Only 8-bit samples (maxval 1..=255) are handled; samples with a
//! maxval below 255 are rescaled to the full 8-bit range. Alpha is
//! dropped on write.

use crate::{IoError, IoResult};
use regionfind_core::{Image, pixel};
use std::io::{BufRead, Write};

/// Largest raster accepted from a PPM header, in bytes.
pub const MAX_RASTER_BYTES: usize = 256 * 1024 * 1024;

/// Read a binary PPM image from a reader.
pub fn read_pnm<R: BufRead>(mut reader: R) -> IoResult<Image> {
    let mut header = HeaderReader::new(&mut reader);
    let magic = header.token()?;
    if magic != "P6" {
        return Err(IoError::UnsupportedFormat(format!(
            "only binary PPM (P6) is supported, got {magic}"
        )));
    }
    let width = header.number()?;
    let height = header.number()?;
    let maxval = header.number()?;
    if maxval == 0 || maxval > 255 {
        return Err(IoError::UnsupportedFormat(format!(
            "PPM maxval {maxval} not supported"
        )));
    }

    let len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(3))
        .filter(|&n| n <= MAX_RASTER_BYTES)
        .ok_or_else(|| {
            IoError::InvalidData(format!(
                "PPM raster {width}x{height} exceeds {MAX_RASTER_BYTES} bytes"
            ))
        })?;
    let mut data = vec![0u8; len];
    reader
        .read_exact(&mut data)
        .map_err(|e| IoError::DecodeError(format!("truncated PPM raster: {e}")))?;

    if maxval != 255 {
        for sample in &mut data {
            *sample = ((*sample as u32).min(maxval) * 255 / maxval) as u8;
        }
    }

    Ok(Image::from_rgb_bytes(width, height, &data)?)
}

/// Write an image as binary PPM to a writer.
pub fn write_pnm<W: Write>(image: &Image, mut writer: W) -> IoResult<()> {
    write!(writer, "P6\n{} {}\n255\n", image.width(), image.height())?;
    let mut data = Vec::with_capacity(image.data().len() * 3);
    for &p in image.data() {
        data.extend_from_slice(&[pixel::red(p), pixel::green(p), pixel::blue(p)]);
    }
    writer.write_all(&data)?;
    writer.flush()?;
    Ok(())
}

/// Tokenizer for the whitespace-separated PPM header, skipping `#` comments.
///
/// Consumes exactly one whitespace byte after the last token so that the
/// raster starts at the reader's position.
struct HeaderReader<'a, R: BufRead> {
    reader: &'a mut R,
}

impl<'a, R: BufRead> HeaderReader<'a, R> {
    fn new(reader: &'a mut R) -> Self {
        Self { reader }
    }

    fn byte(&mut self) -> IoResult<u8> {
        let mut b = [0u8; 1];
        self.reader
            .read_exact(&mut b)
            .map_err(|e| IoError::DecodeError(format!("truncated PPM header: {e}")))?;
        Ok(b[0])
    }

    fn token(&mut self) -> IoResult<String> {
        let mut b = self.byte()?;
        loop {
            if b == b'#' {
                while b != b'\n' {
                    b = self.byte()?;
                }
            } else if !b.is_ascii_whitespace() {
                break;
            }
            b = self.byte()?;
        }

        let mut token = String::new();
        while !b.is_ascii_whitespace() {
            token.push(b as char);
            b = self.byte()?;
        }
        Ok(token)
    }

    fn number(&mut self) -> IoResult<u32> {
        let token = self.token()?;
        token
            .parse()
            .map_err(|_| IoError::InvalidData(format!("bad PPM header value '{token}'")))
    }
}
