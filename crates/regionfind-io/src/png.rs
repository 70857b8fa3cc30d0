//! PNG image format support
//!
//! Every PNG color type is expanded to 8-bit RGBA on read. Images are
//! written as 8-bit RGB when fully opaque and as RGBA otherwise.

use crate::{IoError, IoResult};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use regionfind_core::{Image, pixel};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Image> {
    let mut decoder = Decoder::new(reader);
    // Palette -> RGB(A), low bit depths -> 8 bit, tRNS -> alpha
    decoder.set_transformations(Transformations::EXPAND);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {e}")))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {e}")))?;

    let channels = match output_info.color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "indexed PNG was not expanded".to_string(),
            ));
        }
    };
    // 16-bit samples keep their high byte
    let sample_bytes = if output_info.bit_depth == BitDepth::Sixteen {
        2
    } else {
        1
    };
    let width = output_info.width;
    let height = output_info.height;
    let line_size = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let mut image = Image::new(width, height)?.to_mut();
    for y in 0..height {
        let row = &data[y as usize * line_size..];
        for x in 0..width {
            let base = x as usize * channels * sample_bytes;
            let sample = |c: usize| row[base + c * sample_bytes];
            let value = match channels {
                1 => pixel::compose_rgb(sample(0), sample(0), sample(0)),
                2 => pixel::compose_rgba(sample(0), sample(0), sample(0), sample(1)),
                3 => pixel::compose_rgb(sample(0), sample(1), sample(2)),
                _ => pixel::compose_rgba(sample(0), sample(1), sample(2), sample(3)),
            };
            image.set_pixel_unchecked(x, y, value);
        }
    }

    Ok(image.into())
}

/// Write a PNG image
pub fn write_png<W: Write>(image: &Image, writer: W) -> IoResult<()> {
    let width = image.width();
    let height = image.height();
    let opaque = image
        .data()
        .iter()
        .all(|&p| pixel::alpha(p) == pixel::OPAQUE);

    let (color_type, channels) = if opaque {
        (ColorType::Rgb, 3)
    } else {
        (ColorType::Rgba, 4)
    };

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {e}")))?;

    let mut data = Vec::with_capacity(image.data().len() * channels);
    for &p in image.data() {
        let (r, g, b, a) = pixel::extract_rgba(p);
        data.extend_from_slice(&[r, g, b]);
        if !opaque {
            data.push(a);
        }
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {e}")))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {e}")))?;

    Ok(())
}
