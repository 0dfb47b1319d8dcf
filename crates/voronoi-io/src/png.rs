//! PNG image format support
//!
//! Every decoded PNG is normalized to 8 bits per sample: palettes and
//! low-bit grayscale are expanded and 16-bit samples are stripped.
//! Grayscale becomes an 8 bpp `Pix`; gray+alpha, RGB and RGBA become
//! 32 bpp with spp 2, 3 and 4 respectively.

use crate::{IoError, IoResult};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};
use voronoi_core::{Pix, PixelDepth, color};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Pix> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let (color_type, bit_depth) = reader.output_color_type();

    if bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG output depth: {:?}",
            bit_depth
        )));
    }

    let (pix_depth, spp) = match color_type {
        ColorType::Grayscale => (PixelDepth::Bit8, 1),
        ColorType::GrayscaleAlpha => (PixelDepth::Bit32, 2),
        ColorType::Rgb => (PixelDepth::Bit32, 3),
        ColorType::Rgba => (PixelDepth::Bit32, 4),
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "PNG palette was not expanded".to_string(),
            ));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let pix = Pix::new(width, height, pix_depth)?;
    let mut pix_mut = pix.try_into_mut().unwrap();
    pix_mut.set_spp(spp);

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    for y in 0..height {
        let row_start = y as usize * bytes_per_row;
        for x in 0..width {
            let idx = row_start + x as usize * spp as usize;
            let pixel = match color_type {
                ColorType::Grayscale => data[idx] as u32,
                ColorType::GrayscaleAlpha => {
                    let (g, a) = (data[idx], data[idx + 1]);
                    color::compose_rgba(g, g, g, a)
                }
                ColorType::Rgb => color::compose_rgb(data[idx], data[idx + 1], data[idx + 2]),
                _ => color::compose_rgba(data[idx], data[idx + 1], data[idx + 2], data[idx + 3]),
            };
            pix_mut.set_pixel_unchecked(x, y, pixel);
        }
    }

    log::debug!("decoded PNG {}x{} {:?} spp={}", width, height, color_type, spp);
    Ok(pix_mut.into())
}

/// Write a PNG image
///
/// 8 bpp images are written as 8-bit grayscale; 32 bpp images as RGBA
/// when spp is 4 and RGB otherwise.
pub fn write_png<W: Write>(pix: &Pix, writer: W) -> IoResult<()> {
    let width = pix.width();
    let height = pix.height();

    let color_type = match pix.depth() {
        PixelDepth::Bit8 => ColorType::Grayscale,
        PixelDepth::Bit32 if pix.spp() == 4 => ColorType::Rgba,
        PixelDepth::Bit32 => ColorType::Rgb,
    };

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let samples = match color_type {
        ColorType::Grayscale => 1,
        ColorType::Rgba => 4,
        _ => 3,
    };
    let bytes_per_row = width as usize * samples;
    let mut data = vec![0u8; bytes_per_row * height as usize];

    for y in 0..height {
        let row_start = y as usize * bytes_per_row;
        for x in 0..width {
            let pixel = pix.get_pixel_unchecked(x, y);
            let idx = row_start + x as usize * samples;
            match color_type {
                ColorType::Grayscale => data[idx] = pixel as u8,
                ColorType::Rgba => {
                    let (r, g, b, a) = color::extract_rgba(pixel);
                    data[idx..idx + 4].copy_from_slice(&[r, g, b, a]);
                }
                _ => {
                    let (r, g, b) = color::extract_rgb(pixel);
                    data[idx..idx + 3].copy_from_slice(&[r, g, b]);
                }
            }
        }
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}
