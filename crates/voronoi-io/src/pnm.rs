//! PNM (Portable Any Map) format support
//!
//! Reads and writes PGM (P5 binary) and PPM (P6 binary) with a maxval
//! of at most 255. Header comments (`#` to end of line) are skipped.
//! Samples are rescaled to `0..=255` when maxval is smaller.

use crate::{IoError, IoResult};
use std::io::{BufRead, Read, Write};
use voronoi_core::{Pix, PixelDepth, color};

/// Read one whitespace-delimited header token, skipping comments.
fn read_token<R: Read>(reader: &mut R) -> IoResult<String> {
    let mut token = String::new();
    let mut in_comment = false;
    let mut byte = [0u8; 1];

    loop {
        if reader.read(&mut byte)? == 0 {
            break;
        }
        let c = byte[0];
        if in_comment {
            if c == b'\n' || c == b'\r' {
                in_comment = false;
            }
            continue;
        }
        if c == b'#' {
            in_comment = true;
            continue;
        }
        if c.is_ascii_whitespace() {
            if token.is_empty() {
                continue;
            }
            break;
        }
        token.push(c as char);
    }

    if token.is_empty() {
        return Err(IoError::InvalidData("truncated PNM header".to_string()));
    }
    Ok(token)
}

fn read_header_value<R: Read>(reader: &mut R, what: &str) -> IoResult<u32> {
    let token = read_token(reader)?;
    token
        .parse::<u32>()
        .map_err(|_| IoError::InvalidData(format!("invalid PNM {}: {:?}", what, token)))
}

/// Read a PNM image (P5/P6) from a reader.
///
/// Returns an 8 bpp `Pix` for PGM and a 32 bpp, spp 3 `Pix` for PPM.
pub fn read_pnm<R: BufRead>(mut reader: R) -> IoResult<Pix> {
    let magic = read_token(&mut reader)?;
    let channels = match magic.as_str() {
        "P5" => 1usize,
        "P6" => 3usize,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNM variant: {}",
                other
            )));
        }
    };

    let width = read_header_value(&mut reader, "width")?;
    let height = read_header_value(&mut reader, "height")?;
    let maxval = read_header_value(&mut reader, "maxval")?;
    if maxval == 0 || maxval > 255 {
        return Err(IoError::UnsupportedFormat(format!(
            "PNM maxval {} not supported",
            maxval
        )));
    }

    let mut data = vec![0u8; width as usize * height as usize * channels];
    reader
        .read_exact(&mut data)
        .map_err(|e| IoError::DecodeError(format!("PNM raster truncated: {}", e)))?;

    let scale = |v: u8| -> u8 {
        if maxval == 255 {
            v
        } else {
            ((v.min(maxval as u8) as u32 * 255 + maxval / 2) / maxval) as u8
        }
    };

    let depth = if channels == 1 {
        PixelDepth::Bit8
    } else {
        PixelDepth::Bit32
    };
    let pix = Pix::new(width, height, depth)?;
    let mut pix_mut = pix.try_into_mut().unwrap();

    for y in 0..height {
        for x in 0..width {
            let idx = (y as usize * width as usize + x as usize) * channels;
            let pixel = if channels == 1 {
                scale(data[idx]) as u32
            } else {
                color::compose_rgb(scale(data[idx]), scale(data[idx + 1]), scale(data[idx + 2]))
            };
            pix_mut.set_pixel_unchecked(x, y, pixel);
        }
    }

    Ok(pix_mut.into())
}

/// Write a `Pix` as binary PNM to a writer.
///
/// Chooses P5 (8 bpp grayscale) or P6 (32 bpp, alpha dropped).
pub fn write_pnm<W: Write>(pix: &Pix, mut writer: W) -> IoResult<()> {
    let width = pix.width();
    let height = pix.height();
    let (magic, channels) = match pix.depth() {
        PixelDepth::Bit8 => ("P5", 1usize),
        PixelDepth::Bit32 => ("P6", 3usize),
    };

    write!(writer, "{}\n{} {}\n255\n", magic, width, height)?;

    let mut row = vec![0u8; width as usize * channels];
    for y in 0..height {
        for x in 0..width {
            let pixel = pix.get_pixel_unchecked(x, y);
            let idx = x as usize * channels;
            if channels == 1 {
                row[idx] = pixel as u8;
            } else {
                let (r, g, b) = color::extract_rgb(pixel);
                row[idx..idx + 3].copy_from_slice(&[r, g, b]);
            }
        }
        writer.write_all(&row)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_pgm_with_comment() {
        let mut bytes = b"P5\n# made by hand\n3 2\n255\n".to_vec();
        bytes.extend_from_slice(&[0, 128, 255, 1, 2, 3]);
        let pix = read_pnm(Cursor::new(bytes)).unwrap();
        assert_eq!(pix.depth(), PixelDepth::Bit8);
        assert_eq!((pix.width(), pix.height()), (3, 2));
        assert_eq!(pix.get_pixel(1, 0), Some(128));
        assert_eq!(pix.get_pixel(2, 1), Some(3));
    }

    #[test]
    fn test_read_pgm_rescales_small_maxval() {
        let mut bytes = b"P5 2 1 1\n".to_vec();
        bytes.extend_from_slice(&[0, 1]);
        let pix = read_pnm(Cursor::new(bytes)).unwrap();
        assert_eq!(pix.get_pixel(0, 0), Some(0));
        assert_eq!(pix.get_pixel(1, 0), Some(255));
    }

    #[test]
    fn test_ppm_roundtrip() {
        let pix = Pix::new(2, 2, PixelDepth::Bit32).unwrap();
        let mut pm = pix.try_into_mut().unwrap();
        pm.set_rgb(1, 0, 10, 20, 30).unwrap();
        let pix: Pix = pm.into();

        let mut buf = Vec::new();
        write_pnm(&pix, &mut buf).unwrap();
        assert!(buf.starts_with(b"P6\n2 2\n255\n"));

        let back = read_pnm(Cursor::new(buf)).unwrap();
        assert_eq!(back.spp(), 3);
        assert_eq!(back.get_rgb(1, 0), Some((10, 20, 30)));
    }

    #[test]
    fn test_read_pnm_errors() {
        assert!(read_pnm(Cursor::new(b"P2\n1 1\n255\n0".to_vec())).is_err());
        assert!(read_pnm(Cursor::new(b"P5\n4 4\n255\n\x00".to_vec())).is_err());
        assert!(read_pnm(Cursor::new(b"P5\n1 1\n65535\n\x00\x00".to_vec())).is_err());
        assert!(read_pnm(Cursor::new(b"P5\nx 1\n255\n".to_vec())).is_err());
    }
}
