//! voronoi-io - Image I/O for the voronoi workspace
//!
//! Loads the frames handed to the skeletonization engine and stores its
//! results. Two formats are supported, each behind a cargo feature:
//!
//! | Format | Feature      | Read          | Write          |
//! |--------|--------------|---------------|----------------|
//! | PNG    | `png-format` | gray/GA/RGB/RGBA, any depth | 8 bpp gray, RGB, RGBA |
//! | PNM    | `pnm`        | P5, P6        | P5, P6         |
//!
//! The format of an input is always detected from its magic number,
//! never from the file name.

mod error;
pub mod format;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor};
use std::path::Path;
use voronoi_core::Pix;

/// Read an image from a file path
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Pix> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    log::debug!("reading {} as {:?}", path.display(), format);
    let file = File::open(path)?;
    read_image_format(BufReader::new(file), format)
}

/// Read an image from memory
pub fn read_image_mem(data: &[u8]) -> IoResult<Pix> {
    let format = detect_format_from_bytes(data)?;
    read_image_format(Cursor::new(data), format)
}

fn read_image_format<R: std::io::BufRead + std::io::Seek>(
    reader: R,
    format: ImageFormat,
) -> IoResult<Pix> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pnm(reader),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "{:?} support not enabled",
            other
        ))),
    }
}

/// Write an image to a file path
pub fn write_image<P: AsRef<Path>>(pix: &Pix, path: P, format: ImageFormat) -> IoResult<()> {
    let path = path.as_ref();
    log::debug!("writing {} as {:?}", path.display(), format);
    let file = File::create(path)?;
    write_image_format(pix, BufWriter::new(file), format)
}

/// Encode an image into memory
pub fn write_image_mem(pix: &Pix, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_image_format(pix, &mut buffer, format)?;
    Ok(buffer)
}

fn write_image_format<W: std::io::Write>(pix: &Pix, writer: W, format: ImageFormat) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(pix, writer),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::write_pnm(pix, writer),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "{:?} support not enabled",
            other
        ))),
    }
}
