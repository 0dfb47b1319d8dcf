//! Image I/O regression test
//!
//! Writes binary masks and color frames through both supported formats
//! and reads them back through format detection.
//!
//! Run with:
//! ```
//! cargo test -p voronoi-io --test imageio_reg
//! ```

use voronoi_core::{Pix, PixelDepth};
use voronoi_io::{ImageFormat, detect_format, read_image, read_image_mem, write_image, write_image_mem};
use voronoi_test::{RegParams, fixtures, regout_dir};

#[test]
fn imageio_reg() {
    let mut rp = RegParams::new("imageio");

    let mask = fixtures::pix_from_ascii(
        &[
            ".........", //
            ".#######.",
            ".#######.",
            ".........",
        ],
        255,
    );
    let frame = fixtures::rgb_from_ascii(&[
        ".....", //
        ".###.",
        ".....",
    ]);

    for format in [ImageFormat::Png, ImageFormat::Pnm] {
        // Test 1-2: in-memory round trips keep every pixel
        let bytes = write_image_mem(&mask, format).unwrap();
        let back = read_image_mem(&bytes).unwrap();
        rp.compare_pix(&mask, &back);

        let bytes = write_image_mem(&frame, format).unwrap();
        let back = read_image_mem(&bytes).unwrap();
        rp.compare_pix(&frame, &back);
        rp.compare_values(3.0, back.spp() as f64, 0.0);
    }

    // Test: file round trip with magic-number detection
    std::fs::create_dir_all(regout_dir()).unwrap();
    let path = format!("{}/imageio.mask.png", regout_dir());
    write_image(&mask, &path, ImageFormat::Png).unwrap();
    assert_eq!(detect_format(&path).unwrap(), ImageFormat::Png);
    let back = read_image(&path).unwrap();
    rp.compare_values(8.0, back.depth().bits() as f64, 0.0);
    rp.compare_values(mask.count_pixels() as f64, back.count_pixels() as f64, 0.0);

    assert!(rp.cleanup(), "imageio regression test failed");
}

#[test]
fn imageio_reg_rejects_unknown_data() {
    assert!(read_image_mem(b"GIF89a....").is_err());
    assert!(read_image("/nonexistent/voronoi/input.png").is_err());

    let pix = Pix::new(1, 1, PixelDepth::Bit8).unwrap();
    assert!(write_image(&pix, "/nonexistent/voronoi/out.png", ImageFormat::Png).is_err());
}
