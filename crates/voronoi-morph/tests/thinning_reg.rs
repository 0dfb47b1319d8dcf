//! Zhang–Suen thinning regression test
//!
//! Run with:
//! ```
//! cargo test -p voronoi-morph --test thinning_reg
//! ```

use voronoi_core::{FPix, Pix};
use voronoi_io::ImageFormat;
use voronoi_morph::thin_zhang_suen;
use voronoi_test::{RegParams, fixtures};

fn to_mask(pix: &Pix) -> FPix {
    let mut mask = FPix::from_pix(pix).unwrap();
    mask.mul_constant(1.0 / 255.0);
    mask
}

#[test]
fn thinning_reg() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut rp = RegParams::new("thinning");

    // --- Bar: everything left lies on the middle row ---
    let bar = fixtures::mask_to_pix(&fixtures::rect_mask(22, 5, 1, 1, 20, 3), 255);
    let out = thin_zhang_suen(&bar, 0).unwrap();
    let expected = fixtures::mask_to_pix(&fixtures::rect_mask(22, 5, 2, 2, 18, 2), 255);
    rp.compare_pix(&expected, &out);
    rp.write_pix_if_display(&out, ImageFormat::Png).unwrap();

    // --- Ring keeps one component and its hole ---
    let ring = fixtures::pix_from_ascii(
        &[
            "...........",
            ".#########.",
            ".#########.",
            ".##.....##.",
            ".##.....##.",
            ".##.....##.",
            ".#########.",
            ".#########.",
            "...........",
        ],
        255,
    );
    let out = to_mask(&thin_zhang_suen(&ring, 0).unwrap());
    rp.compare_values(1.0, fixtures::count_components(&out) as f64, 0.0);
    rp.compare_values(1.0, fixtures::count_holes(&out) as f64, 0.0);

    // --- 1-pixel lines are fixed points ---
    for line in [
        fixtures::rect_mask(10, 3, 1, 1, 8, 1),
        fixtures::rect_mask(3, 10, 1, 1, 1, 8),
    ] {
        let pix = fixtures::mask_to_pix(&line, 255);
        let out = thin_zhang_suen(&pix, 0).unwrap();
        rp.compare_pix(&pix, &out);
    }

    assert!(rp.cleanup(), "thinning regression test failed");
}

#[test]
fn thinning_reg_random_idempotent() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut rp = RegParams::new("thinning_random");
    let mut rng = fixtures::SimpleRng::new(7);

    for (w, h, percent) in [(16, 16, 50), (32, 24, 60)] {
        let mask = fixtures::random_mask(w, h, percent, &mut rng);
        let pix = fixtures::mask_to_pix(&mask, 255);
        let once = thin_zhang_suen(&pix, 0).unwrap();
        let twice = thin_zhang_suen(&once, 0).unwrap();

        rp.compare_pix(&once, &twice);
        rp.compare_values(
            0.0,
            once.subtract_saturating(&pix).unwrap().count_pixels() as f64,
            0.0,
        );
        assert_eq!((once.width(), once.height()), (w, h));
    }

    assert!(rp.cleanup(), "thinning_random regression test failed");
}
