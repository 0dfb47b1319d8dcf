//! 8-neighborhood classification for two-pass thinning
//!
//! A [`Neighborhood`] holds the eight neighbors of a pixel as booleans in
//! clockwise order starting north:
//!
//! ```text
//!   NW  N  NE        7  0  1
//!   W   .   E   bit  6  .  2
//!   SW  S  SE        5  4  3
//! ```
//!
//! The classifier answers three questions about a foreground pixel:
//!
//! - **transitions**: how many times the clockwise walk goes from
//!   background into an occupied neighbor pair. Exactly one means the
//!   pixel sits on a simple boundary and removing it keeps its
//!   foreground neighbors connected.
//! - **pair count**: `min(n1, n2)`, where `n1` groups the neighbors into
//!   the pairs (NW,N) (NE,E) (SE,S) (SW,W) and `n2` into (N,NE) (E,SE)
//!   (S,SW) (W,NW). A value of 2 or 3 rejects line ends (too few) and
//!   interior pixels (too many).
//! - **corner**: a pass-specific guard, see [`Pass`].
//!
//! All operators are boolean. On 0/1 inputs they agree with the integer
//! bit-complement formulation for every one of the 256 neighborhoods.

use crate::subiteration::Pass;
use voronoi_core::FPix;

/// The eight neighbors of a pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Neighborhood {
    pub n: bool,
    pub ne: bool,
    pub e: bool,
    pub se: bool,
    pub s: bool,
    pub sw: bool,
    pub w: bool,
    pub nw: bool,
}

impl Neighborhood {
    /// Offsets `(dx, dy)` of the neighbors in clockwise order from north.
    pub const OFFSETS: [(i64, i64); 8] = [
        (0, -1),
        (1, -1),
        (1, 0),
        (1, 1),
        (0, 1),
        (-1, 1),
        (-1, 0),
        (-1, -1),
    ];

    /// Read the neighbors of (x, y); positions outside the mask are background.
    pub fn read(mask: &FPix, x: u32, y: u32) -> Self {
        let mut bits = 0u8;
        for (i, &(dx, dy)) in Self::OFFSETS.iter().enumerate() {
            if mask.get_pixel_or_zero(x as i64 + dx, y as i64 + dy) != 0.0 {
                bits |= 1 << i;
            }
        }
        Self::from_bits(bits)
    }

    /// Build from a bit pattern, bit `i` being the `i`-th clockwise neighbor.
    pub fn from_bits(bits: u8) -> Self {
        let bit = |i: u8| (bits >> i) & 1 == 1;
        Neighborhood {
            n: bit(0),
            ne: bit(1),
            e: bit(2),
            se: bit(3),
            s: bit(4),
            sw: bit(5),
            w: bit(6),
            nw: bit(7),
        }
    }

    /// Inverse of [`Neighborhood::from_bits`].
    pub fn to_bits(self) -> u8 {
        self.as_array()
            .iter()
            .enumerate()
            .fold(0u8, |acc, (i, &v)| acc | ((v as u8) << i))
    }

    /// Neighbors in clockwise order from north.
    pub fn as_array(self) -> [bool; 8] {
        [
            self.n, self.ne, self.e, self.se, self.s, self.sw, self.w, self.nw,
        ]
    }

    /// Number of occupied neighbors.
    pub fn count(self) -> u32 {
        self.to_bits().count_ones()
    }

    /// Background-to-foreground transitions around the pixel, in `0..=4`.
    pub fn transitions(self) -> u32 {
        (!self.n && (self.ne || self.e)) as u32
            + (!self.e && (self.se || self.s)) as u32
            + (!self.s && (self.sw || self.w)) as u32
            + (!self.w && (self.nw || self.n)) as u32
    }

    /// Occupied pairs among (NW,N) (NE,E) (SE,S) (SW,W).
    pub fn n1(self) -> u32 {
        (self.nw || self.n) as u32
            + (self.ne || self.e) as u32
            + (self.se || self.s) as u32
            + (self.sw || self.w) as u32
    }

    /// Occupied pairs among (N,NE) (E,SE) (S,SW) (W,NW).
    pub fn n2(self) -> u32 {
        (self.n || self.ne) as u32
            + (self.e || self.se) as u32
            + (self.s || self.sw) as u32
            + (self.w || self.nw) as u32
    }

    /// `min(n1, n2)`
    pub fn pair_count(self) -> u32 {
        self.n1().min(self.n2())
    }

    /// Pass-specific corner guard; a set guard protects the pixel.
    pub fn corner(self, pass: Pass) -> bool {
        match pass {
            Pass::A => (self.n || self.ne || !self.se) && self.e,
            Pass::B => (self.s || self.sw || !self.nw) && self.w,
        }
    }

    /// Whether a foreground pixel with this neighborhood is deleted in `pass`.
    pub fn is_removable(self, pass: Pass) -> bool {
        self.transitions() == 1 && matches!(self.pair_count(), 2 | 3) && !self.corner(pass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The same predicate evaluated on `i32` with bitwise complement,
    /// neighbors indexed NW, N, NE, E, SE, S, SW, W.
    fn removable_bitwise(nb: [i32; 8], pass: Pass) -> bool {
        let c = (!nb[1] & (nb[2] | nb[3]))
            + (!nb[3] & (nb[4] | nb[5]))
            + (!nb[5] & (nb[6] | nb[7]))
            + (!nb[7] & (nb[0] | nb[1]));
        if c != 1 {
            return false;
        }
        let n1 = (nb[0] | nb[1]) + (nb[2] | nb[3]) + (nb[4] | nb[5]) + (nb[6] | nb[7]);
        let n2 = (nb[1] | nb[2]) + (nb[3] | nb[4]) + (nb[5] | nb[6]) + (nb[7] | nb[0]);
        let n = n1.min(n2);
        if n != 2 && n != 3 {
            return false;
        }
        let corner = match pass {
            Pass::A => (nb[1] | nb[2] | !nb[4]) & nb[3],
            Pass::B => (nb[5] | nb[6] | !nb[0]) & nb[7],
        };
        corner == 0
    }

    fn bitwise_layout(nb: Neighborhood) -> [i32; 8] {
        [
            nb.nw as i32,
            nb.n as i32,
            nb.ne as i32,
            nb.e as i32,
            nb.se as i32,
            nb.s as i32,
            nb.sw as i32,
            nb.w as i32,
        ]
    }

    #[test]
    fn test_boolean_matches_bitwise_for_all_neighborhoods() {
        for bits in 0..=255u8 {
            let nb = Neighborhood::from_bits(bits);
            let raw = bitwise_layout(nb);
            for pass in [Pass::A, Pass::B] {
                assert_eq!(
                    nb.is_removable(pass),
                    removable_bitwise(raw, pass),
                    "bits {:08b} pass {:?}",
                    bits,
                    pass
                );
            }
        }
    }

    #[test]
    fn test_bits_roundtrip_and_order() {
        for bits in 0..=255u8 {
            assert_eq!(Neighborhood::from_bits(bits).to_bits(), bits);
        }
        let north_only = Neighborhood::from_bits(1);
        assert!(north_only.n && north_only.count() == 1);
        let nw_only = Neighborhood::from_bits(0x80);
        assert!(nw_only.nw);
    }

    #[test]
    fn test_transition_range() {
        for bits in 0..=255u8 {
            assert!(Neighborhood::from_bits(bits).transitions() <= 4);
        }
        // Diagonals only: each clear edge neighbor is followed by a corner
        assert_eq!(Neighborhood::from_bits(0xAA).transitions(), 4);
        // A plus shape counts none: every edge neighbor is occupied
        let plus = Neighborhood {
            n: true,
            e: true,
            s: true,
            w: true,
            ..Default::default()
        };
        assert_eq!(plus.transitions(), 0);
        // A single arm counts once
        let north = Neighborhood {
            n: true,
            ..Default::default()
        };
        assert_eq!(north.transitions(), 1);
        assert_eq!(Neighborhood::default().transitions(), 0);
        assert_eq!(Neighborhood::from_bits(0xff).transitions(), 0);
    }

    #[test]
    fn test_isolated_and_end_points_survive() {
        let isolated = Neighborhood::default();
        let end_point = Neighborhood {
            e: true,
            ..Default::default()
        };
        for pass in [Pass::A, Pass::B] {
            assert!(!isolated.is_removable(pass));
            assert!(!end_point.is_removable(pass));
        }
    }

    #[test]
    fn test_read_treats_outside_as_background() {
        let mask = FPix::from_data(2, 2, vec![1.0; 4]).unwrap();
        let nb = Neighborhood::read(&mask, 0, 0);
        assert_eq!(
            nb,
            Neighborhood {
                e: true,
                se: true,
                s: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_corner_guards_differ_by_pass() {
        // Elbow: E and S set, SE clear
        let nb = Neighborhood {
            e: true,
            s: true,
            ..Default::default()
        };
        assert!(nb.corner(Pass::A));
        assert!(!nb.corner(Pass::B));
        assert!(!nb.is_removable(Pass::A));
        assert!(nb.is_removable(Pass::B));
    }
}
