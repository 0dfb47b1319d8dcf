//! Structuring Element (SEL) for morphological operations
//!
//! A structuring element defines the neighborhood used in morphological operations.

use crate::{MorphError, MorphResult};

/// Element type in a structuring element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum SelElement {
    /// Don't care - this position is ignored
    #[default]
    DontCare = 0,
    /// Hit - part of the neighborhood
    Hit = 1,
}

/// Structuring Element (SEL)
///
/// Defines the neighborhood pattern for morphological operations.
/// The origin (cx, cy) is the reference point for the operation.
#[derive(Debug, Clone)]
pub struct Sel {
    width: u32,
    height: u32,
    cx: u32,
    cy: u32,
    data: Vec<SelElement>,
}

impl Sel {
    /// Create a new empty structuring element with a centered origin
    pub fn new(width: u32, height: u32) -> MorphResult<Self> {
        if width == 0 || height == 0 {
            return Err(MorphError::InvalidSel(format!(
                "dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        Ok(Sel {
            width,
            height,
            cx: width / 2,
            cy: height / 2,
            data: vec![SelElement::DontCare; (width * height) as usize],
        })
    }

    /// Create a cross (+) structuring element
    ///
    /// `size` must be odd; the center row and column are hits.
    pub fn create_cross(size: u32) -> MorphResult<Self> {
        if size % 2 == 0 {
            return Err(MorphError::InvalidSel(format!(
                "cross size must be odd, got {}",
                size
            )));
        }
        let mut sel = Self::new(size, size)?;
        let c = size / 2;
        for i in 0..size {
            sel.set_element(c, i, SelElement::Hit);
            sel.set_element(i, c, SelElement::Hit);
        }
        Ok(sel)
    }

    /// Get the width
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the origin x coordinate
    #[inline]
    pub fn origin_x(&self) -> u32 {
        self.cx
    }

    /// Get the origin y coordinate
    #[inline]
    pub fn origin_y(&self) -> u32 {
        self.cy
    }

    /// Get an element at (x, y)
    #[inline]
    pub fn get_element(&self, x: u32, y: u32) -> Option<SelElement> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[(y * self.width + x) as usize])
    }

    /// Set an element at (x, y); out-of-range positions are ignored
    #[inline]
    pub fn set_element(&mut self, x: u32, y: u32, elem: SelElement) {
        if x < self.width && y < self.height {
            self.data[(y * self.width + x) as usize] = elem;
        }
    }

    /// Count the number of hit elements
    pub fn hit_count(&self) -> usize {
        self.data.iter().filter(|&&e| e == SelElement::Hit).count()
    }

    /// Iterate over hit positions relative to origin
    pub fn hit_offsets(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let cx = self.cx as i32;
        let cy = self.cy as i32;
        let width = self.width;

        self.data
            .iter()
            .enumerate()
            .filter_map(move |(idx, &elem)| {
                if elem == SelElement::Hit {
                    let x = (idx as u32 % width) as i32;
                    let y = (idx as u32 / width) as i32;
                    Some((x - cx, y - cy))
                } else {
                    None
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_cross() {
        let sel = Sel::create_cross(3).unwrap();
        assert_eq!(sel.hit_count(), 5);
        let mut offsets: Vec<_> = sel.hit_offsets().collect();
        offsets.sort();
        assert_eq!(offsets, vec![(-1, 0), (0, -1), (0, 0), (0, 1), (1, 0)]);
        assert!(Sel::create_cross(4).is_err());
    }

    #[test]
    fn test_cross_layout() {
        let sel = Sel::create_cross(5).unwrap();
        assert_eq!((sel.width(), sel.height()), (5, 5));
        assert_eq!((sel.origin_x(), sel.origin_y()), (2, 2));
        assert_eq!(sel.get_element(2, 0), Some(SelElement::Hit));
        assert_eq!(sel.get_element(0, 2), Some(SelElement::Hit));
        assert_eq!(sel.get_element(1, 1), Some(SelElement::DontCare));
        assert_eq!(sel.get_element(5, 0), None);
    }
}
