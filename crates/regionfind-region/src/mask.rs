//! Visited mask for one region-finding pass
//!
//! A dense 1-bit grid with the image's dimensions. Each row starts on a
//! 32-bit word boundary and bits are packed MSB to LSB within a word,
//! so pixel 0 of a row is bit 31 of the row's first word.

/// Dense bit grid marking pixels already claimed by a flood fill.
#[derive(Debug, Clone)]
pub struct VisitedMask {
    width: u32,
    /// 32-bit words per row
    wpl: usize,
    data: Vec<u32>,
}

impl VisitedMask {
    /// Create a mask with every bit clear.
    pub fn new(width: u32, height: u32) -> Self {
        let wpl = (width as usize).div_ceil(32);
        Self {
            width,
            wpl,
            data: vec![0; wpl * height as usize],
        }
    }

    #[inline]
    fn line(&self, y: u32) -> &[u32] {
        let start = y as usize * self.wpl;
        &self.data[start..start + self.wpl]
    }

    #[inline]
    fn line_mut(&mut self, y: u32) -> &mut [u32] {
        let start = y as usize * self.wpl;
        &mut self.data[start..start + self.wpl]
    }

    /// Check whether (x, y) is marked.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`; `x` must be below `width`.
    #[inline]
    pub fn is_set(&self, x: u32, y: u32) -> bool {
        debug_assert!(x < self.width);
        get_data_bit(self.line(y), x) != 0
    }

    /// Mark (x, y). Returns `true` if it was previously clear.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32) -> bool {
        debug_assert!(x < self.width);
        let line = self.line_mut(y);
        let was_clear = get_data_bit(line, x) == 0;
        set_data_bit(line, x);
        was_clear
    }

    /// Number of marked pixels.
    pub fn count(&self) -> usize {
        self.data.iter().map(|w| w.count_ones() as usize).sum()
    }
}

#[inline]
fn get_data_bit(line: &[u32], x: u32) -> u32 {
    (line[(x >> 5) as usize] >> (31 - (x & 31))) & 1
}

#[inline]
fn set_data_bit(line: &mut [u32], x: u32) {
    line[(x >> 5) as usize] |= 0x8000_0000 >> (x & 31);
}
