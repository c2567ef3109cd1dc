//! Fixed-capacity pixel storage.

use crate::types::{BufferError, ChannelOrder};
use heapless::Vec;

/// Per-pixel color bytes, stored channel-interleaved in strip order.
///
/// Pixel `i` occupies bytes `i*3..i*3+3` of [`as_bytes`](Self::as_bytes), already
/// permuted into the strip's [`ChannelOrder`]. Storage is inline: the buffer
/// reserves room for `N` pixels and uses the first `len()` of them. The length is
/// fixed at construction and never changes.
///
/// # Type Parameters
/// * `N` - Maximum number of pixels this buffer can hold
#[derive(Debug, Clone)]
pub struct PixelBuffer<const N: usize> {
    pixels: Vec<[u8; 3], N>,
}

impl<const N: usize> PixelBuffer<N> {
    /// Reserves `pixel_count` zeroed pixels.
    ///
    /// # Errors
    /// * `EmptyStrip` - `pixel_count` is zero
    /// * `Allocation` - `pixel_count` exceeds `N`
    pub fn new(pixel_count: usize) -> Result<Self, BufferError> {
        if pixel_count == 0 {
            return Err(BufferError::EmptyStrip);
        }

        let mut pixels = Vec::new();
        pixels
            .resize(pixel_count, [0; 3])
            .map_err(|_| BufferError::Allocation {
                requested: pixel_count,
                capacity: N,
            })?;

        Ok(Self { pixels })
    }

    /// Writes one pixel, permuting `(r, g, b)` according to `order`.
    ///
    /// Only the three bytes of `index` are touched.
    pub fn set_pixel(
        &mut self,
        index: usize,
        r: u8,
        g: u8,
        b: u8,
        order: ChannelOrder,
    ) -> Result<(), BufferError> {
        let len = self.pixels.len();
        let slot = self
            .pixels
            .get_mut(index)
            .ok_or(BufferError::IndexOutOfRange { index, len })?;
        *slot = order.arrange(r, g, b);
        Ok(())
    }

    /// Writes the same color to every pixel.
    pub fn fill(&mut self, r: u8, g: u8, b: u8, order: ChannelOrder) {
        let stored = order.arrange(r, g, b);
        self.pixels.iter_mut().for_each(|p| *p = stored);
    }

    /// Zeroes every byte.
    pub fn clear(&mut self) {
        self.pixels.iter_mut().for_each(|p| *p = [0; 3]);
    }

    /// Returns the stored bytes of one pixel, in storage order.
    #[inline]
    pub fn pixel(&self, index: usize) -> Option<[u8; 3]> {
        self.pixels.get(index).copied()
    }

    /// Iterates over pixels in strip order, each in storage order.
    pub fn iter(&self) -> core::slice::Iter<'_, [u8; 3]> {
        self.pixels.iter()
    }

    /// Flat view of the buffer, `len() * 3` bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.as_flattened()
    }

    /// Number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Always false for a constructed buffer; present for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Maximum number of pixels (`N`).
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_zeroed() {
        let buffer = PixelBuffer::<8>::new(5).unwrap();
        assert_eq!(buffer.len(), 5);
        assert_eq!(buffer.as_bytes(), &[0u8; 15]);
    }

    #[test]
    fn zero_pixels_rejected() {
        assert_eq!(
            PixelBuffer::<8>::new(0).unwrap_err(),
            BufferError::EmptyStrip
        );
    }

    #[test]
    fn over_capacity_rejected() {
        assert_eq!(
            PixelBuffer::<4>::new(5).unwrap_err(),
            BufferError::Allocation {
                requested: 5,
                capacity: 4
            }
        );
    }

    #[test]
    fn exact_capacity_accepted() {
        let buffer = PixelBuffer::<4>::new(4).unwrap();
        assert_eq!(buffer.len(), buffer.capacity());
    }

    #[test]
    fn set_pixel_writes_only_its_slot() {
        let mut buffer = PixelBuffer::<4>::new(3).unwrap();
        buffer.set_pixel(1, 10, 20, 30, ChannelOrder::Grb).unwrap();
        assert_eq!(buffer.as_bytes(), &[0, 0, 0, 20, 10, 30, 0, 0, 0]);
    }

    #[test]
    fn out_of_range_leaves_buffer_untouched() {
        let mut buffer = PixelBuffer::<4>::new(3).unwrap();
        let err = buffer.set_pixel(3, 1, 1, 1, ChannelOrder::Rgb).unwrap_err();
        assert_eq!(err, BufferError::IndexOutOfRange { index: 3, len: 3 });
        assert_eq!(buffer.as_bytes(), &[0u8; 9]);
    }

    #[test]
    fn clear_after_fill() {
        let mut buffer = PixelBuffer::<4>::new(4).unwrap();
        buffer.fill(1, 2, 3, ChannelOrder::Bgr);
        assert!(buffer.iter().all(|p| *p == [3, 2, 1]));

        buffer.clear();
        assert!(buffer.as_bytes().iter().all(|b| *b == 0));
    }
}
