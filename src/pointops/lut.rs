//! 256-entry lookup table for point transforms.

use crate::image::PixelBuffer;

/// Mapping from every possible 8-bit sample value to its transformed value.
///
/// Built once per operation invocation and discarded afterwards.
#[derive(Clone)]
pub struct Lut([u8; 256]);

impl Lut {
    /// Evaluate `f` at every input value `0..=255`.
    pub fn build(f: impl Fn(u8) -> u8) -> Self {
        let mut table = [0u8; 256];
        for (v, entry) in table.iter_mut().enumerate() {
            *entry = f(v as u8);
        }
        Lut(table)
    }

    #[inline]
    pub fn get(&self, v: u8) -> u8 {
        self.0[v as usize]
    }

    /// Remap the color channels of `src` through this table. Alpha is
    /// copied unmodified.
    pub fn apply(&self, src: &PixelBuffer) -> PixelBuffer {
        self.apply_per_channel(src, self, self)
    }

    /// Remap each color channel through its own table (`self` maps red).
    /// Used by histogram equalization, where the channels are independent.
    pub fn apply_per_channel(&self, src: &PixelBuffer, green: &Lut, blue: &Lut) -> PixelBuffer {
        let mut out = PixelBuffer::new(src.width, src.height);
        for y in 0..src.height {
            let src_row = src.row(y);
            let dst_row = out.row_mut(y);
            for (src_px, dst_px) in src_row.chunks_exact(4).zip(dst_row.chunks_exact_mut(4)) {
                dst_px[0] = self.get(src_px[0]);
                dst_px[1] = green.get(src_px[1]);
                dst_px[2] = blue.get(src_px[2]);
                dst_px[3] = src_px[3];
            }
        }
        out
    }
}

impl std::fmt::Debug for Lut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lut")
            .field("first", &self.0[0])
            .field("last", &self.0[255])
            .finish()
    }
}
