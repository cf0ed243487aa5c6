#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod convolve;
pub mod formula;
pub mod frequency;
pub mod image;
pub mod morphology;
pub mod pointops;

// --- High-level re-exports -------------------------------------------------

// Canonical buffer types used by every engine.
pub use crate::image::{LumaF32, PixelBuffer};

// The most commonly combined operations.
pub use crate::convolve::{Kernel, SobelAxis};
pub use crate::formula::Formula;
pub use crate::morphology::StructElement;
pub use crate::pointops::Histogram;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use raster_lab::prelude::*;
///
/// let img = PixelBuffer::new(16, 16);
/// let neg = raster_lab::pointops::negative(&img);
/// assert_eq!(neg.get_pixel(0, 0), Some([255, 255, 255, 0]));
/// ```
pub mod prelude {
    pub use crate::convolve::{Kernel, SobelAxis};
    pub use crate::formula::Formula;
    pub use crate::image::PixelBuffer;
    pub use crate::morphology::StructElement;
    pub use crate::pointops::Histogram;
}
