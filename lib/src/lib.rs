//! Pseudographics - black-and-white bitmaps as Unicode text
//!
//! This library splits a bitmap into small cells and replaces each cell with
//! a block element, sextant, octant or Braille character, so that images can
//! be shown in a terminal or a log at more than one pixel per character.
//!
//! # Example
//! ```
//! use pseudographics::{Bitmap, BlockSet, to_pseudographics};
//!
//! let bitmap = Bitmap::from_rows(&[[1, 0], [1, 1]]).unwrap();
//! let lines = to_pseudographics(&bitmap, BlockSet::Blocks1x2);
//! assert_eq!(lines, vec!["█▄"]);
//! ```

pub mod bitmap;
pub mod block_set;
pub mod config;
pub mod error;
pub mod lut;
pub mod processor;
pub mod tiler;

// Re-export main types for convenience
pub use bitmap::{Bitmap, Pixel};
pub use block_set::BlockSet;
pub use config::RenderOptions;
pub use error::{PseudographicsError, Result};
pub use processor::{to_pseudographics, to_pseudographics_named, to_pseudographics_with, to_text};
