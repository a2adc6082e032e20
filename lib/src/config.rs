use crate::block_set::BlockSet;
use crate::error::{PseudographicsError, Result};

/// Configuration for bitmap to text conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Characters used for output, default `Blocks1x2`
    pub block_set: BlockSet,
    /// Swap background and foreground for pixels inside the bitmap, default false
    ///
    /// Cells hanging over the right or bottom edge are still padded with
    /// background, so inverting never adds ink outside the image.
    pub invert: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            block_set: BlockSet::Blocks1x2,
            invert: false,
        }
    }
}

impl RenderOptions {
    pub fn new(block_set: BlockSet) -> Self {
        Self {
            block_set,
            ..Default::default()
        }
    }

    pub fn with_block_set(mut self, block_set: BlockSet) -> Self {
        self.block_set = block_set;
        self
    }

    pub fn inverted(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// Validates the selected block set's lookup table
    pub fn validate(&self) -> Result<()> {
        let spec = self.block_set.spec();
        if !spec.is_consistent() {
            return Err(PseudographicsError::InvalidConfig(format!(
                "{} table has {} glyphs for a {}x{} cell",
                self.block_set,
                spec.glyphs.len(),
                spec.cell_width,
                spec.cell_height
            )));
        }
        Ok(())
    }
}

impl From<BlockSet> for RenderOptions {
    fn from(block_set: BlockSet) -> Self {
        Self::new(block_set)
    }
}
