use std::fmt;
use std::str::FromStr;

use crate::error::{PseudographicsError, Result};
use crate::lut::{
    BLOCKS_1X2_SPEC, BLOCKS_2X2_SPEC, BLOCKS_2X3_SPEC, BLOCKS_2X4_SPEC, BRAILLE_2X4_SPEC,
    BlockSpec, DOUBLE_BLOCKS_SPEC, FULL_BLOCKS_SPEC,
};

/// Which Unicode characters represent the bitmap pixels
///
/// Each set covers a fixed cell of source pixels per output character.
/// The set of variants is closed; all per-set data lives in [`BlockSpec`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BlockSet {
    /// Space and full block, two characters per pixel.
    /// In most monospaced fonts the pixels look almost square.
    DoubleBlocks,
    /// Space and full block, one character per pixel (pixels look tall).
    FullBlocks,
    /// Half blocks, two vertically stacked pixels per character.
    Blocks1x2,
    /// Quadrant blocks, a 2×2 chunk per character.
    Blocks2x2,
    /// Sextants from 'Symbols for Legacy Computing' (Unicode 13).
    Blocks2x3,
    /// Octants from 'Symbols for Legacy Computing Supplement' (Unicode 16).
    /// Needs very recent fonts.
    Blocks2x4,
    /// Braille patterns, a 2×4 chunk per character.
    /// Dots are usually round with gaps in between.
    Braille2x4,
}

impl BlockSet {
    /// Every block set, in declaration order
    pub const ALL: [BlockSet; 7] = [
        BlockSet::DoubleBlocks,
        BlockSet::FullBlocks,
        BlockSet::Blocks1x2,
        BlockSet::Blocks2x2,
        BlockSet::Blocks2x3,
        BlockSet::Blocks2x4,
        BlockSet::Braille2x4,
    ];

    /// Constant table specification for this set
    pub const fn spec(self) -> &'static BlockSpec {
        match self {
            BlockSet::DoubleBlocks => &DOUBLE_BLOCKS_SPEC,
            BlockSet::FullBlocks => &FULL_BLOCKS_SPEC,
            BlockSet::Blocks1x2 => &BLOCKS_1X2_SPEC,
            BlockSet::Blocks2x2 => &BLOCKS_2X2_SPEC,
            BlockSet::Blocks2x3 => &BLOCKS_2X3_SPEC,
            BlockSet::Blocks2x4 => &BLOCKS_2X4_SPEC,
            BlockSet::Braille2x4 => &BRAILLE_2X4_SPEC,
        }
    }

    /// Cell size in source pixels as `(width, height)`
    pub const fn cell_size(self) -> (usize, usize) {
        let spec = self.spec();
        (spec.cell_width, spec.cell_height)
    }

    /// Number of distinct pixel patterns a cell can hold
    pub const fn pattern_count(self) -> usize {
        self.spec().pattern_count()
    }

    /// Look up the glyph for a pattern index
    ///
    /// # Arguments
    /// * `pattern` - Pattern index built in this set's pixel order
    ///
    /// # Returns
    /// The glyph, or `InvalidPattern` if `pattern` is outside `[0, 2^(w*h))`
    pub fn glyph_for(self, pattern: usize) -> Result<char> {
        self.spec()
            .glyphs
            .get(pattern)
            .copied()
            .ok_or(PseudographicsError::InvalidPattern {
                block_set: self,
                pattern,
                limit: self.pattern_count(),
            })
    }

    /// Canonical upper-case name, e.g. `BLOCKS_2X3`
    pub const fn name(self) -> &'static str {
        match self {
            BlockSet::DoubleBlocks => "DOUBLE_BLOCKS",
            BlockSet::FullBlocks => "FULL_BLOCKS",
            BlockSet::Blocks1x2 => "BLOCKS_1X2",
            BlockSet::Blocks2x2 => "BLOCKS_2X2",
            BlockSet::Blocks2x3 => "BLOCKS_2X3",
            BlockSet::Blocks2x4 => "BLOCKS_2X4",
            BlockSet::Braille2x4 => "BRAILLE_2X4",
        }
    }
}

impl fmt::Display for BlockSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlockSet {
    type Err = PseudographicsError;

    /// Parses a block set name, ignoring case and accepting `-` for `_`
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        BlockSet::ALL
            .into_iter()
            .find(|set| set.name() == normalized)
            .ok_or_else(|| PseudographicsError::InvalidBlockSet(s.to_string()))
    }
}
