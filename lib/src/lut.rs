//! Glyph lookup tables
//!
//! Every block set is a cell of source pixels, an ordering that turns the
//! cell's pixels into a pattern index, and a table with one glyph per pattern.
//! Tables are indexed directly by pattern, so lookup is a plain array access.

/// Constant description of a block set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSpec {
    /// Source pixels covered horizontally by one cell
    pub cell_width: usize,
    /// Source pixels covered vertically by one cell
    pub cell_height: usize,
    /// Bit position of each cell pixel, listed row-major
    ///
    /// Pixel `(dx, dy)` contributes `1 << pixel_order[dy * cell_width + dx]`
    /// to the pattern index. The glyph tables below are laid out in this order.
    pub pixel_order: &'static [u8],
    /// Glyph for every pattern, `2^(cell_width * cell_height)` entries
    pub glyphs: &'static [char],
    /// How many times each glyph is written per cell
    pub repeat: usize,
}

impl BlockSpec {
    /// Number of pixels in one cell
    pub const fn cell_area(&self) -> usize {
        self.cell_width * self.cell_height
    }

    /// Number of distinct patterns, and thus table entries
    pub const fn pattern_count(&self) -> usize {
        1 << self.cell_area()
    }

    /// Output characters produced per cell
    pub const fn columns_per_cell(&self) -> usize {
        self.repeat
    }

    /// Glyph for a cell with no foreground pixels
    pub const fn background(&self) -> char {
        self.glyphs[0]
    }

    /// Glyph for a cell with every pixel set
    pub const fn foreground(&self) -> char {
        self.glyphs[self.pattern_count() - 1]
    }

    /// Check the table against the cell geometry
    ///
    /// The pixel order must be a permutation of `0..cell_area` and the
    /// glyph table must hold exactly one entry per pattern.
    pub fn is_consistent(&self) -> bool {
        let area = self.cell_area();
        if self.cell_width == 0 || self.cell_height == 0 || self.repeat == 0 {
            return false;
        }
        if self.pixel_order.len() != area || self.glyphs.len() != self.pattern_count() {
            return false;
        }

        let mut seen = 0u32;
        for &bit in self.pixel_order {
            if bit as usize >= area || seen & (1 << bit) != 0 {
                return false;
            }
            seen |= 1 << bit;
        }
        true
    }
}

const SPACE: char = ' ';
const FULL_BLOCK: char = '█';

/// Background and foreground for the 1×1 sets
pub const SOLID: [char; 2] = [SPACE, FULL_BLOCK];

/// Half blocks: top pixel is bit 0, bottom pixel is bit 1
pub const HALVES: [char; 4] = [SPACE, '▀', '▄', FULL_BLOCK];

/// Quadrant blocks, bits 0-3 are top-left, top-right, bottom-left, bottom-right
pub const QUADRANTS: [char; 16] = [
    ' ', '▘', '▝', '▀', '▖', '▌', '▞', '▛', '▗', '▚', '▐', '▜', '▄', '▙', '▟', '█',
];

/// Sextants, bits 0-5 run row-major through the 2×3 cell
///
/// The left and right column patterns reuse the half blocks `▌` and `▐`,
/// which is why the legacy computing range has no code point for them.
#[rustfmt::skip]
pub const SEXTANTS: [char; 64] = [
    ' ', '🬀', '🬁', '🬂', '🬃', '🬄', '🬅', '🬆', '🬇', '🬈', '🬉', '🬊', '🬋', '🬌', '🬍', '🬎',
    '🬏', '🬐', '🬑', '🬒', '🬓', '▌', '🬔', '🬕', '🬖', '🬗', '🬘', '🬙', '🬚', '🬛', '🬜', '🬝',
    '🬞', '🬟', '🬠', '🬡', '🬢', '🬣', '🬤', '🬥', '🬦', '🬧', '▐', '🬨', '🬩', '🬪', '🬫', '🬬',
    '🬭', '🬮', '🬯', '🬰', '🬱', '🬲', '🬳', '🬴', '🬵', '🬶', '🬷', '🬸', '🬹', '🬺', '🬻', '█',
];

/// Octants, bits 0-7 run row-major through the 2×4 cell
///
/// Patterns that already exist as block elements (quadrants, halves,
/// eighths) use those characters instead of new octant code points.
#[rustfmt::skip]
pub const OCTANTS: [char; 256] = [
    ' ', '𜺨', '𜺫', '🮂', '𜴀', '▘', '𜴁', '𜴂', '𜴃', '𜴄', '▝', '𜴅', '𜴆', '𜴇', '𜴈', '▀',
    '𜴉', '𜴊', '𜴋', '𜴌', '🯦', '𜴍', '𜴎', '𜴏', '𜴐', '𜴑', '𜴒', '𜴓', '𜴔', '𜴕', '𜴖', '𜴗',
    '𜴘', '𜴙', '𜴚', '𜴛', '𜴜', '𜴝', '𜴞', '𜴟', '🯧', '𜴠', '𜴡', '𜴢', '𜴣', '𜴤', '𜴥', '𜴦',
    '𜴧', '𜴨', '𜴩', '𜴪', '𜴫', '𜴬', '𜴭', '𜴮', '𜴯', '𜴰', '𜴱', '𜴲', '𜴳', '𜴴', '𜴵', '🮅',
    '𜺣', '𜴶', '𜴷', '𜴸', '𜴹', '𜴺', '𜴻', '𜴼', '𜴽', '𜴾', '𜴿', '𜵀', '𜵁', '𜵂', '𜵃', '𜵄',
    '▖', '𜵅', '𜵆', '𜵇', '𜵈', '▌', '𜵉', '𜵊', '𜵋', '𜵌', '▞', '𜵍', '𜵎', '𜵏', '𜵐', '▛',
    '𜵑', '𜵒', '𜵓', '𜵔', '𜵕', '𜵖', '𜵗', '𜵘', '𜵙', '𜵚', '𜵛', '𜵜', '𜵝', '𜵞', '𜵟', '𜵠',
    '𜵡', '𜵢', '𜵣', '𜵤', '𜵥', '𜵦', '𜵧', '𜵨', '𜵩', '𜵪', '𜵫', '𜵬', '𜵭', '𜵮', '𜵯', '𜵰',
    '𜺠', '𜵱', '𜵲', '𜵳', '𜵴', '𜵵', '𜵶', '𜵷', '𜵸', '𜵹', '𜵺', '𜵻', '𜵼', '𜵽', '𜵾', '𜵿',
    '𜶀', '𜶁', '𜶂', '𜶃', '𜶄', '𜶅', '𜶆', '𜶇', '𜶈', '𜶉', '𜶊', '𜶋', '𜶌', '𜶍', '𜶎', '𜶏',
    '▗', '𜶐', '𜶑', '𜶒', '𜶓', '▚', '𜶔', '𜶕', '𜶖', '𜶗', '▐', '𜶘', '𜶙', '𜶚', '𜶛', '▜',
    '𜶜', '𜶝', '𜶞', '𜶟', '𜶠', '𜶡', '𜶢', '𜶣', '𜶤', '𜶥', '𜶦', '𜶧', '𜶨', '𜶩', '𜶪', '𜶫',
    '▂', '𜶬', '𜶭', '𜶮', '𜶯', '𜶰', '𜶱', '𜶲', '𜶳', '𜶴', '𜶵', '𜶶', '𜶷', '𜶸', '𜶹', '𜶺',
    '𜶻', '𜶼', '𜶽', '𜶾', '𜶿', '𜷀', '𜷁', '𜷂', '𜷃', '𜷄', '𜷅', '𜷆', '𜷇', '𜷈', '𜷉', '𜷊',
    '𜷋', '𜷌', '𜷍', '𜷎', '𜷏', '𜷐', '𜷑', '𜷒', '𜷓', '𜷔', '𜷕', '𜷖', '𜷗', '𜷘', '𜷙', '𜷚',
    '▄', '𜷛', '𜷜', '𜷝', '𜷞', '▙', '𜷟', '𜷠', '𜷡', '𜷢', '▟', '𜷣', '▆', '𜷤', '𜷥', '█',
];

const BRAILLE_BASE: u32 = 0x2800;

/// Braille patterns U+2800..U+28FF, indexed by dot bitmask
///
/// Bit `n` is dot `n + 1` in the standard Braille numbering. The empty
/// pattern is the blank Braille cell U+2800, not a space.
pub const BRAILLE: [char; 256] = braille_table();

const fn braille_table() -> [char; 256] {
    let mut table = [SPACE; 256];
    let mut bits = 0;
    while bits < 256 {
        table[bits] = match char::from_u32(BRAILLE_BASE + bits as u32) {
            Some(ch) => ch,
            None => SPACE,
        };
        bits += 1;
    }
    table
}

const ROW_MAJOR: [u8; 8] = [0, 1, 2, 3, 4, 5, 6, 7];

/// Braille dots are numbered down the columns:
/// ```text
/// 1 4      bit 0  bit 3
/// 2 5  ->  bit 1  bit 4
/// 3 6      bit 2  bit 5
/// 7 8      bit 6  bit 7
/// ```
const BRAILLE_ORDER: [u8; 8] = [0, 3, 1, 4, 2, 5, 6, 7];

pub const DOUBLE_BLOCKS_SPEC: BlockSpec = BlockSpec {
    cell_width: 1,
    cell_height: 1,
    pixel_order: &[0],
    glyphs: &SOLID,
    repeat: 2,
};

pub const FULL_BLOCKS_SPEC: BlockSpec = BlockSpec {
    cell_width: 1,
    cell_height: 1,
    pixel_order: &[0],
    glyphs: &SOLID,
    repeat: 1,
};

pub const BLOCKS_1X2_SPEC: BlockSpec = BlockSpec {
    cell_width: 1,
    cell_height: 2,
    pixel_order: &[0, 1],
    glyphs: &HALVES,
    repeat: 1,
};

pub const BLOCKS_2X2_SPEC: BlockSpec = BlockSpec {
    cell_width: 2,
    cell_height: 2,
    pixel_order: &[0, 1, 2, 3],
    glyphs: &QUADRANTS,
    repeat: 1,
};

pub const BLOCKS_2X3_SPEC: BlockSpec = BlockSpec {
    cell_width: 2,
    cell_height: 3,
    pixel_order: &[0, 1, 2, 3, 4, 5],
    glyphs: &SEXTANTS,
    repeat: 1,
};

pub const BLOCKS_2X4_SPEC: BlockSpec = BlockSpec {
    cell_width: 2,
    cell_height: 4,
    pixel_order: &ROW_MAJOR,
    glyphs: &OCTANTS,
    repeat: 1,
};

pub const BRAILLE_2X4_SPEC: BlockSpec = BlockSpec {
    cell_width: 2,
    cell_height: 4,
    pixel_order: &BRAILLE_ORDER,
    glyphs: &BRAILLE,
    repeat: 1,
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ALL_SPECS: [&BlockSpec; 7] = [
        &DOUBLE_BLOCKS_SPEC,
        &FULL_BLOCKS_SPEC,
        &BLOCKS_1X2_SPEC,
        &BLOCKS_2X2_SPEC,
        &BLOCKS_2X3_SPEC,
        &BLOCKS_2X4_SPEC,
        &BRAILLE_2X4_SPEC,
    ];

    #[test]
    fn test_all_specs_consistent() {
        for spec in ALL_SPECS {
            assert!(spec.is_consistent(), "{spec:?}");
        }
    }

    #[test]
    fn test_inconsistent_spec_detected() {
        let duplicate_bit = BlockSpec {
            pixel_order: &[0, 0],
            ..BLOCKS_1X2_SPEC
        };
        assert!(!duplicate_bit.is_consistent());

        let short_table = BlockSpec {
            glyphs: &SOLID,
            ..BLOCKS_1X2_SPEC
        };
        assert!(!short_table.is_consistent());
    }

    #[test]
    fn test_empty_and_full_patterns() {
        for spec in &ALL_SPECS[..6] {
            assert_eq!(spec.background(), ' ');
            assert_eq!(spec.foreground(), '█');
        }
        assert_eq!(BRAILLE_2X4_SPEC.background(), '\u{2800}');
        assert_eq!(BRAILLE_2X4_SPEC.foreground(), '\u{28FF}');
    }

    #[test]
    fn test_glyphs_unique_within_multi_pixel_tables() {
        for table in [&HALVES[..], &QUADRANTS[..], &SEXTANTS[..], &OCTANTS[..], &BRAILLE[..]] {
            let unique: HashSet<char> = table.iter().copied().collect();
            assert_eq!(unique.len(), table.len());
        }
    }

    #[test]
    fn test_quadrant_bits() {
        assert_eq!(QUADRANTS[0b0001], '▘');
        assert_eq!(QUADRANTS[0b0010], '▝');
        assert_eq!(QUADRANTS[0b0100], '▖');
        assert_eq!(QUADRANTS[0b1000], '▗');
        assert_eq!(QUADRANTS[0b0101], '▌');
        assert_eq!(QUADRANTS[0b1010], '▐');
    }

    #[test]
    fn test_sextant_columns_use_half_blocks() {
        assert_eq!(SEXTANTS[0b010101], '▌');
        assert_eq!(SEXTANTS[0b101010], '▐');
        assert_eq!(SEXTANTS[0b000001], '\u{1FB00}');
    }

    #[test]
    fn test_octant_block_elements() {
        assert_eq!(OCTANTS[0b0000_0101], '▘');
        assert_eq!(OCTANTS[0b0000_1111], '▀');
        assert_eq!(OCTANTS[0b1111_0000], '▄');
        assert_eq!(OCTANTS[0b0101_0101], '▌');
        assert_eq!(OCTANTS[0b1010_1010], '▐');
        assert_eq!(OCTANTS[0b1100_0000], '▂');
        assert_eq!(OCTANTS[0b1111_1100], '▆');
    }

    #[test]
    fn test_braille_table_offsets() {
        assert_eq!(BRAILLE[0], '\u{2800}');
        assert_eq!(BRAILLE[1], '\u{2801}');
        assert_eq!(BRAILLE[0x40], '\u{2840}');
        assert_eq!(BRAILLE[255], '\u{28FF}');
    }
}
