use crate::bitmap::Bitmap;
use crate::block_set::BlockSet;
use crate::lut::BlockSpec;
use rayon::prelude::*;

/// Number of cells needed to cover the bitmap as `(columns, rows)`
///
/// Partial cells at the right and bottom edges count as whole cells.
pub fn grid_size(bitmap: &Bitmap, spec: &BlockSpec) -> (usize, usize) {
    (
        bitmap.width().div_ceil(spec.cell_width),
        bitmap.height().div_ceil(spec.cell_height),
    )
}

/// Build the pattern index of one cell
///
/// # Arguments
/// * `bitmap` - Source bitmap
/// * `spec` - Block set specification (cell size and pixel order)
/// * `cell_x` - Cell column
/// * `cell_y` - Cell row
/// * `invert` - Swap background and foreground for in-bounds pixels
///
/// # Returns
/// Index into `spec.glyphs`. Pixels past the bitmap edge are background.
pub fn cell_pattern(
    bitmap: &Bitmap,
    spec: &BlockSpec,
    cell_x: usize,
    cell_y: usize,
    invert: bool,
) -> usize {
    let origin_x = cell_x * spec.cell_width;
    let origin_y = cell_y * spec.cell_height;
    let mut pattern = 0;

    for local_y in 0..spec.cell_height {
        for local_x in 0..spec.cell_width {
            let x = origin_x + local_x;
            let y = origin_y + local_y;
            if x >= bitmap.width() || y >= bitmap.height() {
                continue;
            }

            if bitmap.get(x, y) != invert {
                let bit = spec.pixel_order[local_y * spec.cell_width + local_x];
                pattern |= 1 << bit;
            }
        }
    }

    pattern
}

/// Render one row of cells into a line of text
pub fn render_row(bitmap: &Bitmap, spec: &BlockSpec, cell_y: usize, invert: bool) -> String {
    let (columns, _) = grid_size(bitmap, spec);
    let mut line = String::with_capacity(columns * spec.columns_per_cell() * 4);

    for cell_x in 0..columns {
        let pattern = cell_pattern(bitmap, spec, cell_x, cell_y, invert);
        debug_assert!(pattern < spec.glyphs.len(), "pattern {pattern} outside table");
        let glyph = spec.glyphs[pattern];
        for _ in 0..spec.columns_per_cell() {
            line.push(glyph);
        }
    }

    line
}

/// Convert a bitmap into lines of glyphs
///
/// Cell rows are independent, so they are rendered in parallel and
/// collected back in order.
///
/// # Returns
/// `ceil(height / cell_height)` lines, each holding
/// `ceil(width / cell_width) * repeat` characters
pub fn bitmap_to_blocks(bitmap: &Bitmap, block_set: BlockSet, invert: bool) -> Vec<String> {
    let spec = block_set.spec();
    let (columns, rows) = grid_size(bitmap, spec);
    log::trace!("{block_set}: {columns}x{rows} cells");

    (0..rows)
        .into_par_iter()
        .map(|cell_y| render_row(bitmap, spec, cell_y, invert))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lut::{BLOCKS_1X2_SPEC, BLOCKS_2X2_SPEC, BRAILLE_2X4_SPEC, FULL_BLOCKS_SPEC};

    #[test]
    fn test_grid_size_rounds_up() {
        let bitmap = Bitmap::new(5, 7);
        assert_eq!(grid_size(&bitmap, &FULL_BLOCKS_SPEC), (5, 7));
        assert_eq!(grid_size(&bitmap, &BLOCKS_1X2_SPEC), (5, 4));
        assert_eq!(grid_size(&bitmap, &BLOCKS_2X2_SPEC), (3, 4));
        assert_eq!(grid_size(&bitmap, &BRAILLE_2X4_SPEC), (3, 2));
    }

    #[test]
    fn test_cell_pattern_row_major() {
        // top-right and bottom-left of a 2x2 cell
        let bitmap = Bitmap::from_rows(&[[0, 1], [1, 0]]).unwrap();
        assert_eq!(cell_pattern(&bitmap, &BLOCKS_2X2_SPEC, 0, 0, false), 0b0110);
    }

    #[test]
    fn test_cell_pattern_braille_order() {
        // Left column, third row is dot 3 (bit 2); right column, first row is dot 4 (bit 3)
        let mut bitmap = Bitmap::new(2, 4);
        bitmap.set(0, 2, true);
        assert_eq!(cell_pattern(&bitmap, &BRAILLE_2X4_SPEC, 0, 0, false), 0b0000_0100);

        let mut bitmap = Bitmap::new(2, 4);
        bitmap.set(1, 0, true);
        assert_eq!(cell_pattern(&bitmap, &BRAILLE_2X4_SPEC, 0, 0, false), 0b0000_1000);

        let mut bitmap = Bitmap::new(2, 4);
        bitmap.set(1, 3, true);
        assert_eq!(cell_pattern(&bitmap, &BRAILLE_2X4_SPEC, 0, 0, false), 0b1000_0000);
    }

    #[test]
    fn test_cell_pattern_partial_cell() {
        // 3 wide: second cell column only has its left pixel in bounds
        let bitmap = Bitmap::from_fn(3, 2, |_, _| true);
        assert_eq!(cell_pattern(&bitmap, &BLOCKS_2X2_SPEC, 1, 0, false), 0b0101);
    }

    #[test]
    fn test_invert_keeps_padding_background() {
        let bitmap = Bitmap::new(3, 2);
        assert_eq!(cell_pattern(&bitmap, &BLOCKS_2X2_SPEC, 0, 0, true), 0b1111);
        assert_eq!(cell_pattern(&bitmap, &BLOCKS_2X2_SPEC, 1, 0, true), 0b0101);
    }

    #[test]
    fn test_render_row() {
        let bitmap = Bitmap::from_rows(&[[1, 0], [1, 1]]).unwrap();
        assert_eq!(render_row(&bitmap, &BLOCKS_1X2_SPEC, 0, false), "█▄");
    }

    #[test]
    fn test_double_blocks_repeat_glyph() {
        let bitmap = Bitmap::from_rows(&[[true, false, true]]).unwrap();
        let lines = bitmap_to_blocks(&bitmap, BlockSet::DoubleBlocks, false);
        assert_eq!(lines, vec!["██  ██"]);
    }

    #[test]
    fn test_bitmap_to_blocks_empty() {
        assert!(bitmap_to_blocks(&Bitmap::new(0, 0), BlockSet::Blocks2x2, false).is_empty());
        assert!(bitmap_to_blocks(&Bitmap::new(4, 0), BlockSet::Blocks2x2, false).is_empty());
        assert_eq!(
            bitmap_to_blocks(&Bitmap::new(0, 3), BlockSet::Blocks2x2, false),
            vec![String::new(), String::new()]
        );
    }

    #[test]
    fn test_bitmap_to_blocks_preserves_row_order() {
        // one foreground pixel per cell row, moving right
        let bitmap = Bitmap::from_fn(4, 8, |x, y| x == y / 2);
        let lines = bitmap_to_blocks(&bitmap, BlockSet::Blocks1x2, false);
        assert_eq!(lines, vec!["█   ", " █  ", "  █ ", "   █"]);
    }
}
