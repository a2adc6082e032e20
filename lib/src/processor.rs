use crate::bitmap::Bitmap;
use crate::block_set::BlockSet;
use crate::config::RenderOptions;
use crate::error::Result;
use crate::tiler::{bitmap_to_blocks, grid_size};

/// Converts a black-and-white bitmap into lines of pseudographic characters
///
/// # Arguments
/// * `bitmap` - The bitmap; zero pixels are background, everything else foreground
/// * `block_set` - Which Unicode characters to use
///
/// # Returns
/// Text lines of identical length, one per row of cells. A bitmap with no
/// rows gives no lines; one with no columns gives empty lines.
///
/// # Note
/// If the bitmap size is not a multiple of the cell size, the right and
/// bottom edges are padded with background rather than cropped.
pub fn to_pseudographics(bitmap: &Bitmap, block_set: BlockSet) -> Vec<String> {
    to_pseudographics_with(bitmap, &RenderOptions::new(block_set))
}

/// Converts a bitmap using full render options
pub fn to_pseudographics_with(bitmap: &Bitmap, options: &RenderOptions) -> Vec<String> {
    let spec = options.block_set.spec();
    let (columns, rows) = grid_size(bitmap, spec);
    log::debug!(
        "rendering {}x{} bitmap as {} ({}x{} cells, {} chars per line, invert={})",
        bitmap.width(),
        bitmap.height(),
        options.block_set,
        columns,
        rows,
        columns * spec.columns_per_cell(),
        options.invert
    );

    bitmap_to_blocks(bitmap, options.block_set, options.invert)
}

/// Converts a bitmap with a block set given by name, e.g. `"BRAILLE_2X4"`
///
/// # Returns
/// The text lines, or `InvalidBlockSet` if the name is unknown
pub fn to_pseudographics_named(bitmap: &Bitmap, block_set: &str) -> Result<Vec<String>> {
    let block_set = block_set.parse::<BlockSet>()?;
    Ok(to_pseudographics(bitmap, block_set))
}

/// Join rendered lines into a single newline-separated block of text
pub fn to_text(lines: &[String]) -> String {
    lines.join("\n")
}
