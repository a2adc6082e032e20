/// Basic example: Draw a few shapes and print them with every block set
///
/// Run with `RUST_LOG=debug` to see the cell grid chosen for each set.
use image::{GrayImage, Luma};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_circle_mut, draw_line_segment_mut};
use pseudographics::{Bitmap, BlockSet, to_pseudographics, to_text};

fn main() {
    env_logger::init();

    println!("Pseudographics - Basic Example");
    println!("==============================\n");

    // 48x32 keeps every cell size aligned except 2x3
    let width = 48;
    let height = 32;
    let mut img = GrayImage::new(width, height);

    let center = (width as i32 / 2, height as i32 / 2);
    draw_filled_circle_mut(&mut img, center, 9, Luma([255]));
    draw_hollow_circle_mut(&mut img, center, 14, Luma([255]));
    draw_line_segment_mut(
        &mut img,
        (0.0, 0.0),
        ((width - 1) as f32, (height - 1) as f32),
        Luma([255]),
    );

    let bitmap = Bitmap::from(&img);
    println!("Created test bitmap: {}x{}\n", width, height);

    for set in BlockSet::ALL {
        let (cell_width, cell_height) = set.cell_size();
        println!("{} ({}x{} pixels per character)", set, cell_width, cell_height);
        println!("{}\n", to_text(&to_pseudographics(&bitmap, set)));
    }
}
