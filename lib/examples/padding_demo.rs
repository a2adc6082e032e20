use pseudographics::{Bitmap, BlockSet, RenderOptions, to_pseudographics_with};

fn main() {
    env_logger::init();

    println!("Pseudographics - Edge Padding Demo");
    println!("==================================\n");

    // Sizes that do not divide evenly into the larger cells
    let test_cases = vec![(5, 5), (7, 3), (9, 10), (3, 1)];

    for (width, height) in test_cases {
        // A solid rectangle shows where the padded background starts
        let bitmap = Bitmap::from_fn(width, height, |_, _| true);
        println!("Testing: {}x{} solid bitmap", width, height);

        for set in [BlockSet::Blocks2x2, BlockSet::Blocks2x3, BlockSet::Braille2x4] {
            for invert in [false, true] {
                let options = RenderOptions::new(set).inverted(invert);
                let lines = to_pseudographics_with(&bitmap, &options);
                println!("  {} invert={}:", set, invert);
                for line in lines {
                    println!("    |{}|", line);
                }
            }
        }
        println!();
    }

    println!("Partial cells are padded with background, never cropped.");
}
