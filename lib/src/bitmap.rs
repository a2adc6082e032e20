use image::GrayImage;

use crate::error::{PseudographicsError, Result};

/// A value that can be read as a background or foreground pixel
///
/// Zero is background and anything else is foreground. For floats this means
/// `-0.0` is background while NaN is foreground.
pub trait Pixel {
    fn is_foreground(&self) -> bool;
}

impl Pixel for bool {
    fn is_foreground(&self) -> bool {
        *self
    }
}

macro_rules! impl_pixel_for_int {
    ($($t:ty),*) => {
        $(impl Pixel for $t {
            fn is_foreground(&self) -> bool {
                *self != 0
            }
        })*
    };
}

impl_pixel_for_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Pixel for f32 {
    fn is_foreground(&self) -> bool {
        *self != 0.0
    }
}

impl Pixel for f64 {
    fn is_foreground(&self) -> bool {
        *self != 0.0
    }
}

/// Black-and-white bitmap, stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bitmap {
    width: usize,
    height: usize,
    pixels: Vec<bool>,
}

impl Bitmap {
    /// Create a bitmap with every pixel set to background
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![false; width * height],
        }
    }

    /// Create a bitmap by evaluating `f(x, y)` for every pixel
    pub fn from_fn(width: usize, height: usize, f: impl Fn(usize, usize) -> bool) -> Self {
        let pixels = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| f(x, y))
            .collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Build a bitmap from rows of pixel values
    ///
    /// # Arguments
    /// * `rows` - Rows of equal length, top to bottom
    ///
    /// # Returns
    /// The bitmap, or `RaggedRows` naming the first row whose length differs
    /// from the first row's
    pub fn from_rows<P, R>(rows: &[R]) -> Result<Self>
    where
        P: Pixel,
        R: AsRef<[P]>,
    {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let mut pixels = Vec::with_capacity(width * rows.len());

        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(PseudographicsError::RaggedRows {
                    row: index,
                    expected: width,
                    found: row.len(),
                });
            }
            pixels.extend(row.iter().map(|p| p.is_foreground()));
        }

        Ok(Self {
            width,
            height: rows.len(),
            pixels,
        })
    }

    /// Build a bitmap from an 8-bit grayscale image
    ///
    /// Only zero-valued pixels are background; no thresholding is applied.
    pub fn from_luma(image: &GrayImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width: width as usize,
            height: height as usize,
            pixels: image.pixels().map(|p| p[0].is_foreground()).collect(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)` in pixels
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Read a pixel, treating anything outside the bitmap as background
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.pixels[y * self.width + x]
    }

    /// Set a pixel
    ///
    /// # Panics
    /// Panics if `(x, y)` is outside the bitmap.
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} bitmap",
            self.width,
            self.height
        );
        self.pixels[y * self.width + x] = value;
    }

    /// Copy of this bitmap grown to `width` x `height`, new pixels background
    ///
    /// Dimensions smaller than the current ones are kept as they are.
    pub fn padded(&self, width: usize, height: usize) -> Self {
        let width = width.max(self.width);
        let height = height.max(self.height);
        Self::from_fn(width, height, |x, y| self.get(x, y))
    }

    /// Iterate over rows of pixels
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        // chunks_exact panics on a zero chunk size; a zero-width bitmap has no pixels anyway
        self.pixels.chunks_exact(self.width.max(1))
    }
}

impl From<&GrayImage> for Bitmap {
    fn from(image: &GrayImage) -> Self {
        Bitmap::from_luma(image)
    }
}
