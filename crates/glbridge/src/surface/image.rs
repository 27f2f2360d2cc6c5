use std::borrow::Cow;

/// Edge length of one placeholder checkerboard cell, in pixels.
const CELL: u32 = 32;
const CELL_A: [u8; 4] = [255, 0, 0, 255];
const CELL_B: [u8; 4] = [0, 0, 255, 255];

/// A decoded image handed to the image-source texture uploads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageSource<'a> {
    pub width: u32,
    pub height: u32,
    /// Tightly packed RGBA8 rows. `None` while the image is not decoded yet.
    pub pixels: Option<&'a [u8]>,
}

impl<'a> ImageSource<'a> {
    pub fn new(width: u32, height: u32, pixels: &'a [u8]) -> Self {
        Self {
            width,
            height,
            pixels: Some(pixels),
        }
    }

    /// An image of known size whose pixels are not available.
    pub fn pending(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: None,
        }
    }

    fn byte_len(&self) -> usize {
        self.width as usize * self.height as usize * 4
    }

    /// Pixels to upload.
    ///
    /// Missing or truncated data is replaced by a red and blue checkerboard
    /// so the texture is visibly wrong instead of reading out of bounds.
    pub fn rgba(&self) -> Cow<'a, [u8]> {
        let len = self.byte_len();
        match self.pixels {
            Some(pixels) if pixels.len() >= len => Cow::Borrowed(&pixels[..len]),
            Some(pixels) => {
                log::warn!(
                    "image source {}x{} has {} of {len} bytes; uploading a placeholder",
                    self.width,
                    self.height,
                    pixels.len()
                );
                Cow::Owned(checkerboard(self.width, self.height))
            }
            None => Cow::Owned(checkerboard(self.width, self.height)),
        }
    }
}

fn checkerboard(width: u32, height: u32) -> Vec<u8> {
    let mut out = Vec::with_capacity(width as usize * height as usize * 4);
    for y in 0..height {
        for x in 0..width {
            let cell = if (x / CELL + y / CELL) % 2 == 0 { CELL_A } else { CELL_B };
            out.extend_from_slice(&cell);
        }
    }
    out
}
