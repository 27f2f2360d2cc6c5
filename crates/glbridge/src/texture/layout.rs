use crate::consts;

use super::storage::Extent;

/// How pixel rows are laid out in client memory, as set by `pixelStorei`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelLayout {
    /// Row start alignment in bytes: 1, 2, 4 or 8.
    pub alignment: i32,
    /// Pixels per row; `0` means the region width.
    pub row_length: i32,
    /// Rows per image; `0` means the region height. Unpack only.
    pub image_height: i32,
    pub skip_pixels: i32,
    pub skip_rows: i32,
    /// Unpack only.
    pub skip_images: i32,
}

impl Default for PixelLayout {
    fn default() -> Self {
        Self {
            alignment: 4,
            row_length: 0,
            image_height: 0,
            skip_pixels: 0,
            skip_rows: 0,
            skip_images: 0,
        }
    }
}

impl PixelLayout {
    /// Bytes of client memory the driver touches for a region of `extent`
    /// with pixels of `bpp` bytes. `None` when the size does not fit in
    /// memory at all.
    pub fn required_bytes(&self, extent: Extent, bpp: usize) -> Option<usize> {
        if extent.width <= 0 || extent.height <= 0 || extent.depth <= 0 {
            return Some(0);
        }
        let dim = |v: i32| usize::try_from(v).ok();
        let (width, height, depth) = (dim(extent.width)?, dim(extent.height)?, dim(extent.depth)?);
        let row_pixels = if self.row_length > 0 { dim(self.row_length)? } else { width };
        let image_rows = if self.image_height > 0 { dim(self.image_height)? } else { height };
        let align = dim(self.alignment.max(1))?;

        let row = row_pixels.checked_mul(bpp)?.checked_next_multiple_of(align)?;
        let image = row.checked_mul(image_rows)?;
        let skipped = image
            .checked_mul(dim(self.skip_images.max(0))?)?
            .checked_add(row.checked_mul(dim(self.skip_rows.max(0))?)?)?
            .checked_add(bpp.checked_mul(dim(self.skip_pixels.max(0))?)?)?;
        image
            .checked_mul(depth - 1)?
            .checked_add(row.checked_mul(height - 1)?)?
            .checked_add(width.checked_mul(bpp)?)?
            .checked_add(skipped)
    }

    /// Whether `available` bytes hold the whole region.
    pub fn covers(&self, extent: Extent, bpp: usize, available: usize) -> bool {
        self.required_bytes(extent, bpp).is_some_and(|needed| needed <= available)
    }
}

/// Pack (read-back) and unpack (upload) layouts of a context.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct PixelStore {
    pub pack: PixelLayout,
    pub unpack: PixelLayout,
}

impl PixelStore {
    /// Mirrors one `pixelStorei` call. Values the driver would reject
    /// leave the layout unchanged.
    pub fn set(&mut self, pname: u32, param: i32) {
        if param < 0 {
            return;
        }
        match pname {
            consts::PACK_ALIGNMENT | consts::UNPACK_ALIGNMENT if !matches!(param, 1 | 2 | 4 | 8) => {}
            consts::PACK_ALIGNMENT => self.pack.alignment = param,
            consts::PACK_ROW_LENGTH => self.pack.row_length = param,
            consts::PACK_SKIP_PIXELS => self.pack.skip_pixels = param,
            consts::PACK_SKIP_ROWS => self.pack.skip_rows = param,
            consts::UNPACK_ALIGNMENT => self.unpack.alignment = param,
            consts::UNPACK_ROW_LENGTH => self.unpack.row_length = param,
            consts::UNPACK_IMAGE_HEIGHT => self.unpack.image_height = param,
            consts::UNPACK_SKIP_PIXELS => self.unpack.skip_pixels = param,
            consts::UNPACK_SKIP_ROWS => self.unpack.skip_rows = param,
            consts::UNPACK_SKIP_IMAGES => self.unpack.skip_images = param,
            _ => {}
        }
    }
}
