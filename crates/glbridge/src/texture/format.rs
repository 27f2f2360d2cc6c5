use crate::consts::*;
use crate::marshal::ElementKind;

/// Sized internal format for a `format` when the caller gave none.
pub fn default_internal_format(format: u32) -> u32 {
    if format == RGB { RGB8 } else { RGBA8 }
}

/// Internal format and transfer type of an upload.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct UploadFormat {
    pub internal_format: u32,
    pub format: u32,
    pub ty: u32,
}

/// Picks the internal format and transfer type for pixel data of `kind`.
///
/// 16-bit color data is uploaded as half floats into a 16F format, 32-bit
/// float data into a 32F format. Byte data, missing data and packed 16-bit
/// pixels keep `ty` and use the 8-bit sized format of `format`.
pub fn upload_format(format: u32, ty: u32, kind: Option<ElementKind>) -> UploadFormat {
    let color = matches!(format, RED | RG | RGB | RGBA);
    let packed = matches!(ty, UNSIGNED_SHORT_5_6_5 | UNSIGNED_SHORT_4_4_4_4 | UNSIGNED_SHORT_5_5_5_1);
    let (internal_format, ty) = match kind {
        _ if packed => (sized(format, R8, RG8, RGB8, RGBA8), ty),
        Some(ElementKind::Short) if color => (sized(format, R16F, RG16F, RGB16F, RGBA16F), HALF_FLOAT),
        Some(ElementKind::Float) if color => (sized(format, R32F, RG32F, RGB32F, RGBA32F), FLOAT),
        _ if ty == HALF_FLOAT && color => (sized(format, R16F, RG16F, RGB16F, RGBA16F), HALF_FLOAT),
        _ if ty == FLOAT && color => (sized(format, R32F, RG32F, RGB32F, RGBA32F), FLOAT),
        _ if color => (sized(format, R8, RG8, RGB8, RGBA8), ty),
        _ => (unsized_fallback(format, ty), ty),
    };
    UploadFormat {
        internal_format,
        format,
        ty,
    }
}

fn sized(format: u32, r: u32, rg: u32, rgb: u32, rgba: u32) -> u32 {
    match format {
        RED => r,
        RG => rg,
        RGB => rgb,
        _ => rgba,
    }
}

fn unsized_fallback(format: u32, ty: u32) -> u32 {
    match (format, ty) {
        (DEPTH_COMPONENT, UNSIGNED_SHORT) => DEPTH_COMPONENT16,
        (DEPTH_COMPONENT, FLOAT) => DEPTH_COMPONENT32F,
        (DEPTH_COMPONENT, _) => DEPTH_COMPONENT24,
        (DEPTH_STENCIL, FLOAT_32_UNSIGNED_INT_24_8_REV) => DEPTH32F_STENCIL8,
        (DEPTH_STENCIL, _) => DEPTH24_STENCIL8,
        (RED_INTEGER, UNSIGNED_INT) => R32UI,
        (RED_INTEGER, _) => R8UI,
        (RGBA_INTEGER, UNSIGNED_INT) => RGBA32UI,
        (RGBA_INTEGER, _) => RGBA8UI,
        // Luminance and alpha stay unsized; desktop drivers still accept them.
        (other, _) => other,
    }
}

/// Client format and type matching a sized internal format, used when
/// defining storage without data.
pub fn transfer_for(internal_format: u32) -> (u32, u32) {
    match internal_format {
        R8 => (RED, UNSIGNED_BYTE),
        RG8 => (RG, UNSIGNED_BYTE),
        RGB8 | SRGB8 => (RGB, UNSIGNED_BYTE),
        RGBA8 | SRGB8_ALPHA8 => (RGBA, UNSIGNED_BYTE),
        R16F => (RED, HALF_FLOAT),
        RG16F => (RG, HALF_FLOAT),
        RGB16F => (RGB, HALF_FLOAT),
        RGBA16F => (RGBA, HALF_FLOAT),
        R32F => (RED, FLOAT),
        RG32F => (RG, FLOAT),
        RGB32F => (RGB, FLOAT),
        RGBA32F => (RGBA, FLOAT),
        R8UI => (RED_INTEGER, UNSIGNED_BYTE),
        R32UI => (RED_INTEGER, UNSIGNED_INT),
        RGBA8UI => (RGBA_INTEGER, UNSIGNED_BYTE),
        RGBA32UI => (RGBA_INTEGER, UNSIGNED_INT),
        DEPTH_COMPONENT16 => (DEPTH_COMPONENT, UNSIGNED_SHORT),
        DEPTH_COMPONENT24 => (DEPTH_COMPONENT, UNSIGNED_INT),
        DEPTH_COMPONENT32F => (DEPTH_COMPONENT, FLOAT),
        DEPTH24_STENCIL8 => (DEPTH_STENCIL, UNSIGNED_INT_24_8),
        DEPTH32F_STENCIL8 => (DEPTH_STENCIL, FLOAT_32_UNSIGNED_INT_24_8_REV),
        RGB | LUMINANCE | ALPHA | LUMINANCE_ALPHA | RGBA => (internal_format, UNSIGNED_BYTE),
        _ => (RGBA, UNSIGNED_BYTE),
    }
}

/// Size of one pixel of client data.
pub fn bytes_per_pixel(format: u32, ty: u32) -> usize {
    let components = match format {
        RED | ALPHA | LUMINANCE | DEPTH_COMPONENT | RED_INTEGER => 1,
        RG | LUMINANCE_ALPHA | RG_INTEGER | DEPTH_STENCIL => 2,
        RGB | RGB_INTEGER => 3,
        _ => 4,
    };
    match ty {
        UNSIGNED_BYTE | BYTE => components,
        UNSIGNED_SHORT | SHORT | HALF_FLOAT => components * 2,
        UNSIGNED_INT | INT | FLOAT => components * 4,
        UNSIGNED_SHORT_5_6_5 | UNSIGNED_SHORT_4_4_4_4 | UNSIGNED_SHORT_5_5_5_1 => 2,
        UNSIGNED_INT_24_8 | 0x8368 | 0x8C3B | 0x8C3E => 4,
        FLOAT_32_UNSIGNED_INT_24_8_REV => 8,
        _ => components * 4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_float_data_selects_16f_formats() {
        let rgba = upload_format(RGBA, UNSIGNED_BYTE, Some(ElementKind::Short));
        assert_eq!(rgba, UploadFormat { internal_format: RGBA16F, format: RGBA, ty: HALF_FLOAT });
        let rgb = upload_format(RGB, UNSIGNED_BYTE, Some(ElementKind::Short));
        assert_eq!(rgb.internal_format, RGB16F);
    }

    #[test]
    fn byte_data_selects_8_bit_formats() {
        assert_eq!(upload_format(RGB, UNSIGNED_BYTE, Some(ElementKind::Byte)).internal_format, RGB8);
        assert_eq!(upload_format(RGBA, UNSIGNED_BYTE, None).internal_format, RGBA8);
    }

    #[test]
    fn packed_16_bit_pixels_are_not_half_floats() {
        let up = upload_format(RGB, UNSIGNED_SHORT_5_6_5, Some(ElementKind::Short));
        assert_eq!(up, UploadFormat { internal_format: RGB8, format: RGB, ty: UNSIGNED_SHORT_5_6_5 });
    }

    #[test]
    fn depth_uploads_keep_their_type() {
        let up = upload_format(DEPTH_COMPONENT, UNSIGNED_SHORT, Some(ElementKind::Short));
        assert_eq!(up.internal_format, DEPTH_COMPONENT16);
        assert_eq!(up.ty, UNSIGNED_SHORT);
    }

    #[test]
    fn transfer_round_trips_sized_color_formats() {
        for internal in [R8, RG8, RGB8, RGBA8, RGBA16F, RGB32F] {
            let (format, ty) = transfer_for(internal);
            let kind = match ty {
                HALF_FLOAT => Some(ElementKind::Short),
                FLOAT => Some(ElementKind::Float),
                _ => Some(ElementKind::Byte),
            };
            assert_eq!(upload_format(format, ty, kind).internal_format, internal);
        }
    }

    #[test]
    fn pixel_sizes() {
        assert_eq!(bytes_per_pixel(RGBA, UNSIGNED_BYTE), 4);
        assert_eq!(bytes_per_pixel(RGB, HALF_FLOAT), 6);
        assert_eq!(bytes_per_pixel(DEPTH_STENCIL, UNSIGNED_INT_24_8), 4);
        assert_eq!(bytes_per_pixel(RGBA, FLOAT), 16);
    }

    #[test]
    fn default_internal_format_follows_format() {
        assert_eq!(default_internal_format(RGB), RGB8);
        assert_eq!(default_internal_format(RGBA), RGBA8);
        assert_eq!(default_internal_format(0), RGBA8);
    }
}
