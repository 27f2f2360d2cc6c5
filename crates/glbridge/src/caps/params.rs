use std::collections::HashMap;

use state::InitCell;

/// Value of a `getParameter` query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    Int(i32),
    Str(&'static str),
    /// Two integers, e.g. `MAX_VIEWPORT_DIMS`.
    Ints([i32; 2]),
    /// Two floats, e.g. `ALIASED_POINT_SIZE_RANGE`.
    Floats([f32; 2]),
}

pub const VENDOR: &str = "LWJGL";
pub const RENDERER: &str = "LWJGL OpenGL Renderer";
pub const VERSION: &str = "WebGL 2.0 (OpenGL ES 3.0 Chromium)";
pub const SHADING_LANGUAGE_VERSION: &str = "WebGL GLSL ES 3.00 (OpenGL ES GLSL ES 3.0 Chromium)";

const MAX_SIZE: i32 = 16384;

static TABLE: InitCell<HashMap<u32, ParamValue>> = InitCell::new();

fn build() -> HashMap<u32, ParamValue> {
    use ParamValue::*;

    HashMap::from([
        // strings
        (0x1F00, Str(VENDOR)),
        (0x1F01, Str(RENDERER)),
        (0x1F02, Str(VERSION)),
        (0x8B8C, Str(SHADING_LANGUAGE_VERSION)),
        (0x9245, Str(VENDOR)),   // UNMASKED_VENDOR_WEBGL
        (0x9246, Str(RENDERER)), // UNMASKED_RENDERER_WEBGL
        // texture limits
        (0x0D33, Int(MAX_SIZE)), // MAX_TEXTURE_SIZE
        (0x851C, Int(MAX_SIZE)), // MAX_CUBE_MAP_TEXTURE_SIZE
        (0x84E8, Int(MAX_SIZE)), // MAX_RENDERBUFFER_SIZE
        (0x8073, Int(2048)),     // MAX_3D_TEXTURE_SIZE
        (0x88FF, Int(2048)),     // MAX_ARRAY_TEXTURE_LAYERS
        (0x8872, Int(32)),       // MAX_TEXTURE_IMAGE_UNITS
        (0x8B4D, Int(32)),       // MAX_COMBINED_TEXTURE_IMAGE_UNITS
        (0x8B4C, Int(32)),       // MAX_VERTEX_TEXTURE_IMAGE_UNITS
        (0x84FF, Int(16)),       // MAX_TEXTURE_MAX_ANISOTROPY_EXT
        // shader limits
        (0x8DFB, Int(1024)), // MAX_VERTEX_UNIFORM_VECTORS
        (0x8DFD, Int(1024)), // MAX_FRAGMENT_UNIFORM_VECTORS
        (0x8DFC, Int(30)),   // MAX_VARYING_VECTORS
        (0x8869, Int(16)),   // MAX_VERTEX_ATTRIBS
        (0x8A2F, Int(24)),   // MAX_UNIFORM_BUFFER_BINDINGS
        // framebuffer limits
        (0x8824, Int(8)), // MAX_DRAW_BUFFERS
        (0x8CDF, Int(8)), // MAX_COLOR_ATTACHMENTS
        (0x8D57, Int(4)), // MAX_SAMPLES
        (0x0D3A, Ints([MAX_SIZE, MAX_SIZE])), // MAX_VIEWPORT_DIMS
        (0x846D, Floats([1.0, 1024.0])),      // ALIASED_POINT_SIZE_RANGE
        (0x846E, Floats([1.0, 1.0])),         // ALIASED_LINE_WIDTH_RANGE
        // default framebuffer
        (0x0D52, Int(8)),  // RED_BITS
        (0x0D53, Int(8)),  // GREEN_BITS
        (0x0D54, Int(8)),  // BLUE_BITS
        (0x0D55, Int(8)),  // ALPHA_BITS
        (0x0D56, Int(24)), // DEPTH_BITS
        (0x0D57, Int(8)),  // STENCIL_BITS
        // bindings, reported as the initial state
        (0x8B8D, Int(0)),      // CURRENT_PROGRAM
        (0x8CA6, Int(0)),      // FRAMEBUFFER_BINDING
        (0x8CA7, Int(0)),      // RENDERBUFFER_BINDING
        (0x8069, Int(0)),      // TEXTURE_BINDING_2D
        (0x84E0, Int(0x84C0)), // ACTIVE_TEXTURE
    ])
}

/// Fixed answer for `pname`; unknown names answer `Int(0)`.
pub fn parameter(pname: u32) -> ParamValue {
    TABLE
        .get_or_init(build)
        .get(&pname)
        .copied()
        .unwrap_or(ParamValue::Int(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_texture_size_is_stable() {
        let first = parameter(0x0D33);
        for _ in 0..10 {
            assert_eq!(parameter(0x0D33), first);
        }
        assert_eq!(first, ParamValue::Int(16384));
    }

    #[test]
    fn identity_strings() {
        assert_eq!(parameter(0x1F00), ParamValue::Str("LWJGL"));
        assert_eq!(parameter(0x1F02), ParamValue::Str("WebGL 2.0 (OpenGL ES 3.0 Chromium)"));
        assert_eq!(parameter(0x9246), ParamValue::Str(RENDERER));
    }

    #[test]
    fn ranges_are_pairs() {
        assert_eq!(parameter(0x0D3A), ParamValue::Ints([16384, 16384]));
        assert_eq!(parameter(0x846D), ParamValue::Floats([1.0, 1024.0]));
    }

    #[test]
    fn unknown_names_are_zero() {
        assert_eq!(parameter(0xDEAD), ParamValue::Int(0));
        assert_eq!(parameter(0), ParamValue::Int(0));
    }
}
