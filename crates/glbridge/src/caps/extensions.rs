/// A supported extension and the constants it exposes.
///
/// Extensions that add functions name the bridge entry points implementing
/// them; in WebGL2 those are core calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extension {
    pub name: &'static str,
    pub constants: &'static [(&'static str, u32)],
    pub entry_points: &'static [&'static str],
}

const fn ext(name: &'static str, constants: &'static [(&'static str, u32)]) -> Extension {
    Extension {
        name,
        constants,
        entry_points: &[],
    }
}

static EXTENSIONS: &[Extension] = &[
    ext(
        "WEBGL_debug_renderer_info",
        &[("UNMASKED_VENDOR_WEBGL", 0x9245), ("UNMASKED_RENDERER_WEBGL", 0x9246)],
    ),
    ext(
        "EXT_texture_filter_anisotropic",
        &[("TEXTURE_MAX_ANISOTROPY_EXT", 0x84FE), ("MAX_TEXTURE_MAX_ANISOTROPY_EXT", 0x84FF)],
    ),
    ext(
        "WEBGL_compressed_texture_s3tc",
        &[
            ("COMPRESSED_RGB_S3TC_DXT1_EXT", 0x83F0),
            ("COMPRESSED_RGBA_S3TC_DXT1_EXT", 0x83F1),
            ("COMPRESSED_RGBA_S3TC_DXT3_EXT", 0x83F2),
            ("COMPRESSED_RGBA_S3TC_DXT5_EXT", 0x83F3),
        ],
    ),
    Extension {
        name: "OES_vertex_array_object",
        constants: &[("VERTEX_ARRAY_BINDING_OES", 0x85B5)],
        entry_points: &["createVertexArray", "deleteVertexArray", "isVertexArray", "bindVertexArray"],
    },
    Extension {
        name: "ANGLE_instanced_arrays",
        constants: &[("VERTEX_ATTRIB_ARRAY_DIVISOR_ANGLE", 0x88FE)],
        entry_points: &["drawArraysInstanced", "drawElementsInstanced", "vertexAttribDivisor"],
    },
    ext("EXT_color_buffer_float", &[]),
    ext("EXT_color_buffer_half_float", &[]),
    ext("OES_texture_float", &[]),
    ext("OES_texture_float_linear", &[]),
    ext("OES_texture_half_float", &[]),
    ext("OES_texture_half_float_linear", &[]),
];

/// Looks up an extension by name. Vendor-prefixed anisotropy names resolve
/// to the unprefixed extension.
pub fn extension(name: &str) -> Option<Extension> {
    let name = match name {
        "WEBKIT_EXT_texture_filter_anisotropic" | "MOZ_EXT_texture_filter_anisotropic" => {
            "EXT_texture_filter_anisotropic"
        }
        other => other,
    };
    EXTENSIONS.iter().find(|e| e.name == name).copied()
}

pub fn supported_extensions() -> Vec<&'static str> {
    EXTENSIONS.iter().map(|e| e.name).collect()
}
