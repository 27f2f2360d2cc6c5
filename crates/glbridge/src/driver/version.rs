use std::fmt;

/// Desktop OpenGL version module backing a group of advanced entry points.
///
/// Everything not listed here belongs to the core module that is bound
/// together with the context.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GlVersion {
    /// Query objects.
    Gl15,
    /// Transform feedback recording, integer attributes, unsigned uniforms,
    /// indexed buffer bindings, clearBuffer, blit, multisample renderbuffers.
    Gl30,
    /// Instanced draws, buffer copies, uniform block reflection.
    Gl31,
    /// Fence sync objects.
    Gl32,
    /// Sampler objects and attribute divisors.
    Gl33,
    /// Transform feedback objects.
    Gl40,
    /// Immutable texture storage and internal format queries.
    Gl42,
    /// Framebuffer invalidation.
    Gl43,
}

impl GlVersion {
    pub const ALL: [GlVersion; 8] = [
        GlVersion::Gl15,
        GlVersion::Gl30,
        GlVersion::Gl31,
        GlVersion::Gl32,
        GlVersion::Gl33,
        GlVersion::Gl40,
        GlVersion::Gl42,
        GlVersion::Gl43,
    ];

    /// Dense index, used for registry slots.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn major_minor(self) -> (u32, u32) {
        match self {
            GlVersion::Gl15 => (1, 5),
            GlVersion::Gl30 => (3, 0),
            GlVersion::Gl31 => (3, 1),
            GlVersion::Gl32 => (3, 2),
            GlVersion::Gl33 => (3, 3),
            GlVersion::Gl40 => (4, 0),
            GlVersion::Gl42 => (4, 2),
            GlVersion::Gl43 => (4, 3),
        }
    }
}

impl fmt::Display for GlVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (major, minor) = self.major_minor();
        write!(f, "{major}.{minor}")
    }
}
