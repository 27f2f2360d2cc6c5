use crate::marshal::NativeBuffer;

use super::GlVersion;

/// Object families sharing the create/delete/is call shapes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Buffer,
    Texture,
    Framebuffer,
    Renderbuffer,
    VertexArray,
    Shader,
    Program,
    Query,
    Sampler,
    TransformFeedback,
}

impl ObjectKind {
    /// Version module holding this family's lifecycle calls.
    pub fn module(self) -> Option<GlVersion> {
        match self {
            ObjectKind::Query => Some(GlVersion::Gl15),
            ObjectKind::Sampler => Some(GlVersion::Gl33),
            ObjectKind::TransformFeedback => Some(GlVersion::Gl40),
            ObjectKind::Buffer
            | ObjectKind::Texture
            | ObjectKind::Framebuffer
            | ObjectKind::Renderbuffer
            | ObjectKind::VertexArray
            | ObjectKind::Shader
            | ObjectKind::Program => None,
        }
    }
}

/// One fixed-signature call into the desktop driver.
///
/// Arguments are already normalized; buffers are owned by the command and
/// released once it has been executed. Read-back commands carry a zeroed
/// destination buffer that the driver fills and returns through
/// [`super::GlReply::Buffer`].
#[derive(Debug, Clone, PartialEq)]
pub enum GlCmd {
    // ── objects ──────────────────────────────────────────────────────────
    Create(ObjectKind),
    CreateShader { kind: u32 },
    Delete(ObjectKind, u32),
    IsObject(ObjectKind, u32),
    FenceSync { condition: u32, flags: u32 },
    DeleteSync(u32),
    IsSync(u32),
    ClientWaitSync { sync: u32, flags: u32, timeout: u64 },
    WaitSync { sync: u32, flags: u32, timeout: u64 },
    GetSyncParameter { sync: u32, pname: u32 },

    // ── bindings ─────────────────────────────────────────────────────────
    ActiveTexture(u32),
    BindBuffer { target: u32, buffer: u32 },
    BindBufferBase { target: u32, index: u32, buffer: u32 },
    BindBufferRange { target: u32, index: u32, buffer: u32, offset: isize, size: isize },
    BindTexture { target: u32, texture: u32 },
    BindFramebuffer { target: u32, framebuffer: u32 },
    BindRenderbuffer { target: u32, renderbuffer: u32 },
    BindVertexArray(u32),
    BindSampler { unit: u32, sampler: u32 },
    BindTransformFeedback { target: u32, feedback: u32 },
    UseProgram(u32),

    // ── fixed-function state ─────────────────────────────────────────────
    Enable(u32),
    Disable(u32),
    IsEnabled(u32),
    BlendColor([f32; 4]),
    BlendEquation(u32),
    BlendEquationSeparate { rgb: u32, alpha: u32 },
    BlendFunc { src: u32, dst: u32 },
    BlendFuncSeparate { src_rgb: u32, dst_rgb: u32, src_alpha: u32, dst_alpha: u32 },
    Clear(u32),
    ClearColor([f32; 4]),
    ClearDepth(f64),
    ClearStencil(i32),
    ColorMask([bool; 4]),
    CullFace(u32),
    DepthFunc(u32),
    DepthMask(bool),
    DepthRange { near: f64, far: f64 },
    FrontFace(u32),
    Hint { target: u32, mode: u32 },
    LineWidth(f32),
    PixelStorei { pname: u32, param: i32 },
    PolygonOffset { factor: f32, units: f32 },
    SampleCoverage { value: f32, invert: bool },
    Scissor { x: i32, y: i32, width: i32, height: i32 },
    Viewport { x: i32, y: i32, width: i32, height: i32 },
    StencilFunc { func: u32, reference: i32, mask: u32 },
    StencilFuncSeparate { face: u32, func: u32, reference: i32, mask: u32 },
    StencilMask(u32),
    StencilMaskSeparate { face: u32, mask: u32 },
    StencilOp { fail: u32, zfail: u32, zpass: u32 },
    StencilOpSeparate { face: u32, fail: u32, zfail: u32, zpass: u32 },
    GetError,
    Flush,
    Finish,

    // ── buffers ──────────────────────────────────────────────────────────
    BufferData { target: u32, data: NativeBuffer, usage: u32 },
    BufferDataSize { target: u32, size: isize, usage: u32 },
    BufferSubData { target: u32, offset: isize, data: NativeBuffer },
    GetBufferSubData { target: u32, offset: isize, dst: NativeBuffer },
    CopyBufferSubData { read_target: u32, write_target: u32, read_offset: isize, write_offset: isize, size: isize },

    // ── shaders and programs ─────────────────────────────────────────────
    ShaderSource { shader: u32, source: String },
    CompileShader(u32),
    GetShaderParameter { shader: u32, pname: u32 },
    GetShaderInfoLog(u32),
    AttachShader { program: u32, shader: u32 },
    DetachShader { program: u32, shader: u32 },
    LinkProgram(u32),
    ValidateProgram(u32),
    GetProgramParameter { program: u32, pname: u32 },
    GetProgramInfoLog(u32),
    BindAttribLocation { program: u32, index: u32, name: String },
    GetAttribLocation { program: u32, name: String },
    GetUniformLocation { program: u32, name: String },
    GetActiveAttrib { program: u32, index: u32 },
    GetActiveUniform { program: u32, index: u32 },
    GetFragDataLocation { program: u32, name: String },

    // ── uniforms ─────────────────────────────────────────────────────────
    /// `glUniform{1,2,3,4}f`; `len` components of `v` are used.
    UniformF { location: i32, len: u8, v: [f32; 4] },
    UniformI { location: i32, len: u8, v: [i32; 4] },
    UniformUi { location: i32, len: u8, v: [u32; 4] },
    /// `glUniform{1,2,3,4}fv`; `data` holds whole vectors of `width` components.
    UniformFv { location: i32, width: u8, data: NativeBuffer },
    UniformIv { location: i32, width: u8, data: NativeBuffer },
    UniformUiv { location: i32, width: u8, data: NativeBuffer },
    UniformMatrix { location: i32, cols: u8, rows: u8, transpose: bool, data: NativeBuffer },
    UniformBlockBinding { program: u32, block: u32, binding: u32 },
    GetUniformBlockIndex { program: u32, name: String },
    GetUniformIndices { program: u32, names: Vec<String> },
    GetActiveUniforms { program: u32, indices: NativeBuffer, pname: u32 },
    GetActiveUniformBlockParameter { program: u32, block: u32, pname: u32 },
    GetActiveUniformBlockName { program: u32, block: u32 },

    // ── vertex attributes ────────────────────────────────────────────────
    EnableVertexAttribArray(u32),
    DisableVertexAttribArray(u32),
    VertexAttribPointer { index: u32, size: i32, ty: u32, normalized: bool, stride: i32, offset: isize },
    VertexAttribIPointer { index: u32, size: i32, ty: u32, stride: i32, offset: isize },
    VertexAttribDivisor { index: u32, divisor: u32 },
    VertexAttribF { index: u32, v: [f32; 4] },
    VertexAttribI { index: u32, v: [i32; 4] },
    VertexAttribUi { index: u32, v: [u32; 4] },

    // ── drawing ──────────────────────────────────────────────────────────
    DrawArrays { mode: u32, first: i32, count: i32 },
    DrawElements { mode: u32, count: i32, ty: u32, offset: isize },
    DrawRangeElements { mode: u32, start: u32, end: u32, count: i32, ty: u32, offset: isize },
    DrawArraysInstanced { mode: u32, first: i32, count: i32, instances: i32 },
    DrawElementsInstanced { mode: u32, count: i32, ty: u32, offset: isize, instances: i32 },
    DrawBuffers(NativeBuffer),
    ReadBuffer(u32),
    ReadPixels { x: i32, y: i32, width: i32, height: i32, format: u32, ty: u32, dst: NativeBuffer },
    ClearBufferFv { buffer: u32, drawbuffer: i32, data: NativeBuffer },
    ClearBufferIv { buffer: u32, drawbuffer: i32, data: NativeBuffer },
    ClearBufferUiv { buffer: u32, drawbuffer: i32, data: NativeBuffer },
    ClearBufferFi { buffer: u32, drawbuffer: i32, depth: f32, stencil: i32 },

    // ── textures ─────────────────────────────────────────────────────────
    TexImage2D {
        target: u32,
        level: i32,
        internal_format: i32,
        width: i32,
        height: i32,
        border: i32,
        format: u32,
        ty: u32,
        pixels: Option<NativeBuffer>,
    },
    TexSubImage2D {
        target: u32,
        level: i32,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        format: u32,
        ty: u32,
        pixels: NativeBuffer,
    },
    TexImage3D {
        target: u32,
        level: i32,
        internal_format: i32,
        width: i32,
        height: i32,
        depth: i32,
        border: i32,
        format: u32,
        ty: u32,
        pixels: Option<NativeBuffer>,
    },
    TexSubImage3D {
        target: u32,
        level: i32,
        x: i32,
        y: i32,
        z: i32,
        width: i32,
        height: i32,
        depth: i32,
        format: u32,
        ty: u32,
        pixels: NativeBuffer,
    },
    TexStorage2D { target: u32, levels: i32, internal_format: u32, width: i32, height: i32 },
    TexStorage3D { target: u32, levels: i32, internal_format: u32, width: i32, height: i32, depth: i32 },
    CopyTexImage2D { target: u32, level: i32, internal_format: u32, x: i32, y: i32, width: i32, height: i32, border: i32 },
    CopyTexSubImage2D { target: u32, level: i32, xoffset: i32, yoffset: i32, x: i32, y: i32, width: i32, height: i32 },
    CopyTexSubImage3D {
        target: u32,
        level: i32,
        xoffset: i32,
        yoffset: i32,
        zoffset: i32,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    CompressedTexImage2D { target: u32, level: i32, internal_format: u32, width: i32, height: i32, border: i32, data: NativeBuffer },
    CompressedTexSubImage2D { target: u32, level: i32, x: i32, y: i32, width: i32, height: i32, format: u32, data: NativeBuffer },
    CompressedTexImage3D {
        target: u32,
        level: i32,
        internal_format: u32,
        width: i32,
        height: i32,
        depth: i32,
        border: i32,
        data: NativeBuffer,
    },
    CompressedTexSubImage3D {
        target: u32,
        level: i32,
        x: i32,
        y: i32,
        z: i32,
        width: i32,
        height: i32,
        depth: i32,
        format: u32,
        data: NativeBuffer,
    },
    TexParameterI { target: u32, pname: u32, param: i32 },
    TexParameterF { target: u32, pname: u32, param: f32 },
    GetTexParameterI { target: u32, pname: u32 },
    GetTexParameterF { target: u32, pname: u32 },
    GenerateMipmap(u32),

    // ── framebuffers and renderbuffers ───────────────────────────────────
    FramebufferTexture2D { target: u32, attachment: u32, tex_target: u32, texture: u32, level: i32 },
    FramebufferTextureLayer { target: u32, attachment: u32, texture: u32, level: i32, layer: i32 },
    FramebufferRenderbuffer { target: u32, attachment: u32, rb_target: u32, renderbuffer: u32 },
    CheckFramebufferStatus(u32),
    GetFramebufferAttachmentParameter { target: u32, attachment: u32, pname: u32 },
    BlitFramebuffer { src: [i32; 4], dst: [i32; 4], mask: u32, filter: u32 },
    InvalidateFramebuffer { target: u32, attachments: NativeBuffer },
    InvalidateSubFramebuffer { target: u32, attachments: NativeBuffer, x: i32, y: i32, width: i32, height: i32 },
    RenderbufferStorage { target: u32, internal_format: u32, width: i32, height: i32 },
    RenderbufferStorageMultisample { target: u32, samples: i32, internal_format: u32, width: i32, height: i32 },
    GetRenderbufferParameter { target: u32, pname: u32 },
    GetInternalformatParameter { target: u32, internal_format: u32, pname: u32 },

    // ── queries ──────────────────────────────────────────────────────────
    BeginQuery { target: u32, query: u32 },
    EndQuery(u32),
    GetQuery { target: u32, pname: u32 },
    GetQueryParameter { query: u32, pname: u32 },

    // ── samplers ─────────────────────────────────────────────────────────
    SamplerParameterI { sampler: u32, pname: u32, param: i32 },
    SamplerParameterF { sampler: u32, pname: u32, param: f32 },
    GetSamplerParameterI { sampler: u32, pname: u32 },
    GetSamplerParameterF { sampler: u32, pname: u32 },

    // ── transform feedback ───────────────────────────────────────────────
    BeginTransformFeedback(u32),
    EndTransformFeedback,
    PauseTransformFeedback,
    ResumeTransformFeedback,
    TransformFeedbackVaryings { program: u32, varyings: Vec<String>, buffer_mode: u32 },
    GetTransformFeedbackVarying { program: u32, index: u32 },

    // ── indexed state ────────────────────────────────────────────────────
    GetIndexedParameter { target: u32, index: u32 },
}

impl GlCmd {
    /// Version module the command needs; `None` for the core module.
    pub fn module(&self) -> Option<GlVersion> {
        use GlCmd::*;
        match self {
            Create(kind) | Delete(kind, _) | IsObject(kind, _) => kind.module(),

            BeginQuery { .. } | EndQuery(_) | GetQuery { .. } | GetQueryParameter { .. } => Some(GlVersion::Gl15),

            BindBufferBase { .. }
            | BindBufferRange { .. }
            | UniformUi { .. }
            | UniformUiv { .. }
            | VertexAttribIPointer { .. }
            | VertexAttribI { .. }
            | VertexAttribUi { .. }
            | ClearBufferFv { .. }
            | ClearBufferIv { .. }
            | ClearBufferUiv { .. }
            | ClearBufferFi { .. }
            | FramebufferTextureLayer { .. }
            | BlitFramebuffer { .. }
            | RenderbufferStorageMultisample { .. }
            | GetFragDataLocation { .. }
            | BeginTransformFeedback(_)
            | EndTransformFeedback
            | TransformFeedbackVaryings { .. }
            | GetTransformFeedbackVarying { .. }
            | GetIndexedParameter { .. } => Some(GlVersion::Gl30),

            DrawArraysInstanced { .. }
            | DrawElementsInstanced { .. }
            | CopyBufferSubData { .. }
            | UniformBlockBinding { .. }
            | GetUniformBlockIndex { .. }
            | GetUniformIndices { .. }
            | GetActiveUniforms { .. }
            | GetActiveUniformBlockParameter { .. }
            | GetActiveUniformBlockName { .. } => Some(GlVersion::Gl31),

            FenceSync { .. }
            | DeleteSync(_)
            | IsSync(_)
            | ClientWaitSync { .. }
            | WaitSync { .. }
            | GetSyncParameter { .. } => Some(GlVersion::Gl32),

            BindSampler { .. }
            | SamplerParameterI { .. }
            | SamplerParameterF { .. }
            | GetSamplerParameterI { .. }
            | GetSamplerParameterF { .. }
            | VertexAttribDivisor { .. } => Some(GlVersion::Gl33),

            BindTransformFeedback { .. } | PauseTransformFeedback | ResumeTransformFeedback => Some(GlVersion::Gl40),

            TexStorage2D { .. } | TexStorage3D { .. } | GetInternalformatParameter { .. } => Some(GlVersion::Gl42),

            InvalidateFramebuffer { .. } | InvalidateSubFramebuffer { .. } => Some(GlVersion::Gl43),

            _ => None,
        }
    }

    /// Source-API name of the entry point that issues this command.
    pub fn name(&self) -> &'static str {
        use GlCmd::*;
        match self {
            Create(kind) => create_name(*kind),
            Delete(kind, _) => delete_name(*kind),
            IsObject(kind, _) => is_name(*kind),
            CreateShader { .. } => "createShader",
            FenceSync { .. } => "fenceSync",
            DeleteSync(_) => "deleteSync",
            IsSync(_) => "isSync",
            ClientWaitSync { .. } => "clientWaitSync",
            WaitSync { .. } => "waitSync",
            GetSyncParameter { .. } => "getSyncParameter",
            ActiveTexture(_) => "activeTexture",
            BindBuffer { .. } => "bindBuffer",
            BindBufferBase { .. } => "bindBufferBase",
            BindBufferRange { .. } => "bindBufferRange",
            BindTexture { .. } => "bindTexture",
            BindFramebuffer { .. } => "bindFramebuffer",
            BindRenderbuffer { .. } => "bindRenderbuffer",
            BindVertexArray(_) => "bindVertexArray",
            BindSampler { .. } => "bindSampler",
            BindTransformFeedback { .. } => "bindTransformFeedback",
            UseProgram(_) => "useProgram",
            Enable(_) => "enable",
            Disable(_) => "disable",
            IsEnabled(_) => "isEnabled",
            BlendColor(_) => "blendColor",
            BlendEquation(_) => "blendEquation",
            BlendEquationSeparate { .. } => "blendEquationSeparate",
            BlendFunc { .. } => "blendFunc",
            BlendFuncSeparate { .. } => "blendFuncSeparate",
            Clear(_) => "clear",
            ClearColor(_) => "clearColor",
            ClearDepth(_) => "clearDepth",
            ClearStencil(_) => "clearStencil",
            ColorMask(_) => "colorMask",
            CullFace(_) => "cullFace",
            DepthFunc(_) => "depthFunc",
            DepthMask(_) => "depthMask",
            DepthRange { .. } => "depthRange",
            FrontFace(_) => "frontFace",
            Hint { .. } => "hint",
            LineWidth(_) => "lineWidth",
            PixelStorei { .. } => "pixelStorei",
            PolygonOffset { .. } => "polygonOffset",
            SampleCoverage { .. } => "sampleCoverage",
            Scissor { .. } => "scissor",
            Viewport { .. } => "viewport",
            StencilFunc { .. } => "stencilFunc",
            StencilFuncSeparate { .. } => "stencilFuncSeparate",
            StencilMask(_) => "stencilMask",
            StencilMaskSeparate { .. } => "stencilMaskSeparate",
            StencilOp { .. } => "stencilOp",
            StencilOpSeparate { .. } => "stencilOpSeparate",
            GetError => "getError",
            Flush => "flush",
            Finish => "finish",
            BufferData { .. } | BufferDataSize { .. } => "bufferData",
            BufferSubData { .. } => "bufferSubData",
            GetBufferSubData { .. } => "getBufferSubData",
            CopyBufferSubData { .. } => "copyBufferSubData",
            ShaderSource { .. } => "shaderSource",
            CompileShader(_) => "compileShader",
            GetShaderParameter { .. } => "getShaderParameter",
            GetShaderInfoLog(_) => "getShaderInfoLog",
            AttachShader { .. } => "attachShader",
            DetachShader { .. } => "detachShader",
            LinkProgram(_) => "linkProgram",
            ValidateProgram(_) => "validateProgram",
            GetProgramParameter { .. } => "getProgramParameter",
            GetProgramInfoLog(_) => "getProgramInfoLog",
            BindAttribLocation { .. } => "bindAttribLocation",
            GetAttribLocation { .. } => "getAttribLocation",
            GetUniformLocation { .. } => "getUniformLocation",
            GetActiveAttrib { .. } => "getActiveAttrib",
            GetActiveUniform { .. } => "getActiveUniform",
            GetFragDataLocation { .. } => "getFragDataLocation",
            UniformF { .. } => "uniform[1234]f",
            UniformI { .. } => "uniform[1234]i",
            UniformUi { .. } => "uniform[1234]ui",
            UniformFv { .. } => "uniform[1234]fv",
            UniformIv { .. } => "uniform[1234]iv",
            UniformUiv { .. } => "uniform[1234]uiv",
            UniformMatrix { .. } => "uniformMatrix*fv",
            UniformBlockBinding { .. } => "uniformBlockBinding",
            GetUniformBlockIndex { .. } => "getUniformBlockIndex",
            GetUniformIndices { .. } => "getUniformIndices",
            GetActiveUniforms { .. } => "getActiveUniforms",
            GetActiveUniformBlockParameter { .. } => "getActiveUniformBlockParameter",
            GetActiveUniformBlockName { .. } => "getActiveUniformBlockName",
            EnableVertexAttribArray(_) => "enableVertexAttribArray",
            DisableVertexAttribArray(_) => "disableVertexAttribArray",
            VertexAttribPointer { .. } => "vertexAttribPointer",
            VertexAttribIPointer { .. } => "vertexAttribIPointer",
            VertexAttribDivisor { .. } => "vertexAttribDivisor",
            VertexAttribF { .. } => "vertexAttrib[1234]f",
            VertexAttribI { .. } => "vertexAttribI4i",
            VertexAttribUi { .. } => "vertexAttribI4ui",
            DrawArrays { .. } => "drawArrays",
            DrawElements { .. } => "drawElements",
            DrawRangeElements { .. } => "drawRangeElements",
            DrawArraysInstanced { .. } => "drawArraysInstanced",
            DrawElementsInstanced { .. } => "drawElementsInstanced",
            DrawBuffers(_) => "drawBuffers",
            ReadBuffer(_) => "readBuffer",
            ReadPixels { .. } => "readPixels",
            ClearBufferFv { .. } => "clearBufferfv",
            ClearBufferIv { .. } => "clearBufferiv",
            ClearBufferUiv { .. } => "clearBufferuiv",
            ClearBufferFi { .. } => "clearBufferfi",
            TexImage2D { .. } => "texImage2D",
            TexSubImage2D { .. } => "texSubImage2D",
            TexImage3D { .. } => "texImage3D",
            TexSubImage3D { .. } => "texSubImage3D",
            TexStorage2D { .. } => "texStorage2D",
            TexStorage3D { .. } => "texStorage3D",
            CopyTexImage2D { .. } => "copyTexImage2D",
            CopyTexSubImage2D { .. } => "copyTexSubImage2D",
            CopyTexSubImage3D { .. } => "copyTexSubImage3D",
            CompressedTexImage2D { .. } => "compressedTexImage2D",
            CompressedTexSubImage2D { .. } => "compressedTexSubImage2D",
            CompressedTexImage3D { .. } => "compressedTexImage3D",
            CompressedTexSubImage3D { .. } => "compressedTexSubImage3D",
            TexParameterI { .. } => "texParameteri",
            TexParameterF { .. } => "texParameterf",
            GetTexParameterI { .. } | GetTexParameterF { .. } => "getTexParameter",
            GenerateMipmap(_) => "generateMipmap",
            FramebufferTexture2D { .. } => "framebufferTexture2D",
            FramebufferTextureLayer { .. } => "framebufferTextureLayer",
            FramebufferRenderbuffer { .. } => "framebufferRenderbuffer",
            CheckFramebufferStatus(_) => "checkFramebufferStatus",
            GetFramebufferAttachmentParameter { .. } => "getFramebufferAttachmentParameter",
            BlitFramebuffer { .. } => "blitFramebuffer",
            InvalidateFramebuffer { .. } => "invalidateFramebuffer",
            InvalidateSubFramebuffer { .. } => "invalidateSubFramebuffer",
            RenderbufferStorage { .. } => "renderbufferStorage",
            RenderbufferStorageMultisample { .. } => "renderbufferStorageMultisample",
            GetRenderbufferParameter { .. } => "getRenderbufferParameter",
            GetInternalformatParameter { .. } => "getInternalformatParameter",
            BeginQuery { .. } => "beginQuery",
            EndQuery(_) => "endQuery",
            GetQuery { .. } => "getQuery",
            GetQueryParameter { .. } => "getQueryParameter",
            SamplerParameterI { .. } => "samplerParameteri",
            SamplerParameterF { .. } => "samplerParameterf",
            GetSamplerParameterI { .. } | GetSamplerParameterF { .. } => "getSamplerParameter",
            BeginTransformFeedback(_) => "beginTransformFeedback",
            EndTransformFeedback => "endTransformFeedback",
            PauseTransformFeedback => "pauseTransformFeedback",
            ResumeTransformFeedback => "resumeTransformFeedback",
            TransformFeedbackVaryings { .. } => "transformFeedbackVaryings",
            GetTransformFeedbackVarying { .. } => "getTransformFeedbackVarying",
            GetIndexedParameter { .. } => "getIndexedParameter",
        }
    }
}

macro_rules! object_names {
    ($fn_name:ident, $prefix:literal) => {
        fn $fn_name(kind: ObjectKind) -> &'static str {
            match kind {
                ObjectKind::Buffer => concat!($prefix, "Buffer"),
                ObjectKind::Texture => concat!($prefix, "Texture"),
                ObjectKind::Framebuffer => concat!($prefix, "Framebuffer"),
                ObjectKind::Renderbuffer => concat!($prefix, "Renderbuffer"),
                ObjectKind::VertexArray => concat!($prefix, "VertexArray"),
                ObjectKind::Shader => concat!($prefix, "Shader"),
                ObjectKind::Program => concat!($prefix, "Program"),
                ObjectKind::Query => concat!($prefix, "Query"),
                ObjectKind::Sampler => concat!($prefix, "Sampler"),
                ObjectKind::TransformFeedback => concat!($prefix, "TransformFeedback"),
            }
        }
    };
}

object_names!(create_name, "create");
object_names!(delete_name, "delete");
object_names!(is_name, "is");
