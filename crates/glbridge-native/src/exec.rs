//! One arm per [`GlCmd`] variant.
//!
//! The dispatcher has already checked the version module, so every call
//! here targets a resolved pointer.

use std::ffi::c_void;
use std::ptr;

use gl::types::{GLboolean, GLchar, GLenum, GLint, GLsizei, GLsync, GLuint};
use glbridge::driver::{ActiveInfo, GlCmd, GlReply, ObjectKind};
use glbridge::marshal::NativeBuffer;
use glbridge::texture::{Extent, PixelLayout, bytes_per_pixel};

use crate::strings::{CStrings, c_string, read_string};
use crate::sync::SyncTable;

fn boolean(b: bool) -> GLboolean {
    if b { gl::TRUE } else { gl::FALSE }
}

fn truthy(b: GLboolean) -> GlReply {
    GlReply::Bool(b != gl::FALSE)
}

fn data(buf: &NativeBuffer) -> *const c_void {
    buf.as_bytes().as_ptr().cast()
}

fn data_mut(buf: &mut NativeBuffer) -> *mut c_void {
    buf.as_bytes_mut().as_mut_ptr().cast()
}

fn pixels(buf: &Option<NativeBuffer>) -> *const c_void {
    buf.as_ref().map_or(ptr::null(), data)
}

/// Byte offset into the bound buffer, passed where the C API takes a pointer.
fn at(offset: isize) -> *const c_void {
    offset as *const c_void
}

/// Number of whole `width`-element groups in `buf`.
fn groups(buf: &NativeBuffer, width: usize) -> GLsizei {
    (buf.len() / width.max(1)) as GLsizei
}

fn create(kind: ObjectKind) -> GLuint {
    let mut name = 0;
    unsafe {
        match kind {
            ObjectKind::Buffer => gl::GenBuffers(1, &mut name),
            ObjectKind::Texture => gl::GenTextures(1, &mut name),
            ObjectKind::Framebuffer => gl::GenFramebuffers(1, &mut name),
            ObjectKind::Renderbuffer => gl::GenRenderbuffers(1, &mut name),
            ObjectKind::VertexArray => gl::GenVertexArrays(1, &mut name),
            ObjectKind::Query => gl::GenQueries(1, &mut name),
            ObjectKind::Sampler => gl::GenSamplers(1, &mut name),
            ObjectKind::TransformFeedback => gl::GenTransformFeedbacks(1, &mut name),
            ObjectKind::Shader => name = gl::CreateShader(gl::VERTEX_SHADER),
            ObjectKind::Program => name = gl::CreateProgram(),
        }
    }
    name
}

fn delete(kind: ObjectKind, name: GLuint) {
    unsafe {
        match kind {
            ObjectKind::Buffer => gl::DeleteBuffers(1, &name),
            ObjectKind::Texture => gl::DeleteTextures(1, &name),
            ObjectKind::Framebuffer => gl::DeleteFramebuffers(1, &name),
            ObjectKind::Renderbuffer => gl::DeleteRenderbuffers(1, &name),
            ObjectKind::VertexArray => gl::DeleteVertexArrays(1, &name),
            ObjectKind::Query => gl::DeleteQueries(1, &name),
            ObjectKind::Sampler => gl::DeleteSamplers(1, &name),
            ObjectKind::TransformFeedback => gl::DeleteTransformFeedbacks(1, &name),
            ObjectKind::Shader => gl::DeleteShader(name),
            ObjectKind::Program => gl::DeleteProgram(name),
        }
    }
}

fn is(kind: ObjectKind, name: GLuint) -> GLboolean {
    unsafe {
        match kind {
            ObjectKind::Buffer => gl::IsBuffer(name),
            ObjectKind::Texture => gl::IsTexture(name),
            ObjectKind::Framebuffer => gl::IsFramebuffer(name),
            ObjectKind::Renderbuffer => gl::IsRenderbuffer(name),
            ObjectKind::VertexArray => gl::IsVertexArray(name),
            ObjectKind::Query => gl::IsQuery(name),
            ObjectKind::Sampler => gl::IsSampler(name),
            ObjectKind::TransformFeedback => gl::IsTransformFeedback(name),
            ObjectKind::Shader => gl::IsShader(name),
            ObjectKind::Program => gl::IsProgram(name),
        }
    }
}

fn program_int(program: GLuint, pname: GLenum) -> GLint {
    let mut value = 0;
    unsafe { gl::GetProgramiv(program, pname, &mut value) };
    value
}

/// Shared shape of `getActiveAttrib`, `getActiveUniform` and
/// `getTransformFeedbackVarying`. An empty name means the index was invalid.
fn active(
    capacity: GLint,
    fetch: impl FnOnce(GLsizei, *mut GLsizei, *mut GLint, *mut GLenum, *mut GLchar),
) -> GlReply {
    let mut size: GLint = 0;
    let mut ty: GLenum = 0;
    let name = read_string(capacity, |cap, len, buf| fetch(cap, len, &mut size, &mut ty, buf));
    if name.is_empty() {
        return GlReply::Unit;
    }
    GlReply::Active(ActiveInfo { name, size, ty })
}

fn integer(pname: GLenum) -> GLint {
    let mut value = 0;
    unsafe { gl::GetIntegerv(pname, &mut value) };
    value
}

fn pack_layout() -> PixelLayout {
    PixelLayout {
        alignment: integer(gl::PACK_ALIGNMENT),
        row_length: integer(gl::PACK_ROW_LENGTH),
        skip_pixels: integer(gl::PACK_SKIP_PIXELS),
        skip_rows: integer(gl::PACK_SKIP_ROWS),
        ..PixelLayout::default()
    }
}

fn unpack_layout() -> PixelLayout {
    PixelLayout {
        alignment: integer(gl::UNPACK_ALIGNMENT),
        row_length: integer(gl::UNPACK_ROW_LENGTH),
        image_height: integer(gl::UNPACK_IMAGE_HEIGHT),
        skip_pixels: integer(gl::UNPACK_SKIP_PIXELS),
        skip_rows: integer(gl::UNPACK_SKIP_ROWS),
        skip_images: integer(gl::UNPACK_SKIP_IMAGES),
    }
}

/// Whether `buf` holds the whole region under the driver's current layout.
/// Absent pixel data always fits.
fn fits(layout: PixelLayout, extent: Extent, format: GLenum, ty: GLenum, buf: Option<&NativeBuffer>) -> bool {
    let Some(buf) = buf else {
        return true;
    };
    let covered = layout.covers(extent, bytes_per_pixel(format, ty), buf.byte_len());
    if !covered {
        log::warn!("{} bytes of client memory are too few for the transfer, skipped", buf.byte_len());
    }
    covered
}

/// Whether `buf` holds the values a clear of `buffer` reads.
fn clear_fits(buffer: GLenum, buf: &NativeBuffer) -> bool {
    let needed = if buffer == gl::COLOR { 4 } else { 1 };
    let covered = buf.len() >= needed;
    if !covered {
        log::warn!("{} clear values for buffer {buffer:#06x}, skipped", buf.len());
    }
    covered
}

fn sync_call<T>(syncs: &SyncTable<GLsync>, name: u32, f: impl FnOnce(GLsync) -> T) -> Option<T> {
    let found = syncs.get(name);
    if found.is_none() {
        log::debug!("sync {name} is not live");
    }
    found.map(f)
}

pub(crate) fn execute(syncs: &mut SyncTable<GLsync>, cmd: GlCmd) -> GlReply {
    use GlCmd::*;

    unsafe {
        match cmd {
            // ── objects ──────────────────────────────────────────────────
            Create(kind) => return GlReply::Name(create(kind)),
            CreateShader { kind } => return GlReply::Name(gl::CreateShader(kind)),
            Delete(kind, name) => delete(kind, name),
            IsObject(kind, name) => return truthy(is(kind, name)),
            FenceSync { condition, flags } => {
                let sync = gl::FenceSync(condition, flags);
                if sync.is_null() {
                    return GlReply::Unit;
                }
                return GlReply::Name(syncs.insert(sync));
            }
            DeleteSync(name) => {
                if let Some(sync) = syncs.remove(name) {
                    gl::DeleteSync(sync);
                }
            }
            IsSync(name) => {
                let live = sync_call(syncs, name, |s| gl::IsSync(s)).unwrap_or(gl::FALSE);
                return truthy(live);
            }
            ClientWaitSync { sync, flags, timeout } => {
                let status = sync_call(syncs, sync, |s| gl::ClientWaitSync(s, flags, timeout));
                return GlReply::Uint(status.unwrap_or(gl::WAIT_FAILED));
            }
            WaitSync { sync, flags, timeout } => {
                sync_call(syncs, sync, |s| gl::WaitSync(s, flags, timeout));
            }
            GetSyncParameter { sync, pname } => {
                let value = sync_call(syncs, sync, |s| {
                    let mut value = 0;
                    gl::GetSynciv(s, pname, 1, ptr::null_mut(), &mut value);
                    value
                });
                return value.map_or(GlReply::Unit, GlReply::Int);
            }

            // ── bindings ─────────────────────────────────────────────────
            ActiveTexture(unit) => gl::ActiveTexture(unit),
            BindBuffer { target, buffer } => gl::BindBuffer(target, buffer),
            BindBufferBase { target, index, buffer } => gl::BindBufferBase(target, index, buffer),
            BindBufferRange { target, index, buffer, offset, size } => {
                gl::BindBufferRange(target, index, buffer, offset, size)
            }
            BindTexture { target, texture } => gl::BindTexture(target, texture),
            BindFramebuffer { target, framebuffer } => gl::BindFramebuffer(target, framebuffer),
            BindRenderbuffer { target, renderbuffer } => gl::BindRenderbuffer(target, renderbuffer),
            BindVertexArray(array) => gl::BindVertexArray(array),
            BindSampler { unit, sampler } => gl::BindSampler(unit, sampler),
            BindTransformFeedback { target, feedback } => gl::BindTransformFeedback(target, feedback),
            UseProgram(program) => gl::UseProgram(program),

            // ── fixed-function state ─────────────────────────────────────
            Enable(cap) => gl::Enable(cap),
            Disable(cap) => gl::Disable(cap),
            IsEnabled(cap) => return truthy(gl::IsEnabled(cap)),
            BlendColor([r, g, b, a]) => gl::BlendColor(r, g, b, a),
            BlendEquation(mode) => gl::BlendEquation(mode),
            BlendEquationSeparate { rgb, alpha } => gl::BlendEquationSeparate(rgb, alpha),
            BlendFunc { src, dst } => gl::BlendFunc(src, dst),
            BlendFuncSeparate { src_rgb, dst_rgb, src_alpha, dst_alpha } => {
                gl::BlendFuncSeparate(src_rgb, dst_rgb, src_alpha, dst_alpha)
            }
            Clear(mask) => gl::Clear(mask),
            ClearColor([r, g, b, a]) => gl::ClearColor(r, g, b, a),
            ClearDepth(depth) => gl::ClearDepth(depth),
            ClearStencil(s) => gl::ClearStencil(s),
            ColorMask([r, g, b, a]) => gl::ColorMask(boolean(r), boolean(g), boolean(b), boolean(a)),
            CullFace(mode) => gl::CullFace(mode),
            DepthFunc(func) => gl::DepthFunc(func),
            DepthMask(flag) => gl::DepthMask(boolean(flag)),
            DepthRange { near, far } => gl::DepthRange(near, far),
            FrontFace(mode) => gl::FrontFace(mode),
            Hint { target, mode } => gl::Hint(target, mode),
            LineWidth(width) => gl::LineWidth(width),
            PixelStorei { pname, param } => gl::PixelStorei(pname, param),
            PolygonOffset { factor, units } => gl::PolygonOffset(factor, units),
            SampleCoverage { value, invert } => gl::SampleCoverage(value, boolean(invert)),
            Scissor { x, y, width, height } => gl::Scissor(x, y, width, height),
            Viewport { x, y, width, height } => gl::Viewport(x, y, width, height),
            StencilFunc { func, reference, mask } => gl::StencilFunc(func, reference, mask),
            StencilFuncSeparate { face, func, reference, mask } => {
                gl::StencilFuncSeparate(face, func, reference, mask)
            }
            StencilMask(mask) => gl::StencilMask(mask),
            StencilMaskSeparate { face, mask } => gl::StencilMaskSeparate(face, mask),
            StencilOp { fail, zfail, zpass } => gl::StencilOp(fail, zfail, zpass),
            StencilOpSeparate { face, fail, zfail, zpass } => gl::StencilOpSeparate(face, fail, zfail, zpass),
            GetError => return GlReply::Uint(gl::GetError()),
            Flush => gl::Flush(),
            Finish => gl::Finish(),

            // ── buffers ──────────────────────────────────────────────────
            BufferData { target, data: buf, usage } => {
                gl::BufferData(target, buf.byte_len() as isize, data(&buf), usage)
            }
            BufferDataSize { target, size, usage } => gl::BufferData(target, size, ptr::null(), usage),
            BufferSubData { target, offset, data: buf } => {
                gl::BufferSubData(target, offset, buf.byte_len() as isize, data(&buf))
            }
            GetBufferSubData { target, offset, mut dst } => {
                gl::GetBufferSubData(target, offset, dst.byte_len() as isize, data_mut(&mut dst));
                return GlReply::Buffer(dst);
            }
            CopyBufferSubData { read_target, write_target, read_offset, write_offset, size } => {
                gl::CopyBufferSubData(read_target, write_target, read_offset, write_offset, size)
            }

            // ── shaders and programs ─────────────────────────────────────
            ShaderSource { shader, source } => {
                let source = c_string(&source);
                gl::ShaderSource(shader, 1, &source.as_ptr(), ptr::null());
            }
            CompileShader(shader) => gl::CompileShader(shader),
            GetShaderParameter { shader, pname } => {
                let mut value = 0;
                gl::GetShaderiv(shader, pname, &mut value);
                return GlReply::Int(value);
            }
            GetShaderInfoLog(shader) => {
                let mut len = 0;
                gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len);
                let log = read_string(len, |cap, out, buf| gl::GetShaderInfoLog(shader, cap, out, buf));
                return GlReply::Text(log);
            }
            AttachShader { program, shader } => gl::AttachShader(program, shader),
            DetachShader { program, shader } => gl::DetachShader(program, shader),
            LinkProgram(program) => gl::LinkProgram(program),
            ValidateProgram(program) => gl::ValidateProgram(program),
            GetProgramParameter { program, pname } => return GlReply::Int(program_int(program, pname)),
            GetProgramInfoLog(program) => {
                let len = program_int(program, gl::INFO_LOG_LENGTH);
                let log = read_string(len, |cap, out, buf| gl::GetProgramInfoLog(program, cap, out, buf));
                return GlReply::Text(log);
            }
            BindAttribLocation { program, index, name } => {
                gl::BindAttribLocation(program, index, c_string(&name).as_ptr())
            }
            GetAttribLocation { program, name } => {
                return GlReply::Int(gl::GetAttribLocation(program, c_string(&name).as_ptr()));
            }
            GetUniformLocation { program, name } => {
                return GlReply::Int(gl::GetUniformLocation(program, c_string(&name).as_ptr()));
            }
            GetActiveAttrib { program, index } => {
                let capacity = program_int(program, gl::ACTIVE_ATTRIBUTE_MAX_LENGTH);
                return active(capacity, |cap, len, size, ty, name| {
                    gl::GetActiveAttrib(program, index, cap, len, size, ty, name)
                });
            }
            GetActiveUniform { program, index } => {
                let capacity = program_int(program, gl::ACTIVE_UNIFORM_MAX_LENGTH);
                return active(capacity, |cap, len, size, ty, name| {
                    gl::GetActiveUniform(program, index, cap, len, size, ty, name)
                });
            }
            GetFragDataLocation { program, name } => {
                return GlReply::Int(gl::GetFragDataLocation(program, c_string(&name).as_ptr()));
            }

            // ── uniforms ─────────────────────────────────────────────────
            UniformF { location, len, v } => match len {
                1 => gl::Uniform1f(location, v[0]),
                2 => gl::Uniform2f(location, v[0], v[1]),
                3 => gl::Uniform3f(location, v[0], v[1], v[2]),
                _ => gl::Uniform4f(location, v[0], v[1], v[2], v[3]),
            },
            UniformI { location, len, v } => match len {
                1 => gl::Uniform1i(location, v[0]),
                2 => gl::Uniform2i(location, v[0], v[1]),
                3 => gl::Uniform3i(location, v[0], v[1], v[2]),
                _ => gl::Uniform4i(location, v[0], v[1], v[2], v[3]),
            },
            UniformUi { location, len, v } => match len {
                1 => gl::Uniform1ui(location, v[0]),
                2 => gl::Uniform2ui(location, v[0], v[1]),
                3 => gl::Uniform3ui(location, v[0], v[1], v[2]),
                _ => gl::Uniform4ui(location, v[0], v[1], v[2], v[3]),
            },
            UniformFv { location, width, data: buf } => {
                let (count, p) = (groups(&buf, width.into()), data(&buf).cast());
                match width {
                    1 => gl::Uniform1fv(location, count, p),
                    2 => gl::Uniform2fv(location, count, p),
                    3 => gl::Uniform3fv(location, count, p),
                    _ => gl::Uniform4fv(location, count, p),
                }
            }
            UniformIv { location, width, data: buf } => {
                let (count, p) = (groups(&buf, width.into()), data(&buf).cast());
                match width {
                    1 => gl::Uniform1iv(location, count, p),
                    2 => gl::Uniform2iv(location, count, p),
                    3 => gl::Uniform3iv(location, count, p),
                    _ => gl::Uniform4iv(location, count, p),
                }
            }
            UniformUiv { location, width, data: buf } => {
                let (count, p) = (groups(&buf, width.into()), data(&buf).cast());
                match width {
                    1 => gl::Uniform1uiv(location, count, p),
                    2 => gl::Uniform2uiv(location, count, p),
                    3 => gl::Uniform3uiv(location, count, p),
                    _ => gl::Uniform4uiv(location, count, p),
                }
            }
            UniformMatrix { location, cols, rows, transpose, data: buf } => {
                let count = groups(&buf, usize::from(cols) * usize::from(rows));
                let (t, p) = (boolean(transpose), data(&buf).cast());
                match (cols, rows) {
                    (2, 2) => gl::UniformMatrix2fv(location, count, t, p),
                    (3, 3) => gl::UniformMatrix3fv(location, count, t, p),
                    (2, 3) => gl::UniformMatrix2x3fv(location, count, t, p),
                    (3, 2) => gl::UniformMatrix3x2fv(location, count, t, p),
                    (2, 4) => gl::UniformMatrix2x4fv(location, count, t, p),
                    (4, 2) => gl::UniformMatrix4x2fv(location, count, t, p),
                    (3, 4) => gl::UniformMatrix3x4fv(location, count, t, p),
                    (4, 3) => gl::UniformMatrix4x3fv(location, count, t, p),
                    _ => gl::UniformMatrix4fv(location, count, t, p),
                }
            }
            UniformBlockBinding { program, block, binding } => gl::UniformBlockBinding(program, block, binding),
            GetUniformBlockIndex { program, name } => {
                return GlReply::Uint(gl::GetUniformBlockIndex(program, c_string(&name).as_ptr()));
            }
            GetUniformIndices { program, names } => {
                let names = CStrings::new(&names);
                let mut indices = vec![0; names.len() as usize];
                gl::GetUniformIndices(program, names.len(), names.as_ptr(), indices.as_mut_ptr());
                return GlReply::Uints(indices);
            }
            GetActiveUniforms { program, indices, pname } => {
                let mut out = vec![0; indices.len()];
                gl::GetActiveUniformsiv(
                    program,
                    indices.len() as GLsizei,
                    data(&indices).cast(),
                    pname,
                    out.as_mut_ptr(),
                );
                return GlReply::Ints(out);
            }
            GetActiveUniformBlockParameter { program, block, pname } => {
                if pname == gl::UNIFORM_BLOCK_ACTIVE_UNIFORM_INDICES {
                    let mut n = 0;
                    gl::GetActiveUniformBlockiv(program, block, gl::UNIFORM_BLOCK_ACTIVE_UNIFORMS, &mut n);
                    let mut out = vec![0u32; n.max(0) as usize];
                    gl::GetActiveUniformBlockiv(program, block, pname, out.as_mut_ptr().cast());
                    return GlReply::Uints(out);
                }
                let mut value = 0;
                gl::GetActiveUniformBlockiv(program, block, pname, &mut value);
                return GlReply::Int(value);
            }
            GetActiveUniformBlockName { program, block } => {
                let mut len = 0;
                gl::GetActiveUniformBlockiv(program, block, gl::UNIFORM_BLOCK_NAME_LENGTH, &mut len);
                let name = read_string(len, |cap, out, buf| gl::GetActiveUniformBlockName(program, block, cap, out, buf));
                return GlReply::Text(name);
            }

            // ── vertex attributes ────────────────────────────────────────
            EnableVertexAttribArray(index) => gl::EnableVertexAttribArray(index),
            DisableVertexAttribArray(index) => gl::DisableVertexAttribArray(index),
            VertexAttribPointer { index, size, ty, normalized, stride, offset } => {
                gl::VertexAttribPointer(index, size, ty, boolean(normalized), stride, at(offset))
            }
            VertexAttribIPointer { index, size, ty, stride, offset } => {
                gl::VertexAttribIPointer(index, size, ty, stride, at(offset))
            }
            VertexAttribDivisor { index, divisor } => gl::VertexAttribDivisor(index, divisor),
            VertexAttribF { index, v } => gl::VertexAttrib4f(index, v[0], v[1], v[2], v[3]),
            VertexAttribI { index, v } => gl::VertexAttribI4i(index, v[0], v[1], v[2], v[3]),
            VertexAttribUi { index, v } => gl::VertexAttribI4ui(index, v[0], v[1], v[2], v[3]),

            // ── drawing ──────────────────────────────────────────────────
            DrawArrays { mode, first, count } => gl::DrawArrays(mode, first, count),
            DrawElements { mode, count, ty, offset } => gl::DrawElements(mode, count, ty, at(offset)),
            DrawRangeElements { mode, start, end, count, ty, offset } => {
                gl::DrawRangeElements(mode, start, end, count, ty, at(offset))
            }
            DrawArraysInstanced { mode, first, count, instances } => {
                gl::DrawArraysInstanced(mode, first, count, instances)
            }
            DrawElementsInstanced { mode, count, ty, offset, instances } => {
                gl::DrawElementsInstanced(mode, count, ty, at(offset), instances)
            }
            DrawBuffers(list) => gl::DrawBuffers(list.len() as GLsizei, data(&list).cast()),
            ReadBuffer(src) => gl::ReadBuffer(src),
            ReadPixels { x, y, width, height, format, ty, mut dst } => {
                if !fits(pack_layout(), Extent::flat(width, height), format, ty, Some(&dst)) {
                    return GlReply::Unit;
                }
                gl::ReadPixels(x, y, width, height, format, ty, data_mut(&mut dst));
                return GlReply::Buffer(dst);
            }
            ClearBufferFv { buffer, drawbuffer, data: buf } if clear_fits(buffer, &buf) => {
                gl::ClearBufferfv(buffer, drawbuffer, data(&buf).cast())
            }
            ClearBufferIv { buffer, drawbuffer, data: buf } if clear_fits(buffer, &buf) => {
                gl::ClearBufferiv(buffer, drawbuffer, data(&buf).cast())
            }
            ClearBufferUiv { buffer, drawbuffer, data: buf } if clear_fits(buffer, &buf) => {
                gl::ClearBufferuiv(buffer, drawbuffer, data(&buf).cast())
            }
            ClearBufferFv { .. } | ClearBufferIv { .. } | ClearBufferUiv { .. } => {}
            ClearBufferFi { buffer, drawbuffer, depth, stencil } => gl::ClearBufferfi(buffer, drawbuffer, depth, stencil),

            // ── textures ─────────────────────────────────────────────────
            TexImage2D { width, height, format, ty, pixels: ref px, .. }
                if !fits(unpack_layout(), Extent::flat(width, height), format, ty, px.as_ref()) => {}
            TexSubImage2D { width, height, format, ty, pixels: ref px, .. }
                if !fits(unpack_layout(), Extent::flat(width, height), format, ty, Some(px)) => {}
            TexImage3D { width, height, depth, format, ty, pixels: ref px, .. }
                if !fits(unpack_layout(), Extent { width, height, depth }, format, ty, px.as_ref()) => {}
            TexSubImage3D { width, height, depth, format, ty, pixels: ref px, .. }
                if !fits(unpack_layout(), Extent { width, height, depth }, format, ty, Some(px)) => {}
            TexImage2D { target, level, internal_format, width, height, border, format, ty, pixels: px } => {
                gl::TexImage2D(target, level, internal_format, width, height, border, format, ty, pixels(&px))
            }
            TexSubImage2D { target, level, x, y, width, height, format, ty, pixels: px } => {
                gl::TexSubImage2D(target, level, x, y, width, height, format, ty, data(&px))
            }
            TexImage3D { target, level, internal_format, width, height, depth, border, format, ty, pixels: px } => {
                gl::TexImage3D(
                    target,
                    level,
                    internal_format,
                    width,
                    height,
                    depth,
                    border,
                    format,
                    ty,
                    pixels(&px),
                )
            }
            TexSubImage3D { target, level, x, y, z, width, height, depth, format, ty, pixels: px } => {
                gl::TexSubImage3D(target, level, x, y, z, width, height, depth, format, ty, data(&px))
            }
            TexStorage2D { target, levels, internal_format, width, height } => {
                gl::TexStorage2D(target, levels, internal_format, width, height)
            }
            TexStorage3D { target, levels, internal_format, width, height, depth } => {
                gl::TexStorage3D(target, levels, internal_format, width, height, depth)
            }
            CopyTexImage2D { target, level, internal_format, x, y, width, height, border } => {
                gl::CopyTexImage2D(target, level, internal_format, x, y, width, height, border)
            }
            CopyTexSubImage2D { target, level, xoffset, yoffset, x, y, width, height } => {
                gl::CopyTexSubImage2D(target, level, xoffset, yoffset, x, y, width, height)
            }
            CopyTexSubImage3D { target, level, xoffset, yoffset, zoffset, x, y, width, height } => {
                gl::CopyTexSubImage3D(target, level, xoffset, yoffset, zoffset, x, y, width, height)
            }
            CompressedTexImage2D { target, level, internal_format, width, height, border, data: buf } => {
                gl::CompressedTexImage2D(
                    target,
                    level,
                    internal_format,
                    width,
                    height,
                    border,
                    buf.byte_len() as GLsizei,
                    data(&buf),
                )
            }
            CompressedTexSubImage2D { target, level, x, y, width, height, format, data: buf } => {
                gl::CompressedTexSubImage2D(
                    target,
                    level,
                    x,
                    y,
                    width,
                    height,
                    format,
                    buf.byte_len() as GLsizei,
                    data(&buf),
                )
            }
            CompressedTexImage3D { target, level, internal_format, width, height, depth, border, data: buf } => {
                gl::CompressedTexImage3D(
                    target,
                    level,
                    internal_format,
                    width,
                    height,
                    depth,
                    border,
                    buf.byte_len() as GLsizei,
                    data(&buf),
                )
            }
            CompressedTexSubImage3D { target, level, x, y, z, width, height, depth, format, data: buf } => {
                gl::CompressedTexSubImage3D(
                    target,
                    level,
                    x,
                    y,
                    z,
                    width,
                    height,
                    depth,
                    format,
                    buf.byte_len() as GLsizei,
                    data(&buf),
                )
            }
            TexParameterI { target, pname, param } => gl::TexParameteri(target, pname, param),
            TexParameterF { target, pname, param } => gl::TexParameterf(target, pname, param),
            GetTexParameterI { target, pname } => {
                let mut value = 0;
                gl::GetTexParameteriv(target, pname, &mut value);
                return GlReply::Int(value);
            }
            GetTexParameterF { target, pname } => {
                let mut value = 0.0;
                gl::GetTexParameterfv(target, pname, &mut value);
                return GlReply::Float(value);
            }
            GenerateMipmap(target) => gl::GenerateMipmap(target),

            // ── framebuffers and renderbuffers ───────────────────────────
            FramebufferTexture2D { target, attachment, tex_target, texture, level } => {
                gl::FramebufferTexture2D(target, attachment, tex_target, texture, level)
            }
            FramebufferTextureLayer { target, attachment, texture, level, layer } => {
                gl::FramebufferTextureLayer(target, attachment, texture, level, layer)
            }
            FramebufferRenderbuffer { target, attachment, rb_target, renderbuffer } => {
                gl::FramebufferRenderbuffer(target, attachment, rb_target, renderbuffer)
            }
            CheckFramebufferStatus(target) => return GlReply::Uint(gl::CheckFramebufferStatus(target)),
            GetFramebufferAttachmentParameter { target, attachment, pname } => {
                let mut value = 0;
                gl::GetFramebufferAttachmentParameteriv(target, attachment, pname, &mut value);
                return GlReply::Int(value);
            }
            BlitFramebuffer { src, dst, mask, filter } => gl::BlitFramebuffer(
                src[0], src[1], src[2], src[3], dst[0], dst[1], dst[2], dst[3], mask, filter,
            ),
            InvalidateFramebuffer { target, attachments } => {
                gl::InvalidateFramebuffer(target, attachments.len() as GLsizei, data(&attachments).cast())
            }
            InvalidateSubFramebuffer { target, attachments, x, y, width, height } => gl::InvalidateSubFramebuffer(
                target,
                attachments.len() as GLsizei,
                data(&attachments).cast(),
                x,
                y,
                width,
                height,
            ),
            RenderbufferStorage { target, internal_format, width, height } => {
                gl::RenderbufferStorage(target, internal_format, width, height)
            }
            RenderbufferStorageMultisample { target, samples, internal_format, width, height } => {
                gl::RenderbufferStorageMultisample(target, samples, internal_format, width, height)
            }
            GetRenderbufferParameter { target, pname } => {
                let mut value = 0;
                gl::GetRenderbufferParameteriv(target, pname, &mut value);
                return GlReply::Int(value);
            }
            GetInternalformatParameter { target, internal_format, pname } => {
                let mut n = 1;
                if pname == gl::SAMPLES {
                    gl::GetInternalformativ(target, internal_format, gl::NUM_SAMPLE_COUNTS, 1, &mut n);
                }
                let mut out = vec![0; n.max(0) as usize];
                gl::GetInternalformativ(target, internal_format, pname, n.max(0), out.as_mut_ptr());
                return GlReply::Ints(out);
            }

            // ── queries ──────────────────────────────────────────────────
            BeginQuery { target, query } => gl::BeginQuery(target, query),
            EndQuery(target) => gl::EndQuery(target),
            GetQuery { target, pname } => {
                let mut value = 0;
                gl::GetQueryiv(target, pname, &mut value);
                return GlReply::Uint(value as u32);
            }
            GetQueryParameter { query, pname } => {
                let mut value = 0;
                gl::GetQueryObjectuiv(query, pname, &mut value);
                return GlReply::Uint(value);
            }

            // ── samplers ─────────────────────────────────────────────────
            SamplerParameterI { sampler, pname, param } => gl::SamplerParameteri(sampler, pname, param),
            SamplerParameterF { sampler, pname, param } => gl::SamplerParameterf(sampler, pname, param),
            GetSamplerParameterI { sampler, pname } => {
                let mut value = 0;
                gl::GetSamplerParameteriv(sampler, pname, &mut value);
                return GlReply::Int(value);
            }
            GetSamplerParameterF { sampler, pname } => {
                let mut value = 0.0;
                gl::GetSamplerParameterfv(sampler, pname, &mut value);
                return GlReply::Float(value);
            }

            // ── transform feedback ───────────────────────────────────────
            BeginTransformFeedback(mode) => gl::BeginTransformFeedback(mode),
            EndTransformFeedback => gl::EndTransformFeedback(),
            PauseTransformFeedback => gl::PauseTransformFeedback(),
            ResumeTransformFeedback => gl::ResumeTransformFeedback(),
            TransformFeedbackVaryings { program, varyings, buffer_mode } => {
                let varyings = CStrings::new(&varyings);
                gl::TransformFeedbackVaryings(program, varyings.len(), varyings.as_ptr(), buffer_mode);
            }
            GetTransformFeedbackVarying { program, index } => {
                let capacity = program_int(program, gl::TRANSFORM_FEEDBACK_VARYING_MAX_LENGTH);
                return active(capacity, |cap, len, size, ty, name| {
                    gl::GetTransformFeedbackVarying(program, index, cap, len, size, ty, name)
                });
            }

            // ── indexed state ────────────────────────────────────────────
            GetIndexedParameter { target, index } => {
                let wide = matches!(
                    target,
                    gl::UNIFORM_BUFFER_START
                        | gl::UNIFORM_BUFFER_SIZE
                        | gl::TRANSFORM_FEEDBACK_BUFFER_START
                        | gl::TRANSFORM_FEEDBACK_BUFFER_SIZE
                );
                if wide {
                    let mut value = 0i64;
                    gl::GetInteger64i_v(target, index, &mut value);
                    return GlReply::Int(i32::try_from(value).unwrap_or(i32::MAX));
                }
                let mut value = 0;
                gl::GetIntegeri_v(target, index, &mut value);
                return GlReply::Int(value);
            }
        }
    }
    GlReply::Unit
}

#[cfg(test)]
mod tests {
    use glbridge::marshal::{ElementKind, NativeBuffer};

    use super::*;

    #[test]
    fn booleans_map_to_gl_constants() {
        assert_eq!(boolean(true), gl::TRUE);
        assert_eq!(boolean(false), gl::FALSE);
        assert_eq!(truthy(gl::TRUE), GlReply::Bool(true));
        assert_eq!(truthy(0), GlReply::Bool(false));
    }

    #[test]
    fn short_client_memory_is_refused() {
        let layout = PixelLayout::default();
        let four = NativeBuffer::zeroed(ElementKind::Byte, 4);
        assert!(fits(layout, Extent::flat(1, 1), gl::RGBA, gl::UNSIGNED_BYTE, Some(&four)));
        assert!(!fits(layout, Extent::flat(64, 64), gl::RGBA, gl::UNSIGNED_BYTE, Some(&four)));
        assert!(fits(layout, Extent::flat(64, 64), gl::RGBA, gl::UNSIGNED_BYTE, None));
    }

    #[test]
    fn short_clear_values_skip_the_driver() {
        let mut syncs = SyncTable::default();
        let two = NativeBuffer::zeroed(ElementKind::Float, 2);
        assert!(!clear_fits(gl::COLOR, &two));
        assert!(clear_fits(gl::DEPTH, &two));
        // no function is loaded, so reaching the driver would panic
        let cmd = GlCmd::ClearBufferFv { buffer: gl::COLOR, drawbuffer: 0, data: two };
        assert_eq!(execute(&mut syncs, cmd), GlReply::Unit);
    }

    #[test]
    fn groups_drop_partial_vectors() {
        let buf = NativeBuffer::zeroed(ElementKind::Float, 10);
        assert_eq!(groups(&buf, 3), 3);
        assert_eq!(groups(&buf, 4), 2);
        assert_eq!(groups(&buf, 0), 10);
    }

    #[test]
    fn missing_pixels_are_null() {
        assert!(pixels(&None).is_null());
        assert!(!pixels(&Some(NativeBuffer::zeroed(ElementKind::Byte, 4))).is_null());
        assert_eq!(at(64) as usize, 64);
    }

    #[test]
    fn unknown_sync_names_never_reach_the_driver() {
        let mut syncs = SyncTable::default();
        assert_eq!(
            execute(&mut syncs, GlCmd::ClientWaitSync { sync: 9, flags: 0, timeout: 0 }),
            GlReply::Uint(gl::WAIT_FAILED)
        );
        assert_eq!(execute(&mut syncs, GlCmd::IsSync(9)), GlReply::Bool(false));
        assert_eq!(execute(&mut syncs, GlCmd::GetSyncParameter { sync: 9, pname: gl::SYNC_STATUS }), GlReply::Unit);
        assert_eq!(execute(&mut syncs, GlCmd::DeleteSync(9)), GlReply::Unit);
    }
}
