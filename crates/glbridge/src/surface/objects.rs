//! Object lifecycle: create, delete, is and bind for every object kind.
//!
//! Object names are plain `u32`s with `0` standing for null. Deleting or
//! testing the null object never reaches the driver.

use crate::args::Arg;
use crate::args::normalize::{enum_or, handle, uint};
use crate::consts;
use crate::driver::{GlCmd, GlDriver, ObjectKind};
use crate::error::BridgeError;
use crate::shader::ShaderStage;

use super::WebGl2;

impl<D: GlDriver> WebGl2<D> {
    fn create(&mut self, kind: ObjectKind) -> Result<u32, BridgeError> {
        Ok(self.gl.submit(GlCmd::Create(kind))?.name())
    }

    fn delete(&mut self, kind: ObjectKind, object: Arg<'_>) -> Result<(), BridgeError> {
        match handle(object) {
            0 => Ok(()),
            name => self.gl.submit(GlCmd::Delete(kind, name)).map(drop),
        }
    }

    fn is(&mut self, kind: ObjectKind, object: Arg<'_>) -> Result<bool, BridgeError> {
        match handle(object) {
            0 => Ok(false),
            name => Ok(self.gl.submit(GlCmd::IsObject(kind, name))?.bool()),
        }
    }

    /// Core-module variant of [`Self::create`]; an unavailable module was
    /// already logged by the dispatcher.
    fn create_core(&mut self, kind: ObjectKind) -> u32 {
        self.create(kind).unwrap_or(0)
    }

    fn delete_core(&mut self, kind: ObjectKind, object: Arg<'_>) {
        if let Err(err) = self.delete(kind, object) {
            log::warn!("{err}");
        }
    }

    fn is_core(&mut self, kind: ObjectKind, object: Arg<'_>) -> bool {
        self.is(kind, object).unwrap_or(false)
    }

    // ── buffers ──────────────────────────────────────────────────────────

    pub fn create_buffer(&mut self) -> u32 {
        self.create_core(ObjectKind::Buffer)
    }

    pub fn delete_buffer(&mut self, buffer: Arg<'_>) {
        self.delete_core(ObjectKind::Buffer, buffer);
    }

    pub fn is_buffer(&mut self, buffer: Arg<'_>) -> bool {
        self.is_core(ObjectKind::Buffer, buffer)
    }

    /// Defaults: `ARRAY_BUFFER`, null buffer.
    pub fn bind_buffer(&mut self, target: Arg<'_>, buffer: Arg<'_>) {
        self.gl.call(GlCmd::BindBuffer {
            target: enum_or(target, consts::ARRAY_BUFFER),
            buffer: handle(buffer),
        });
    }

    // ── textures ─────────────────────────────────────────────────────────

    pub fn create_texture(&mut self) -> u32 {
        self.create_core(ObjectKind::Texture)
    }

    /// Also forgets the storage records of the texture, so a recycled
    /// name starts out unallocated.
    pub fn delete_texture(&mut self, texture: Arg<'_>) {
        let name = handle(texture);
        if name != 0 {
            self.textures.forget_texture(name);
        }
        self.delete_core(ObjectKind::Texture, texture);
    }

    pub fn is_texture(&mut self, texture: Arg<'_>) -> bool {
        self.is_core(ObjectKind::Texture, texture)
    }

    /// Defaults: `TEXTURE_2D`, null texture.
    pub fn bind_texture(&mut self, target: Arg<'_>, texture: Arg<'_>) {
        let target = enum_or(target, consts::TEXTURE_2D);
        let texture = handle(texture);
        self.textures.bindings_mut().bind(target, texture);
        self.gl.call(GlCmd::BindTexture { target, texture });
    }

    // ── framebuffers and renderbuffers ───────────────────────────────────

    pub fn create_framebuffer(&mut self) -> u32 {
        self.create_core(ObjectKind::Framebuffer)
    }

    pub fn delete_framebuffer(&mut self, framebuffer: Arg<'_>) {
        self.delete_core(ObjectKind::Framebuffer, framebuffer);
    }

    pub fn is_framebuffer(&mut self, framebuffer: Arg<'_>) -> bool {
        self.is_core(ObjectKind::Framebuffer, framebuffer)
    }

    /// Defaults: `FRAMEBUFFER`, default framebuffer.
    pub fn bind_framebuffer(&mut self, target: Arg<'_>, framebuffer: Arg<'_>) {
        self.gl.call(GlCmd::BindFramebuffer {
            target: enum_or(target, consts::FRAMEBUFFER),
            framebuffer: handle(framebuffer),
        });
    }

    pub fn create_renderbuffer(&mut self) -> u32 {
        self.create_core(ObjectKind::Renderbuffer)
    }

    pub fn delete_renderbuffer(&mut self, renderbuffer: Arg<'_>) {
        self.delete_core(ObjectKind::Renderbuffer, renderbuffer);
    }

    pub fn is_renderbuffer(&mut self, renderbuffer: Arg<'_>) -> bool {
        self.is_core(ObjectKind::Renderbuffer, renderbuffer)
    }

    pub fn bind_renderbuffer(&mut self, target: Arg<'_>, renderbuffer: Arg<'_>) {
        self.gl.call(GlCmd::BindRenderbuffer {
            target: enum_or(target, consts::RENDERBUFFER),
            renderbuffer: handle(renderbuffer),
        });
    }

    // ── vertex arrays ────────────────────────────────────────────────────

    pub fn create_vertex_array(&mut self) -> u32 {
        self.create_core(ObjectKind::VertexArray)
    }

    pub fn delete_vertex_array(&mut self, array: Arg<'_>) {
        self.delete_core(ObjectKind::VertexArray, array);
    }

    pub fn is_vertex_array(&mut self, array: Arg<'_>) -> bool {
        self.is_core(ObjectKind::VertexArray, array)
    }

    pub fn bind_vertex_array(&mut self, array: Arg<'_>) {
        self.gl.call(GlCmd::BindVertexArray(handle(array)));
    }

    // ── shaders and programs ─────────────────────────────────────────────

    /// Records the stage of the new shader for later transpilation.
    /// Unknown stage enums still reach the driver, which rejects them.
    pub fn create_shader(&mut self, kind: Arg<'_>) -> u32 {
        let kind = uint(kind, 0);
        let shader = self.gl.call(GlCmd::CreateShader { kind }).name();
        if shader != 0 {
            if let Some(stage) = ShaderStage::from_gl(kind) {
                self.shader_stages.insert(shader, stage);
            }
        }
        shader
    }

    pub fn delete_shader(&mut self, shader: Arg<'_>) {
        self.shader_stages.remove(&handle(shader));
        self.delete_core(ObjectKind::Shader, shader);
    }

    pub fn is_shader(&mut self, shader: Arg<'_>) -> bool {
        self.is_core(ObjectKind::Shader, shader)
    }

    pub fn create_program(&mut self) -> u32 {
        self.create_core(ObjectKind::Program)
    }

    pub fn delete_program(&mut self, program: Arg<'_>) {
        self.delete_core(ObjectKind::Program, program);
    }

    pub fn is_program(&mut self, program: Arg<'_>) -> bool {
        self.is_core(ObjectKind::Program, program)
    }

    pub fn use_program(&mut self, program: Arg<'_>) {
        self.gl.call(GlCmd::UseProgram(handle(program)));
    }

    // ── queries ──────────────────────────────────────────────────────────

    pub fn create_query(&mut self) -> Result<u32, BridgeError> {
        self.create(ObjectKind::Query)
    }

    pub fn delete_query(&mut self, query: Arg<'_>) -> Result<(), BridgeError> {
        self.delete(ObjectKind::Query, query)
    }

    pub fn is_query(&mut self, query: Arg<'_>) -> Result<bool, BridgeError> {
        self.is(ObjectKind::Query, query)
    }

    // ── samplers ─────────────────────────────────────────────────────────

    pub fn create_sampler(&mut self) -> Result<u32, BridgeError> {
        self.create(ObjectKind::Sampler)
    }

    pub fn delete_sampler(&mut self, sampler: Arg<'_>) -> Result<(), BridgeError> {
        self.delete(ObjectKind::Sampler, sampler)
    }

    pub fn is_sampler(&mut self, sampler: Arg<'_>) -> Result<bool, BridgeError> {
        self.is(ObjectKind::Sampler, sampler)
    }

    /// `unit` is a unit index, not a `TEXTURE0 + n` enum.
    pub fn bind_sampler(&mut self, unit: Arg<'_>, sampler: Arg<'_>) -> Result<(), BridgeError> {
        self.gl
            .submit(GlCmd::BindSampler {
                unit: uint(unit, 0),
                sampler: handle(sampler),
            })
            .map(drop)
    }

    // ── transform feedback objects ───────────────────────────────────────

    pub fn create_transform_feedback(&mut self) -> Result<u32, BridgeError> {
        self.create(ObjectKind::TransformFeedback)
    }

    pub fn delete_transform_feedback(&mut self, feedback: Arg<'_>) -> Result<(), BridgeError> {
        self.delete(ObjectKind::TransformFeedback, feedback)
    }

    pub fn is_transform_feedback(&mut self, feedback: Arg<'_>) -> Result<bool, BridgeError> {
        self.is(ObjectKind::TransformFeedback, feedback)
    }

    pub fn bind_transform_feedback(
        &mut self,
        target: Arg<'_>,
        feedback: Arg<'_>,
    ) -> Result<(), BridgeError> {
        self.gl
            .submit(GlCmd::BindTransformFeedback {
                target: enum_or(target, consts::TRANSFORM_FEEDBACK),
                feedback: handle(feedback),
            })
            .map(drop)
    }
}
