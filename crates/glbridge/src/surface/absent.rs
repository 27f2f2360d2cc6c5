//! Every entry point called with each argument missing.

use crate::args::{Arg, NumericSeqMut};
use crate::consts;
use crate::driver::GlCmd;
use crate::driver::recording::RecordingDriver;
use crate::error::BridgeError;

use super::{ImageSource, WebGl2};
use super::testing::{calls, context, driver};

const NONE: Arg<'static> = Arg::Absent;

// ── fixed-function state ─────────────────────────────────────────────────

#[test]
fn state_setters_restore_initial_values() {
    let mut gl = context();
    gl.active_texture(NONE);
    gl.blend_color(NONE, NONE, NONE, NONE);
    gl.blend_equation(NONE);
    gl.blend_equation_separate(NONE, NONE);
    gl.blend_func(NONE, NONE);
    gl.clear_depth(NONE);
    gl.color_mask(NONE, NONE, NONE, NONE);
    gl.depth_mask(NONE);
    gl.cull_face(NONE);
    gl.front_face(NONE);
    gl.depth_func(NONE);
    gl.depth_range(NONE, NONE);
    gl.hint(NONE, NONE);
    gl.line_width(NONE);
    gl.sample_coverage(NONE, NONE);
    gl.stencil_func(NONE, NONE, NONE);
    gl.stencil_mask(NONE);
    gl.stencil_op(NONE, NONE, NONE);
    gl.pixel_storei(NONE, NONE);

    assert_eq!(
        calls(&gl),
        &[
            GlCmd::ActiveTexture(consts::TEXTURE0),
            GlCmd::BlendColor([0.0; 4]),
            GlCmd::BlendEquation(consts::FUNC_ADD),
            GlCmd::BlendEquationSeparate { rgb: consts::FUNC_ADD, alpha: consts::FUNC_ADD },
            GlCmd::BlendFunc { src: consts::ONE, dst: consts::ZERO },
            GlCmd::ClearDepth(1.0),
            GlCmd::ColorMask([true; 4]),
            GlCmd::DepthMask(true),
            GlCmd::CullFace(consts::BACK),
            GlCmd::FrontFace(consts::CCW),
            GlCmd::DepthFunc(consts::LESS),
            GlCmd::DepthRange { near: 0.0, far: 1.0 },
            GlCmd::Hint { target: 0, mode: consts::DONT_CARE },
            GlCmd::LineWidth(1.0),
            GlCmd::SampleCoverage { value: 1.0, invert: false },
            GlCmd::StencilFunc { func: consts::ALWAYS, reference: 0, mask: u32::MAX },
            GlCmd::StencilMask(u32::MAX),
            GlCmd::StencilOp { fail: consts::KEEP, zfail: consts::KEEP, zpass: consts::KEEP },
            GlCmd::PixelStorei { pname: 0, param: 0 },
        ]
    );
}

#[test]
fn attribute_and_draw_defaults() {
    let mut gl = context();
    gl.vertex_attrib_pointer(NONE, NONE, NONE, NONE, NONE, NONE);
    gl.draw_arrays(NONE, NONE, NONE);
    gl.draw_elements(NONE, NONE, NONE, NONE);
    gl.read_buffer(NONE);
    gl.clear_bufferfi(NONE, NONE, NONE, NONE).unwrap();

    assert_eq!(
        calls(&gl),
        &[
            GlCmd::VertexAttribPointer {
                index: 0,
                size: 4,
                ty: consts::FLOAT,
                normalized: false,
                stride: 0,
                offset: 0,
            },
            GlCmd::DrawArrays { mode: consts::POINTS, first: 0, count: 0 },
            GlCmd::DrawElements { mode: consts::POINTS, count: 0, ty: consts::UNSIGNED_SHORT, offset: 0 },
            GlCmd::ReadBuffer(consts::BACK),
            GlCmd::ClearBufferFi { buffer: consts::DEPTH_STENCIL, drawbuffer: 0, depth: 1.0, stencil: 0 },
        ]
    );
}

#[test]
fn texture_defaults() {
    let mut gl = context();
    gl.tex_storage_2d(NONE, NONE, NONE, NONE, NONE).unwrap();
    gl.tex_storage_3d(NONE, NONE, NONE, NONE, NONE, NONE).unwrap();

    assert_eq!(
        calls(&gl),
        &[
            GlCmd::TexStorage2D {
                target: consts::TEXTURE_2D,
                levels: 1,
                internal_format: consts::RGBA8,
                width: 0,
                height: 0,
            },
            GlCmd::TexStorage3D {
                target: consts::TEXTURE_3D,
                levels: 1,
                internal_format: consts::RGBA8,
                width: 0,
                height: 0,
                depth: 0,
            },
        ]
    );
}

// ── full sweep ───────────────────────────────────────────────────────────

/// Calls every entry point once with nothing but missing arguments. Gated
/// calls return their results for the caller to check.
fn sweep(gl: &mut WebGl2<RecordingDriver>) -> Vec<Result<(), BridgeError>> {
    let mut empty_bytes = [0u8; 0];
    let image = ImageSource::pending(1, 1);
    let mut results = Vec::new();

    // state
    gl.active_texture(NONE);
    gl.enable(NONE);
    gl.disable(NONE);
    gl.is_enabled(NONE);
    gl.blend_color(NONE, NONE, NONE, NONE);
    gl.blend_equation(NONE);
    gl.blend_equation_separate(NONE, NONE);
    gl.blend_func(NONE, NONE);
    gl.blend_func_separate(NONE, NONE, NONE, NONE);
    gl.clear(NONE);
    gl.clear_color(NONE, NONE, NONE, NONE);
    gl.clear_depth(NONE);
    gl.clear_stencil(NONE);
    gl.color_mask(NONE, NONE, NONE, NONE);
    gl.depth_mask(NONE);
    gl.cull_face(NONE);
    gl.front_face(NONE);
    gl.depth_func(NONE);
    gl.depth_range(NONE, NONE);
    gl.hint(NONE, NONE);
    gl.line_width(NONE);
    gl.pixel_storei(NONE, NONE);
    gl.polygon_offset(NONE, NONE);
    gl.sample_coverage(NONE, NONE);
    gl.scissor(NONE, NONE, NONE, NONE);
    gl.viewport(NONE, NONE, NONE, NONE);
    gl.stencil_func(NONE, NONE, NONE);
    gl.stencil_func_separate(NONE, NONE, NONE, NONE);
    gl.stencil_mask(NONE);
    gl.stencil_mask_separate(NONE, NONE);
    gl.stencil_op(NONE, NONE, NONE);
    gl.stencil_op_separate(NONE, NONE, NONE, NONE);
    gl.get_error();
    gl.flush();
    gl.finish();

    // objects
    gl.create_buffer();
    gl.create_texture();
    gl.create_framebuffer();
    gl.create_renderbuffer();
    gl.create_vertex_array();
    gl.create_program();
    results.push(gl.create_query().map(drop));
    results.push(gl.create_sampler().map(drop));
    results.push(gl.create_transform_feedback().map(drop));
    gl.delete_buffer(NONE);
    gl.is_buffer(NONE);
    gl.bind_buffer(NONE, NONE);
    gl.delete_texture(NONE);
    gl.is_texture(NONE);
    gl.bind_texture(NONE, NONE);
    gl.delete_framebuffer(NONE);
    gl.is_framebuffer(NONE);
    gl.bind_framebuffer(NONE, NONE);
    gl.delete_renderbuffer(NONE);
    gl.is_renderbuffer(NONE);
    gl.bind_renderbuffer(NONE, NONE);
    gl.delete_vertex_array(NONE);
    gl.is_vertex_array(NONE);
    gl.bind_vertex_array(NONE);
    gl.create_shader(NONE);
    gl.delete_shader(NONE);
    gl.is_shader(NONE);
    gl.delete_program(NONE);
    gl.is_program(NONE);
    gl.use_program(NONE);
    results.push(gl.delete_query(NONE));
    results.push(gl.is_query(NONE).map(drop));
    results.push(gl.delete_sampler(NONE));
    results.push(gl.is_sampler(NONE).map(drop));
    results.push(gl.bind_sampler(NONE, NONE));
    results.push(gl.delete_transform_feedback(NONE));
    results.push(gl.is_transform_feedback(NONE).map(drop));
    results.push(gl.bind_transform_feedback(NONE, NONE));

    // attributes
    gl.enable_vertex_attrib_array(NONE);
    gl.disable_vertex_attrib_array(NONE);
    gl.vertex_attrib_pointer(NONE, NONE, NONE, NONE, NONE, NONE);
    results.push(gl.vertex_attrib_i_pointer(NONE, NONE, NONE, NONE, NONE));
    results.push(gl.vertex_attrib_divisor(NONE, NONE));
    gl.vertex_attrib1f(NONE, NONE);
    gl.vertex_attrib2f(NONE, NONE, NONE);
    gl.vertex_attrib3f(NONE, NONE, NONE, NONE);
    gl.vertex_attrib4f(NONE, NONE, NONE, NONE, NONE);
    gl.vertex_attrib1fv(NONE, NONE);
    gl.vertex_attrib2fv(NONE, NONE);
    gl.vertex_attrib3fv(NONE, NONE);
    gl.vertex_attrib4fv(NONE, NONE);
    results.push(gl.vertex_attrib_i4i(NONE, NONE, NONE, NONE, NONE));
    results.push(gl.vertex_attrib_i4ui(NONE, NONE, NONE, NONE, NONE));
    results.push(gl.vertex_attrib_i4iv(NONE, NONE));
    results.push(gl.vertex_attrib_i4uiv(NONE, NONE));

    // buffers
    gl.buffer_data(NONE, NONE, NONE);
    gl.buffer_sub_data(NONE, NONE, NONE);
    gl.get_buffer_sub_data(NONE, NONE, &mut NumericSeqMut::from(&mut empty_bytes[..]));
    results.push(gl.copy_buffer_sub_data(NONE, NONE, NONE, NONE, NONE));
    results.push(gl.bind_buffer_base(NONE, NONE, NONE));
    results.push(gl.bind_buffer_range(NONE, NONE, NONE, NONE, NONE));

    // drawing and read-back
    gl.draw_arrays(NONE, NONE, NONE);
    gl.draw_elements(NONE, NONE, NONE, NONE);
    gl.draw_range_elements(NONE, NONE, NONE, NONE, NONE, NONE);
    results.push(gl.draw_arrays_instanced(NONE, NONE, NONE, NONE));
    results.push(gl.draw_elements_instanced(NONE, NONE, NONE, NONE, NONE));
    gl.draw_buffers(NONE);
    gl.read_buffer(NONE);
    gl.read_pixels(NONE, NONE, NONE, NONE, NONE, NONE, &mut NumericSeqMut::from(&mut empty_bytes[..]));
    results.push(gl.clear_bufferfv(NONE, NONE, NONE));
    results.push(gl.clear_bufferiv(NONE, NONE, NONE));
    results.push(gl.clear_bufferuiv(NONE, NONE, NONE));
    results.push(gl.clear_bufferfi(NONE, NONE, NONE, NONE));

    // textures
    gl.tex_image_2d(NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE);
    gl.tex_image_2d_source(NONE, NONE, NONE, NONE, &image);
    gl.tex_image_3d(NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE);
    gl.copy_tex_image_2d(NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE);
    gl.compressed_tex_image_2d(NONE, NONE, NONE, NONE, NONE, NONE, NONE);
    gl.compressed_tex_image_3d(NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE);
    results.push(gl.tex_storage_2d(NONE, NONE, NONE, NONE, NONE));
    results.push(gl.tex_storage_3d(NONE, NONE, NONE, NONE, NONE, NONE));
    gl.tex_sub_image_2d(NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE);
    gl.tex_sub_image_2d_source(NONE, NONE, NONE, NONE, &image);
    gl.tex_sub_image_3d(NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE);
    gl.copy_tex_sub_image_2d(NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE);
    gl.copy_tex_sub_image_3d(NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE);
    gl.compressed_tex_sub_image_2d(NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE);
    gl.compressed_tex_sub_image_3d(NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE);
    gl.tex_parameteri(NONE, NONE, NONE);
    gl.tex_parameterf(NONE, NONE, NONE);
    gl.get_tex_parameter(NONE, NONE);
    gl.generate_mipmap(NONE);

    // capabilities
    gl.get_parameter(NONE);
    gl.get_extension(NONE);
    gl.get_supported_extensions();
    gl.get_context_attributes();
    gl.get_shader_precision_format(NONE, NONE);

    // framebuffers
    gl.framebuffer_texture_2d(NONE, NONE, NONE, NONE, NONE);
    results.push(gl.framebuffer_texture_layer(NONE, NONE, NONE, NONE, NONE));
    gl.framebuffer_renderbuffer(NONE, NONE, NONE, NONE);
    gl.check_framebuffer_status(NONE);
    gl.get_framebuffer_attachment_parameter(NONE, NONE, NONE);
    results.push(gl.blit_framebuffer(NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE));
    results.push(gl.invalidate_framebuffer(NONE, NONE));
    results.push(gl.invalidate_sub_framebuffer(NONE, NONE, NONE, NONE, NONE, NONE));
    gl.renderbuffer_storage(NONE, NONE, NONE, NONE);
    results.push(gl.renderbuffer_storage_multisample(NONE, NONE, NONE, NONE, NONE));
    gl.get_renderbuffer_parameter(NONE, NONE);
    results.push(gl.get_internalformat_parameter(NONE, NONE, NONE).map(drop));

    // programs
    gl.shader_source(NONE, NONE);
    gl.compile_shader(NONE);
    gl.get_shader_parameter(NONE, NONE);
    gl.get_shader_info_log(NONE);
    gl.attach_shader(NONE, NONE);
    gl.detach_shader(NONE, NONE);
    gl.link_program(NONE);
    gl.validate_program(NONE);
    gl.get_program_parameter(NONE, NONE);
    gl.get_program_info_log(NONE);
    gl.bind_attrib_location(NONE, NONE, NONE);
    gl.get_attrib_location(NONE, NONE);
    gl.get_uniform_location(NONE, NONE);
    gl.get_active_attrib(NONE, NONE);
    gl.get_active_uniform(NONE, NONE);
    results.push(gl.get_frag_data_location(NONE, NONE).map(drop));

    // uniforms
    gl.uniform1f(NONE, NONE);
    gl.uniform2f(NONE, NONE, NONE);
    gl.uniform3f(NONE, NONE, NONE, NONE);
    gl.uniform4f(NONE, NONE, NONE, NONE, NONE);
    gl.uniform1i(NONE, NONE);
    gl.uniform2i(NONE, NONE, NONE);
    gl.uniform3i(NONE, NONE, NONE, NONE);
    gl.uniform4i(NONE, NONE, NONE, NONE, NONE);
    results.push(gl.uniform1ui(NONE, NONE));
    results.push(gl.uniform2ui(NONE, NONE, NONE));
    results.push(gl.uniform3ui(NONE, NONE, NONE, NONE));
    results.push(gl.uniform4ui(NONE, NONE, NONE, NONE, NONE));
    gl.uniform1fv(NONE, NONE);
    gl.uniform2fv(NONE, NONE);
    gl.uniform3fv(NONE, NONE);
    gl.uniform4fv(NONE, NONE);
    gl.uniform1iv(NONE, NONE);
    gl.uniform2iv(NONE, NONE);
    gl.uniform3iv(NONE, NONE);
    gl.uniform4iv(NONE, NONE);
    results.push(gl.uniform1uiv(NONE, NONE));
    results.push(gl.uniform2uiv(NONE, NONE));
    results.push(gl.uniform3uiv(NONE, NONE));
    results.push(gl.uniform4uiv(NONE, NONE));
    gl.uniform_matrix2fv(NONE, NONE, NONE);
    gl.uniform_matrix3fv(NONE, NONE, NONE);
    gl.uniform_matrix4fv(NONE, NONE, NONE);
    gl.uniform_matrix2x3fv(NONE, NONE, NONE);
    gl.uniform_matrix3x2fv(NONE, NONE, NONE);
    gl.uniform_matrix2x4fv(NONE, NONE, NONE);
    gl.uniform_matrix4x2fv(NONE, NONE, NONE);
    gl.uniform_matrix3x4fv(NONE, NONE, NONE);
    gl.uniform_matrix4x3fv(NONE, NONE, NONE);
    results.push(gl.uniform_block_binding(NONE, NONE, NONE));
    results.push(gl.get_uniform_block_index(NONE, NONE).map(drop));
    results.push(gl.get_uniform_indices(NONE, NONE).map(drop));
    results.push(gl.get_active_uniforms(NONE, NONE, NONE).map(drop));
    results.push(gl.get_active_uniform_block_parameter(NONE, NONE, NONE).map(drop));
    results.push(gl.get_active_uniform_block_name(NONE, NONE).map(drop));
    results.push(gl.get_indexed_parameter(NONE, NONE).map(drop));

    // queries, samplers, transform feedback
    results.push(gl.begin_query(NONE, NONE));
    results.push(gl.end_query(NONE));
    results.push(gl.get_query(NONE, NONE).map(drop));
    results.push(gl.get_query_parameter(NONE, NONE).map(drop));
    results.push(gl.sampler_parameteri(NONE, NONE, NONE));
    results.push(gl.sampler_parameterf(NONE, NONE, NONE));
    results.push(gl.get_sampler_parameter(NONE, NONE).map(drop));
    results.push(gl.begin_transform_feedback(NONE));
    results.push(gl.end_transform_feedback());
    results.push(gl.pause_transform_feedback());
    results.push(gl.resume_transform_feedback());
    results.push(gl.transform_feedback_varyings(NONE, NONE, NONE));
    results.push(gl.get_transform_feedback_varying(NONE, NONE).map(drop));

    // sync objects
    results.push(gl.fence_sync(NONE, NONE).map(drop));
    results.push(gl.delete_sync(NONE));
    results.push(gl.is_sync(NONE).map(drop));
    results.push(gl.client_wait_sync(NONE, NONE, NONE).map(drop));
    results.push(gl.wait_sync(NONE, NONE, NONE));
    results.push(gl.get_sync_parameter(NONE, NONE).map(drop));
    results
}

#[test]
fn every_entry_point_tolerates_missing_arguments() {
    let mut gl = context();
    let results = sweep(&mut gl);
    for (i, result) in results.iter().enumerate() {
        assert_eq!(result, &Ok(()), "gated call #{i} failed");
    }
    assert!(!calls(&gl).is_empty());
}

#[test]
fn missing_pixel_data_drops_sub_updates() {
    let mut gl = context();
    sweep(&mut gl);
    // only the image-source update carries pixels
    for cmd in calls(&gl) {
        if let GlCmd::TexSubImage2D { pixels, width, height, .. } = cmd {
            assert_eq!((*width, *height, pixels.byte_len()), (1, 1, 4));
        }
    }
    assert_eq!(driver(&mut gl).count("texSubImage2D"), 1);
    assert_eq!(driver(&mut gl).count("texSubImage3D"), 0);
    assert_eq!(driver(&mut gl).count("readPixels"), 1);
}
