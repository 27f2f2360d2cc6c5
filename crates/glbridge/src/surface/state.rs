//! Fixed-function state: blending, depth, stencil, rasterizer, clears.
//!
//! Defaults are the initial values of the corresponding GL state, so a
//! call with every argument missing restores that state.

use crate::args::Arg;
use crate::args::normalize::{double, enum_or, flag, float, int, mask, uint};
use crate::consts;
use crate::driver::{GlCmd, GlDriver};

use super::WebGl2;

impl<D: GlDriver> WebGl2<D> {
    /// Defaults: `TEXTURE0`.
    pub fn active_texture(&mut self, texture: Arg<'_>) {
        let texture = enum_or(texture, consts::TEXTURE0);
        self.textures.bindings_mut().set_active(texture);
        self.gl.call(GlCmd::ActiveTexture(texture));
    }

    pub fn enable(&mut self, cap: Arg<'_>) {
        self.gl.call(GlCmd::Enable(uint(cap, 0)));
    }

    pub fn disable(&mut self, cap: Arg<'_>) {
        self.gl.call(GlCmd::Disable(uint(cap, 0)));
    }

    pub fn is_enabled(&mut self, cap: Arg<'_>) -> bool {
        self.gl.call(GlCmd::IsEnabled(uint(cap, 0))).bool()
    }

    // ── blending ─────────────────────────────────────────────────────────

    pub fn blend_color(&mut self, red: Arg<'_>, green: Arg<'_>, blue: Arg<'_>, alpha: Arg<'_>) {
        let rgba = [float(red, 0.0), float(green, 0.0), float(blue, 0.0), float(alpha, 0.0)];
        self.gl.call(GlCmd::BlendColor(rgba));
    }

    /// Defaults: `FUNC_ADD`.
    pub fn blend_equation(&mut self, mode: Arg<'_>) {
        self.gl.call(GlCmd::BlendEquation(enum_or(mode, consts::FUNC_ADD)));
    }

    pub fn blend_equation_separate(&mut self, mode_rgb: Arg<'_>, mode_alpha: Arg<'_>) {
        self.gl.call(GlCmd::BlendEquationSeparate {
            rgb: enum_or(mode_rgb, consts::FUNC_ADD),
            alpha: enum_or(mode_alpha, consts::FUNC_ADD),
        });
    }

    /// Defaults: `ONE`, `ZERO`. A literal `0` is the valid `ZERO` factor.
    pub fn blend_func(&mut self, sfactor: Arg<'_>, dfactor: Arg<'_>) {
        self.gl.call(GlCmd::BlendFunc {
            src: uint(sfactor, consts::ONE),
            dst: uint(dfactor, consts::ZERO),
        });
    }

    pub fn blend_func_separate(
        &mut self,
        src_rgb: Arg<'_>,
        dst_rgb: Arg<'_>,
        src_alpha: Arg<'_>,
        dst_alpha: Arg<'_>,
    ) {
        self.gl.call(GlCmd::BlendFuncSeparate {
            src_rgb: uint(src_rgb, consts::ONE),
            dst_rgb: uint(dst_rgb, consts::ZERO),
            src_alpha: uint(src_alpha, consts::ONE),
            dst_alpha: uint(dst_alpha, consts::ZERO),
        });
    }

    // ── clears and masks ─────────────────────────────────────────────────

    pub fn clear(&mut self, mask_bits: Arg<'_>) {
        self.gl.call(GlCmd::Clear(mask(mask_bits, 0)));
    }

    pub fn clear_color(&mut self, red: Arg<'_>, green: Arg<'_>, blue: Arg<'_>, alpha: Arg<'_>) {
        let rgba = [float(red, 0.0), float(green, 0.0), float(blue, 0.0), float(alpha, 0.0)];
        self.gl.call(GlCmd::ClearColor(rgba));
    }

    /// Defaults: `1.0`.
    pub fn clear_depth(&mut self, depth: Arg<'_>) {
        self.gl.call(GlCmd::ClearDepth(double(depth, 1.0)));
    }

    pub fn clear_stencil(&mut self, s: Arg<'_>) {
        self.gl.call(GlCmd::ClearStencil(int(s, 0)));
    }

    /// Defaults: every channel writable.
    pub fn color_mask(&mut self, red: Arg<'_>, green: Arg<'_>, blue: Arg<'_>, alpha: Arg<'_>) {
        let mask = [flag(red, true), flag(green, true), flag(blue, true), flag(alpha, true)];
        self.gl.call(GlCmd::ColorMask(mask));
    }

    pub fn depth_mask(&mut self, enabled: Arg<'_>) {
        self.gl.call(GlCmd::DepthMask(flag(enabled, true)));
    }

    // ── depth and rasterizer ─────────────────────────────────────────────

    /// Defaults: `BACK`.
    pub fn cull_face(&mut self, mode: Arg<'_>) {
        self.gl.call(GlCmd::CullFace(enum_or(mode, consts::BACK)));
    }

    /// Defaults: `CCW`.
    pub fn front_face(&mut self, mode: Arg<'_>) {
        self.gl.call(GlCmd::FrontFace(enum_or(mode, consts::CCW)));
    }

    /// Defaults: `LESS`.
    pub fn depth_func(&mut self, func: Arg<'_>) {
        self.gl.call(GlCmd::DepthFunc(enum_or(func, consts::LESS)));
    }

    /// Defaults: `0.0`, `1.0`.
    pub fn depth_range(&mut self, near: Arg<'_>, far: Arg<'_>) {
        self.gl.call(GlCmd::DepthRange {
            near: double(near, 0.0),
            far: double(far, 1.0),
        });
    }

    pub fn hint(&mut self, target: Arg<'_>, mode: Arg<'_>) {
        self.gl.call(GlCmd::Hint {
            target: uint(target, 0),
            mode: enum_or(mode, consts::DONT_CARE),
        });
    }

    /// Defaults: `1.0`.
    pub fn line_width(&mut self, width: Arg<'_>) {
        self.gl.call(GlCmd::LineWidth(float(width, 1.0)));
    }

    /// Booleans are stored as `1`/`0`, which covers the flip-y and
    /// premultiply switches.
    pub fn pixel_storei(&mut self, pname: Arg<'_>, param: Arg<'_>) {
        let (pname, param) = (uint(pname, 0), int(param, 0));
        self.pixel_store.set(pname, param);
        self.gl.call(GlCmd::PixelStorei { pname, param });
    }

    pub fn polygon_offset(&mut self, factor: Arg<'_>, units: Arg<'_>) {
        self.gl.call(GlCmd::PolygonOffset {
            factor: float(factor, 0.0),
            units: float(units, 0.0),
        });
    }

    /// Defaults: `1.0`, `false`.
    pub fn sample_coverage(&mut self, value: Arg<'_>, invert: Arg<'_>) {
        self.gl.call(GlCmd::SampleCoverage {
            value: float(value, 1.0),
            invert: flag(invert, false),
        });
    }

    pub fn scissor(&mut self, x: Arg<'_>, y: Arg<'_>, width: Arg<'_>, height: Arg<'_>) {
        self.gl.call(GlCmd::Scissor {
            x: int(x, 0),
            y: int(y, 0),
            width: int(width, 0),
            height: int(height, 0),
        });
    }

    pub fn viewport(&mut self, x: Arg<'_>, y: Arg<'_>, width: Arg<'_>, height: Arg<'_>) {
        self.gl.call(GlCmd::Viewport {
            x: int(x, 0),
            y: int(y, 0),
            width: int(width, 0),
            height: int(height, 0),
        });
    }

    // ── stencil ──────────────────────────────────────────────────────────

    /// Defaults: `ALWAYS`, `0`, all bits set. Masks wider than 32 bits keep
    /// their low 32 bits.
    pub fn stencil_func(&mut self, func: Arg<'_>, reference: Arg<'_>, bits: Arg<'_>) {
        self.gl.call(GlCmd::StencilFunc {
            func: enum_or(func, consts::ALWAYS),
            reference: mask(reference, 0) as i32,
            mask: mask(bits, u32::MAX),
        });
    }

    pub fn stencil_func_separate(
        &mut self,
        face: Arg<'_>,
        func: Arg<'_>,
        reference: Arg<'_>,
        bits: Arg<'_>,
    ) {
        self.gl.call(GlCmd::StencilFuncSeparate {
            face: enum_or(face, consts::FRONT_AND_BACK),
            func: enum_or(func, consts::ALWAYS),
            reference: mask(reference, 0) as i32,
            mask: mask(bits, u32::MAX),
        });
    }

    pub fn stencil_mask(&mut self, bits: Arg<'_>) {
        self.gl.call(GlCmd::StencilMask(mask(bits, u32::MAX)));
    }

    pub fn stencil_mask_separate(&mut self, face: Arg<'_>, bits: Arg<'_>) {
        self.gl.call(GlCmd::StencilMaskSeparate {
            face: enum_or(face, consts::FRONT_AND_BACK),
            mask: mask(bits, u32::MAX),
        });
    }

    /// Defaults: `KEEP` for every outcome.
    pub fn stencil_op(&mut self, fail: Arg<'_>, zfail: Arg<'_>, zpass: Arg<'_>) {
        self.gl.call(GlCmd::StencilOp {
            fail: uint(fail, consts::KEEP),
            zfail: uint(zfail, consts::KEEP),
            zpass: uint(zpass, consts::KEEP),
        });
    }

    pub fn stencil_op_separate(
        &mut self,
        face: Arg<'_>,
        fail: Arg<'_>,
        zfail: Arg<'_>,
        zpass: Arg<'_>,
    ) {
        self.gl.call(GlCmd::StencilOpSeparate {
            face: enum_or(face, consts::FRONT_AND_BACK),
            fail: uint(fail, consts::KEEP),
            zfail: uint(zfail, consts::KEEP),
            zpass: uint(zpass, consts::KEEP),
        });
    }

    // ── synchronization points ───────────────────────────────────────────

    pub fn get_error(&mut self) -> u32 {
        self.gl.error()
    }

    pub fn flush(&mut self) {
        self.gl.call(GlCmd::Flush);
    }

    pub fn finish(&mut self) {
        self.gl.call(GlCmd::Finish);
    }
}

#[cfg(test)]
mod tests {
    use crate::args::Arg;
    use crate::consts;
    use crate::driver::GlCmd;
    use crate::surface::testing::{calls, context};

    const NONE: Arg<'static> = Arg::Absent;

    #[test]
    fn missing_arguments_restore_initial_state() {
        let mut gl = context();
        gl.clear_depth(NONE);
        gl.depth_range(NONE, NONE);
        gl.line_width(Arg::Null);
        gl.sample_coverage(NONE, NONE);
        gl.color_mask(NONE, NONE, NONE, NONE);
        gl.stencil_op(NONE, NONE, NONE);
        gl.cull_face(NONE);

        assert_eq!(
            calls(&gl),
            &[
                GlCmd::ClearDepth(1.0),
                GlCmd::DepthRange { near: 0.0, far: 1.0 },
                GlCmd::LineWidth(1.0),
                GlCmd::SampleCoverage { value: 1.0, invert: false },
                GlCmd::ColorMask([true; 4]),
                GlCmd::StencilOp {
                    fail: consts::KEEP,
                    zfail: consts::KEEP,
                    zpass: consts::KEEP,
                },
                GlCmd::CullFace(consts::BACK),
            ]
        );
    }

    #[test]
    fn blend_func_keeps_explicit_zero_factor() {
        let mut gl = context();
        gl.blend_func(0u32.into(), 0u32.into());
        gl.blend_func(NONE, NONE);
        assert_eq!(
            calls(&gl),
            &[
                GlCmd::BlendFunc { src: 0, dst: 0 },
                GlCmd::BlendFunc { src: consts::ONE, dst: consts::ZERO },
            ]
        );
    }

    #[test]
    fn stencil_values_wider_than_32_bits_are_truncated() {
        let mut gl = context();
        gl.stencil_func(consts::EQUAL.into(), 1i32.into(), Arg::Number(8_589_934_591.0));
        gl.stencil_mask(Arg::Number(-1.0));
        assert_eq!(
            calls(&gl),
            &[
                GlCmd::StencilFunc {
                    func: consts::EQUAL,
                    reference: 1,
                    mask: u32::MAX,
                },
                GlCmd::StencilMask(u32::MAX),
            ]
        );
    }

    #[test]
    fn pixel_store_accepts_booleans() {
        let mut gl = context();
        gl.pixel_storei(consts::UNPACK_FLIP_Y.into(), true.into());
        assert_eq!(
            calls(&gl),
            &[GlCmd::PixelStorei {
                pname: consts::UNPACK_FLIP_Y,
                param: 1,
            }]
        );
    }

    #[test]
    fn active_texture_selects_the_binding_unit() {
        let mut gl = context();
        gl.active_texture((consts::TEXTURE0 + 3).into());
        assert_eq!(gl.textures().bindings().active_unit(), 3);
        gl.active_texture(NONE);
        assert_eq!(gl.textures().bindings().active_unit(), 0);
    }

    #[test]
    fn get_error_reads_the_driver_queue() {
        let mut gl = context();
        crate::surface::testing::driver(&mut gl).queue_error(consts::INVALID_ENUM);
        assert_eq!(gl.get_error(), consts::INVALID_ENUM);
        assert_eq!(gl.get_error(), consts::NO_ERROR);
    }
}
