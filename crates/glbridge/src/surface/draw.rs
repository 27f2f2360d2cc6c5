use crate::args::normalize::{enum_or, float, int, offset, seq, uint};
use crate::args::{Arg, NumericSeq, NumericSeqMut};
use crate::consts;
use crate::driver::{GlCmd, GlDriver};
use crate::error::BridgeError;
use crate::marshal::{ElementKind, NativeBuffer, destination_for, read_back, write};
use crate::texture::{Extent, bytes_per_pixel};

use super::WebGl2;

/// Marshals clear values, or `None` when there are fewer than the buffer
/// reads: four for `COLOR`, one for depth or stencil.
fn clear_values(buffer: u32, values: Arg<'_>, kind: ElementKind) -> Option<NativeBuffer> {
    let data = write(seq(values)?, kind);
    let needed = if buffer == consts::COLOR { 4 } else { 1 };
    if data.len() < needed {
        log::warn!("clearBuffer: {} values for buffer {buffer:#06x}, need {needed}; skipped", data.len());
        return None;
    }
    Some(data)
}

impl<D: GlDriver> WebGl2<D> {
    /// A missing mode is `POINTS` (`0`).
    pub fn draw_arrays(&mut self, mode: Arg<'_>, first: Arg<'_>, count: Arg<'_>) {
        self.gl.call(GlCmd::DrawArrays {
            mode: uint(mode, consts::POINTS),
            first: int(first, 0),
            count: int(count, 0),
        });
    }

    /// Defaults: index type `UNSIGNED_SHORT`.
    pub fn draw_elements(&mut self, mode: Arg<'_>, count: Arg<'_>, ty: Arg<'_>, byte_offset: Arg<'_>) {
        self.gl.call(GlCmd::DrawElements {
            mode: uint(mode, consts::POINTS),
            count: int(count, 0),
            ty: enum_or(ty, consts::UNSIGNED_SHORT),
            offset: offset(byte_offset, 0),
        });
    }

    pub fn draw_range_elements(
        &mut self,
        mode: Arg<'_>,
        start: Arg<'_>,
        end: Arg<'_>,
        count: Arg<'_>,
        ty: Arg<'_>,
        byte_offset: Arg<'_>,
    ) {
        self.gl.call(GlCmd::DrawRangeElements {
            mode: uint(mode, consts::POINTS),
            start: uint(start, 0),
            end: uint(end, 0),
            count: int(count, 0),
            ty: enum_or(ty, consts::UNSIGNED_SHORT),
            offset: offset(byte_offset, 0),
        });
    }

    pub fn draw_arrays_instanced(
        &mut self,
        mode: Arg<'_>,
        first: Arg<'_>,
        count: Arg<'_>,
        instances: Arg<'_>,
    ) -> Result<(), BridgeError> {
        self.gl
            .submit(GlCmd::DrawArraysInstanced {
                mode: uint(mode, consts::POINTS),
                first: int(first, 0),
                count: int(count, 0),
                instances: int(instances, 0),
            })
            .map(drop)
    }

    pub fn draw_elements_instanced(
        &mut self,
        mode: Arg<'_>,
        count: Arg<'_>,
        ty: Arg<'_>,
        byte_offset: Arg<'_>,
        instances: Arg<'_>,
    ) -> Result<(), BridgeError> {
        self.gl
            .submit(GlCmd::DrawElementsInstanced {
                mode: uint(mode, consts::POINTS),
                count: int(count, 0),
                ty: enum_or(ty, consts::UNSIGNED_SHORT),
                offset: offset(byte_offset, 0),
                instances: int(instances, 0),
            })
            .map(drop)
    }

    /// Without a list, draws into `COLOR_ATTACHMENT0` only.
    pub fn draw_buffers(&mut self, buffers: Arg<'_>) {
        let list = match seq(buffers) {
            Some(list) => write(list, ElementKind::Int),
            None => write(
                NumericSeq::Uint32(&[consts::COLOR_ATTACHMENT0]),
                ElementKind::Int,
            ),
        };
        self.gl.call(GlCmd::DrawBuffers(list));
    }

    pub fn read_buffer(&mut self, src: Arg<'_>) {
        self.gl.call(GlCmd::ReadBuffer(enum_or(src, consts::BACK)));
    }

    /// Reads a block of pixels into `dst`; anything the driver did not
    /// write is left as is. A `dst` too small for the region under the
    /// current pack layout is left untouched and nothing is read.
    ///
    /// Defaults: `RGBA`, `UNSIGNED_BYTE`.
    #[allow(clippy::too_many_arguments)]
    pub fn read_pixels(
        &mut self,
        x: Arg<'_>,
        y: Arg<'_>,
        width: Arg<'_>,
        height: Arg<'_>,
        format: Arg<'_>,
        ty: Arg<'_>,
        dst: &mut NumericSeqMut<'_>,
    ) {
        let extent = Extent::flat(int(width, 0), int(height, 0));
        let (format, ty) = (enum_or(format, consts::RGBA), enum_or(ty, consts::UNSIGNED_BYTE));
        let buf = destination_for(dst);
        if !self.pixel_store.pack.covers(extent, bytes_per_pixel(format, ty), buf.byte_len()) {
            log::warn!(
                "readPixels: {} byte destination is too small for a {}x{} region, skipped",
                buf.byte_len(),
                extent.width,
                extent.height
            );
            return;
        }
        let cmd = GlCmd::ReadPixels {
            x: int(x, 0),
            y: int(y, 0),
            width: extent.width,
            height: extent.height,
            format,
            ty,
            dst: buf,
        };
        if let Some(filled) = self.gl.call(cmd).into_buffer() {
            read_back(&filled, dst);
        }
    }

    // ── clearing individual buffers ──────────────────────────────────────

    pub fn clear_bufferfv(&mut self, buffer: Arg<'_>, drawbuffer: Arg<'_>, values: Arg<'_>) -> Result<(), BridgeError> {
        let buffer = enum_or(buffer, consts::COLOR);
        let Some(data) = clear_values(buffer, values, ElementKind::Float) else {
            return Ok(());
        };
        self.gl
            .submit(GlCmd::ClearBufferFv {
                buffer,
                drawbuffer: int(drawbuffer, 0),
                data,
            })
            .map(drop)
    }

    pub fn clear_bufferiv(&mut self, buffer: Arg<'_>, drawbuffer: Arg<'_>, values: Arg<'_>) -> Result<(), BridgeError> {
        let buffer = enum_or(buffer, consts::COLOR);
        let Some(data) = clear_values(buffer, values, ElementKind::Int) else {
            return Ok(());
        };
        self.gl
            .submit(GlCmd::ClearBufferIv {
                buffer,
                drawbuffer: int(drawbuffer, 0),
                data,
            })
            .map(drop)
    }

    pub fn clear_bufferuiv(&mut self, buffer: Arg<'_>, drawbuffer: Arg<'_>, values: Arg<'_>) -> Result<(), BridgeError> {
        let buffer = enum_or(buffer, consts::COLOR);
        let Some(data) = clear_values(buffer, values, ElementKind::Int) else {
            return Ok(());
        };
        self.gl
            .submit(GlCmd::ClearBufferUiv {
                buffer,
                drawbuffer: int(drawbuffer, 0),
                data,
            })
            .map(drop)
    }

    /// Defaults: `DEPTH_STENCIL`, depth `1.0`, stencil `0`.
    pub fn clear_bufferfi(
        &mut self,
        buffer: Arg<'_>,
        drawbuffer: Arg<'_>,
        depth: Arg<'_>,
        stencil: Arg<'_>,
    ) -> Result<(), BridgeError> {
        self.gl
            .submit(GlCmd::ClearBufferFi {
                buffer: enum_or(buffer, consts::DEPTH_STENCIL),
                drawbuffer: int(drawbuffer, 0),
                depth: float(depth, 1.0),
                stencil: int(stencil, 0),
            })
            .map(drop)
    }
}

#[cfg(test)]
mod tests {
    use crate::args::{Arg, NumericSeq, NumericSeqMut};
    use crate::consts;
    use crate::driver::{GlCmd, GlVersion};
    use crate::error::BridgeError;
    use crate::marshal::NativeBuffer;
    use crate::driver::recording::RecordingDriver;
    use crate::surface::WebGl2;
    use crate::surface::testing::{calls, context, driver};

    #[test]
    fn instanced_draw_degrades_to_an_error() {
        let mut gl = context();
        driver(&mut gl).refuse(GlVersion::Gl31);
        let err = gl
            .draw_arrays_instanced(consts::TRIANGLES.into(), 0i32.into(), 3i32.into(), 10i32.into())
            .unwrap_err();
        assert_eq!(
            err,
            BridgeError::CapabilityUnavailable {
                entry_point: "drawArraysInstanced",
                version: GlVersion::Gl31,
            }
        );

        // plain draws are unaffected
        gl.draw_arrays(consts::TRIANGLES.into(), 0i32.into(), 3i32.into());
        assert_eq!(
            calls(&gl),
            &[GlCmd::DrawArrays { mode: consts::TRIANGLES, first: 0, count: 3 }]
        );
    }

    #[test]
    fn read_pixels_fills_caller_storage() {
        let mut gl = context();
        let mut pixels = [0u8; 8];
        gl.read_pixels(
            0i32.into(),
            0i32.into(),
            2i32.into(),
            1i32.into(),
            Arg::Absent,
            Arg::Absent,
            &mut NumericSeqMut::from(&mut pixels[..]),
        );
        // the recording driver writes each byte's index
        assert_eq!(pixels, [0, 1, 2, 3, 4, 5, 6, 7]);
        assert!(matches!(
            calls(&gl)[0],
            GlCmd::ReadPixels { format: consts::RGBA, ty: consts::UNSIGNED_BYTE, .. }
        ));
    }

    #[test]
    fn draw_buffers_default_to_the_first_attachment() {
        let mut gl = context();
        gl.draw_buffers(Arg::Null);
        assert_eq!(
            calls(&gl),
            &[GlCmd::DrawBuffers(NativeBuffer::Int(vec![consts::COLOR_ATTACHMENT0 as i32].into()))]
        );
    }

    #[test]
    fn clear_bufferfi_defaults_depth_to_one() {
        let mut gl = context();
        gl.clear_bufferfi(Arg::Absent, Arg::Absent, Arg::Absent, Arg::Absent).unwrap();
        assert_eq!(
            calls(&gl),
            &[GlCmd::ClearBufferFi {
                buffer: consts::DEPTH_STENCIL,
                drawbuffer: 0,
                depth: 1.0,
                stencil: 0,
            }]
        );
    }

    #[test]
    fn clear_buffer_values_marshal_by_kind() {
        let mut gl = context();
        gl.clear_bufferuiv(consts::COLOR.into(), 1i32.into(), [1u32, 2, 3, 4][..].into())
            .unwrap();
        assert_eq!(
            calls(&gl),
            &[GlCmd::ClearBufferUiv {
                buffer: consts::COLOR,
                drawbuffer: 1,
                data: NativeBuffer::Int(vec![1, 2, 3, 4].into()),
            }]
        );
    }

    // ── region bounds ────────────────────────────────────────────────────

    #[test]
    fn short_read_destination_never_reaches_the_driver() {
        let mut gl = context();
        let mut pixels = [7u8; 4];
        gl.read_pixels(
            0i32.into(),
            0i32.into(),
            4096i32.into(),
            4096i32.into(),
            Arg::Absent,
            Arg::Absent,
            &mut NumericSeqMut::from(&mut pixels[..]),
        );
        assert_eq!(driver(&mut gl).count("readPixels"), 0);
        assert_eq!(pixels, [7; 4]);
    }

    #[test]
    fn read_destination_accounts_for_pack_alignment() {
        let mut gl = context();
        // two RGB rows: 6 bytes padded to 8, then 6
        let mut pixels = [0u8; 13];
        let rgb = |gl: &mut WebGl2<RecordingDriver>, pixels: &mut [u8]| {
            gl.read_pixels(
                0i32.into(),
                0i32.into(),
                2i32.into(),
                2i32.into(),
                consts::RGB.into(),
                Arg::Absent,
                &mut NumericSeqMut::from(pixels),
            )
        };
        rgb(&mut gl, &mut pixels);
        assert_eq!(driver(&mut gl).count("readPixels"), 0);

        gl.pixel_storei(consts::PACK_ALIGNMENT.into(), 1i32.into());
        rgb(&mut gl, &mut pixels[..12]);
        assert_eq!(driver(&mut gl).count("readPixels"), 1);
    }

    #[test]
    fn short_clear_values_are_skipped() {
        let mut gl = context();
        gl.clear_bufferfv(consts::COLOR.into(), 0i32.into(), [1.0f32, 0.0][..].into())
            .unwrap();
        gl.clear_bufferiv(consts::COLOR.into(), 0i32.into(), NumericSeq::Int32(&[]).into())
            .unwrap();
        assert!(calls(&gl).is_empty());

        // depth and stencil read a single value
        gl.clear_bufferfv(consts::DEPTH.into(), 0i32.into(), [0.5f32][..].into())
            .unwrap();
        assert_eq!(driver(&mut gl).count("clearBufferfv"), 1);
    }
}
