use crate::args::normalize::{enum_or, flag, float, int, offset, seq, uint};
use crate::args::{Arg, NumericSeq, to_int32, to_uint32};
use crate::consts;
use crate::driver::{GlCmd, GlDriver};
use crate::error::BridgeError;

use super::WebGl2;

/// Constant attribute value with unspecified components taken from
/// `(0, 0, 0, 1)`.
fn padded(values: impl IntoIterator<Item = f64>) -> [f64; 4] {
    let mut v = [0.0, 0.0, 0.0, 1.0];
    for (slot, x) in v.iter_mut().zip(values) {
        *slot = x;
    }
    v
}

fn seq_values(values: NumericSeq<'_>, n: usize) -> impl Iterator<Item = f64> + '_ {
    (0..values.len().min(n)).filter_map(move |i| values.get(i))
}

impl<D: GlDriver> WebGl2<D> {
    pub fn enable_vertex_attrib_array(&mut self, index: Arg<'_>) {
        self.gl.call(GlCmd::EnableVertexAttribArray(uint(index, 0)));
    }

    pub fn disable_vertex_attrib_array(&mut self, index: Arg<'_>) {
        self.gl.call(GlCmd::DisableVertexAttribArray(uint(index, 0)));
    }

    /// Defaults: size `4`, type `FLOAT`, not normalized, tightly packed,
    /// offset `0`.
    pub fn vertex_attrib_pointer(
        &mut self,
        index: Arg<'_>,
        size: Arg<'_>,
        ty: Arg<'_>,
        normalized: Arg<'_>,
        stride: Arg<'_>,
        byte_offset: Arg<'_>,
    ) {
        self.gl.call(GlCmd::VertexAttribPointer {
            index: uint(index, 0),
            size: int(size, 4),
            ty: enum_or(ty, consts::FLOAT),
            normalized: flag(normalized, false),
            stride: int(stride, 0),
            offset: offset(byte_offset, 0),
        });
    }

    /// Defaults: size `4`, type `INT`.
    pub fn vertex_attrib_i_pointer(
        &mut self,
        index: Arg<'_>,
        size: Arg<'_>,
        ty: Arg<'_>,
        stride: Arg<'_>,
        byte_offset: Arg<'_>,
    ) -> Result<(), BridgeError> {
        self.gl
            .submit(GlCmd::VertexAttribIPointer {
                index: uint(index, 0),
                size: int(size, 4),
                ty: enum_or(ty, consts::INT),
                stride: int(stride, 0),
                offset: offset(byte_offset, 0),
            })
            .map(drop)
    }

    pub fn vertex_attrib_divisor(&mut self, index: Arg<'_>, divisor: Arg<'_>) -> Result<(), BridgeError> {
        self.gl
            .submit(GlCmd::VertexAttribDivisor {
                index: uint(index, 0),
                divisor: uint(divisor, 0),
            })
            .map(drop)
    }

    // ── constant values ──────────────────────────────────────────────────

    fn vertex_attrib_f(&mut self, index: Arg<'_>, values: [f64; 4]) {
        self.gl.call(GlCmd::VertexAttribF {
            index: uint(index, 0),
            v: values.map(|x| x as f32),
        });
    }

    pub fn vertex_attrib1f(&mut self, index: Arg<'_>, x: Arg<'_>) {
        self.vertex_attrib_f(index, padded([x].map(|a| f64::from(float(a, 0.0)))));
    }

    pub fn vertex_attrib2f(&mut self, index: Arg<'_>, x: Arg<'_>, y: Arg<'_>) {
        self.vertex_attrib_f(index, padded([x, y].map(|a| f64::from(float(a, 0.0)))));
    }

    pub fn vertex_attrib3f(&mut self, index: Arg<'_>, x: Arg<'_>, y: Arg<'_>, z: Arg<'_>) {
        self.vertex_attrib_f(index, padded([x, y, z].map(|a| f64::from(float(a, 0.0)))));
    }

    /// A missing `w` is `0`, like every other missing argument; only the
    /// shorter forms imply `w = 1`.
    pub fn vertex_attrib4f(&mut self, index: Arg<'_>, x: Arg<'_>, y: Arg<'_>, z: Arg<'_>, w: Arg<'_>) {
        self.vertex_attrib_f(index, padded([x, y, z, w].map(|a| f64::from(float(a, 0.0)))));
    }

    /// Uses the first `n` elements of `values`; nothing is set without data.
    fn vertex_attrib_fv(&mut self, index: Arg<'_>, n: usize, values: Arg<'_>) {
        if let Some(values) = seq(values) {
            self.vertex_attrib_f(index, padded(seq_values(values, n)));
        }
    }

    pub fn vertex_attrib1fv(&mut self, index: Arg<'_>, values: Arg<'_>) {
        self.vertex_attrib_fv(index, 1, values);
    }

    pub fn vertex_attrib2fv(&mut self, index: Arg<'_>, values: Arg<'_>) {
        self.vertex_attrib_fv(index, 2, values);
    }

    pub fn vertex_attrib3fv(&mut self, index: Arg<'_>, values: Arg<'_>) {
        self.vertex_attrib_fv(index, 3, values);
    }

    pub fn vertex_attrib4fv(&mut self, index: Arg<'_>, values: Arg<'_>) {
        self.vertex_attrib_fv(index, 4, values);
    }

    pub fn vertex_attrib_i4i(
        &mut self,
        index: Arg<'_>,
        x: Arg<'_>,
        y: Arg<'_>,
        z: Arg<'_>,
        w: Arg<'_>,
    ) -> Result<(), BridgeError> {
        self.gl
            .submit(GlCmd::VertexAttribI {
                index: uint(index, 0),
                v: [x, y, z, w].map(|a| int(a, 0)),
            })
            .map(drop)
    }

    pub fn vertex_attrib_i4ui(
        &mut self,
        index: Arg<'_>,
        x: Arg<'_>,
        y: Arg<'_>,
        z: Arg<'_>,
        w: Arg<'_>,
    ) -> Result<(), BridgeError> {
        self.gl
            .submit(GlCmd::VertexAttribUi {
                index: uint(index, 0),
                v: [x, y, z, w].map(|a| uint(a, 0)),
            })
            .map(drop)
    }

    pub fn vertex_attrib_i4iv(&mut self, index: Arg<'_>, values: Arg<'_>) -> Result<(), BridgeError> {
        let Some(values) = seq(values) else {
            return Ok(());
        };
        let mut v = [0; 4];
        for (slot, x) in v.iter_mut().zip(seq_values(values, 4)) {
            *slot = to_int32(x);
        }
        self.gl
            .submit(GlCmd::VertexAttribI { index: uint(index, 0), v })
            .map(drop)
    }

    pub fn vertex_attrib_i4uiv(&mut self, index: Arg<'_>, values: Arg<'_>) -> Result<(), BridgeError> {
        let Some(values) = seq(values) else {
            return Ok(());
        };
        let mut v = [0; 4];
        for (slot, x) in v.iter_mut().zip(seq_values(values, 4)) {
            *slot = to_uint32(x);
        }
        self.gl
            .submit(GlCmd::VertexAttribUi { index: uint(index, 0), v })
            .map(drop)
    }
}
