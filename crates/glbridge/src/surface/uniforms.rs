//! Uniform values and uniform block reflection.
//!
//! Scalar forms default missing components to `0`. Vector and matrix forms
//! upload nothing when no data is given. A missing or `null` location is
//! passed as `-1`, which the driver ignores.

use crate::args::Arg;
use crate::args::normalize::{flag, float, handle, int, location, seq, string, strings, uint};
use crate::driver::{GlCmd, GlDriver, GlReply};
use crate::error::BridgeError;
use crate::marshal::{ElementKind, write};

use super::{Value, WebGl2};

macro_rules! scalar_uniforms {
    ($($name:ident($($c:ident),+) = $helper:ident;)*) => {$(
        pub fn $name(&mut self, location: Arg<'_>, $($c: Arg<'_>),+) {
            self.$helper(location, [$($c),+]);
        }
    )*};
}

macro_rules! gated_scalar_uniforms {
    ($($name:ident($($c:ident),+) = $helper:ident;)*) => {$(
        pub fn $name(&mut self, location: Arg<'_>, $($c: Arg<'_>),+) -> Result<(), BridgeError> {
            self.$helper(location, [$($c),+])
        }
    )*};
}

macro_rules! vector_uniforms {
    ($($name:ident = $helper:ident($width:literal);)*) => {$(
        pub fn $name(&mut self, location: Arg<'_>, data: Arg<'_>) {
            self.$helper(location, $width, data);
        }
    )*};
}

macro_rules! matrix_uniforms {
    ($($name:ident = $cols:literal x $rows:literal;)*) => {$(
        pub fn $name(&mut self, location: Arg<'_>, transpose: Arg<'_>, data: Arg<'_>) {
            self.uniform_matrix(location, $cols, $rows, transpose, data);
        }
    )*};
}

impl<D: GlDriver> WebGl2<D> {
    fn uniform_f<const N: usize>(&mut self, loc: Arg<'_>, values: [Arg<'_>; N]) {
        let mut v = [0.0; 4];
        for (slot, arg) in v.iter_mut().zip(values) {
            *slot = float(arg, 0.0);
        }
        self.gl.call(GlCmd::UniformF {
            location: location(loc),
            len: N as u8,
            v,
        });
    }

    /// Booleans (sampler toggles, flags) are sent as `1`/`0`.
    fn uniform_i<const N: usize>(&mut self, loc: Arg<'_>, values: [Arg<'_>; N]) {
        let mut v = [0; 4];
        for (slot, arg) in v.iter_mut().zip(values) {
            *slot = int(arg, 0);
        }
        self.gl.call(GlCmd::UniformI {
            location: location(loc),
            len: N as u8,
            v,
        });
    }

    fn uniform_ui<const N: usize>(
        &mut self,
        loc: Arg<'_>,
        values: [Arg<'_>; N],
    ) -> Result<(), BridgeError> {
        let mut v = [0; 4];
        for (slot, arg) in v.iter_mut().zip(values) {
            *slot = uint(arg, 0);
        }
        self.gl
            .submit(GlCmd::UniformUi {
                location: location(loc),
                len: N as u8,
                v,
            })
            .map(drop)
    }

    fn uniform_fv(&mut self, loc: Arg<'_>, width: u8, data: Arg<'_>) {
        if let Some(values) = seq(data) {
            self.gl.call(GlCmd::UniformFv {
                location: location(loc),
                width,
                data: write(values, ElementKind::Float),
            });
        }
    }

    fn uniform_iv(&mut self, loc: Arg<'_>, width: u8, data: Arg<'_>) {
        if let Some(values) = seq(data) {
            self.gl.call(GlCmd::UniformIv {
                location: location(loc),
                width,
                data: write(values, ElementKind::Int),
            });
        }
    }

    fn uniform_uiv(&mut self, loc: Arg<'_>, width: u8, data: Arg<'_>) -> Result<(), BridgeError> {
        let Some(values) = seq(data) else {
            return Ok(());
        };
        self.gl
            .submit(GlCmd::UniformUiv {
                location: location(loc),
                width,
                data: write(values, ElementKind::Int),
            })
            .map(drop)
    }

    fn uniform_matrix(&mut self, loc: Arg<'_>, cols: u8, rows: u8, transpose: Arg<'_>, data: Arg<'_>) {
        if let Some(values) = seq(data) {
            self.gl.call(GlCmd::UniformMatrix {
                location: location(loc),
                cols,
                rows,
                transpose: flag(transpose, false),
                data: write(values, ElementKind::Float),
            });
        }
    }

    scalar_uniforms! {
        uniform1f(x) = uniform_f;
        uniform2f(x, y) = uniform_f;
        uniform3f(x, y, z) = uniform_f;
        uniform4f(x, y, z, w) = uniform_f;
        uniform1i(x) = uniform_i;
        uniform2i(x, y) = uniform_i;
        uniform3i(x, y, z) = uniform_i;
        uniform4i(x, y, z, w) = uniform_i;
    }

    gated_scalar_uniforms! {
        uniform1ui(x) = uniform_ui;
        uniform2ui(x, y) = uniform_ui;
        uniform3ui(x, y, z) = uniform_ui;
        uniform4ui(x, y, z, w) = uniform_ui;
    }

    vector_uniforms! {
        uniform1fv = uniform_fv(1);
        uniform2fv = uniform_fv(2);
        uniform3fv = uniform_fv(3);
        uniform4fv = uniform_fv(4);
        uniform1iv = uniform_iv(1);
        uniform2iv = uniform_iv(2);
        uniform3iv = uniform_iv(3);
        uniform4iv = uniform_iv(4);
    }

    pub fn uniform1uiv(&mut self, location: Arg<'_>, data: Arg<'_>) -> Result<(), BridgeError> {
        self.uniform_uiv(location, 1, data)
    }

    pub fn uniform2uiv(&mut self, location: Arg<'_>, data: Arg<'_>) -> Result<(), BridgeError> {
        self.uniform_uiv(location, 2, data)
    }

    pub fn uniform3uiv(&mut self, location: Arg<'_>, data: Arg<'_>) -> Result<(), BridgeError> {
        self.uniform_uiv(location, 3, data)
    }

    pub fn uniform4uiv(&mut self, location: Arg<'_>, data: Arg<'_>) -> Result<(), BridgeError> {
        self.uniform_uiv(location, 4, data)
    }

    matrix_uniforms! {
        uniform_matrix2fv = 2 x 2;
        uniform_matrix3fv = 3 x 3;
        uniform_matrix4fv = 4 x 4;
        uniform_matrix2x3fv = 2 x 3;
        uniform_matrix3x2fv = 3 x 2;
        uniform_matrix2x4fv = 2 x 4;
        uniform_matrix4x2fv = 4 x 2;
        uniform_matrix3x4fv = 3 x 4;
        uniform_matrix4x3fv = 4 x 3;
    }

    // ── uniform blocks ───────────────────────────────────────────────────

    pub fn uniform_block_binding(
        &mut self,
        program: Arg<'_>,
        block_index: Arg<'_>,
        binding: Arg<'_>,
    ) -> Result<(), BridgeError> {
        self.gl
            .submit(GlCmd::UniformBlockBinding {
                program: handle(program),
                block: uint(block_index, 0),
                binding: uint(binding, 0),
            })
            .map(drop)
    }

    /// `INVALID_INDEX` (`0xFFFFFFFF`) when the block does not exist.
    pub fn get_uniform_block_index(
        &mut self,
        program: Arg<'_>,
        name: Arg<'_>,
    ) -> Result<u32, BridgeError> {
        let reply = self.gl.submit(GlCmd::GetUniformBlockIndex {
            program: handle(program),
            name: string(name).to_owned(),
        })?;
        Ok(match reply {
            GlReply::Unit => u32::MAX,
            reply => reply.uint(),
        })
    }

    pub fn get_uniform_indices(
        &mut self,
        program: Arg<'_>,
        names: Arg<'_>,
    ) -> Result<Vec<u32>, BridgeError> {
        let names = strings(names).iter().map(|s| (*s).to_owned()).collect();
        Ok(self
            .gl
            .submit(GlCmd::GetUniformIndices {
                program: handle(program),
                names,
            })?
            .into_uints())
    }

    /// One value per index. Boolean properties come back as `1`/`0`.
    pub fn get_active_uniforms(
        &mut self,
        program: Arg<'_>,
        indices: Arg<'_>,
        pname: Arg<'_>,
    ) -> Result<Vec<i32>, BridgeError> {
        let Some(indices) = seq(indices) else {
            return Ok(Vec::new());
        };
        Ok(self
            .gl
            .submit(GlCmd::GetActiveUniforms {
                program: handle(program),
                indices: write(indices, ElementKind::Int),
                pname: uint(pname, 0),
            })?
            .into_ints())
    }

    pub fn get_active_uniform_block_parameter(
        &mut self,
        program: Arg<'_>,
        block_index: Arg<'_>,
        pname: Arg<'_>,
    ) -> Result<Value, BridgeError> {
        let pname = uint(pname, 0);
        let reply = self.gl.submit(GlCmd::GetActiveUniformBlockParameter {
            program: handle(program),
            block: uint(block_index, 0),
            pname,
        })?;
        Ok(Value::from_reply(pname, reply))
    }

    pub fn get_active_uniform_block_name(
        &mut self,
        program: Arg<'_>,
        block_index: Arg<'_>,
    ) -> Result<String, BridgeError> {
        Ok(self
            .gl
            .submit(GlCmd::GetActiveUniformBlockName {
                program: handle(program),
                block: uint(block_index, 0),
            })?
            .into_text())
    }

    /// Indexed binding state, e.g. `UNIFORM_BUFFER_BINDING` for one index.
    pub fn get_indexed_parameter(&mut self, target: Arg<'_>, index: Arg<'_>) -> Result<Value, BridgeError> {
        let target = uint(target, 0);
        let reply = self.gl.submit(GlCmd::GetIndexedParameter {
            target,
            index: uint(index, 0),
        })?;
        Ok(Value::from_reply(target, reply))
    }
}
