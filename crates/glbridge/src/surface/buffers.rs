use crate::args::normalize::{enum_or, handle, offset, seq, uint};
use crate::args::{Arg, NumericSeqMut};
use crate::consts;
use crate::driver::{GlCmd, GlDriver};
use crate::error::BridgeError;
use crate::marshal::{destination_for, read_back, write_natural};

use super::WebGl2;

impl<D: GlDriver> WebGl2<D> {
    /// `data` is either a numeric sequence to upload or a byte size to
    /// reserve. Anything else reserves zero bytes.
    pub fn buffer_data(&mut self, target: Arg<'_>, data: Arg<'_>, usage: Arg<'_>) {
        let target = enum_or(target, consts::ARRAY_BUFFER);
        let usage = enum_or(usage, consts::STATIC_DRAW);
        let cmd = match seq(data) {
            Some(values) => GlCmd::BufferData {
                target,
                data: write_natural(values),
                usage,
            },
            None => GlCmd::BufferDataSize {
                target,
                size: offset(data, 0).max(0),
                usage,
            },
        };
        self.gl.call(cmd);
    }

    /// Without data there is nothing to upload and no call is made.
    pub fn buffer_sub_data(&mut self, target: Arg<'_>, dst_byte_offset: Arg<'_>, data: Arg<'_>) {
        let Some(values) = seq(data) else {
            return;
        };
        self.gl.call(GlCmd::BufferSubData {
            target: enum_or(target, consts::ARRAY_BUFFER),
            offset: offset(dst_byte_offset, 0),
            data: write_natural(values),
        });
    }

    /// Reads buffer contents starting at `src_byte_offset` into `dst`,
    /// filling as many elements as `dst` holds.
    pub fn get_buffer_sub_data(
        &mut self,
        target: Arg<'_>,
        src_byte_offset: Arg<'_>,
        dst: &mut NumericSeqMut<'_>,
    ) {
        let cmd = GlCmd::GetBufferSubData {
            target: enum_or(target, consts::ARRAY_BUFFER),
            offset: offset(src_byte_offset, 0),
            dst: destination_for(dst),
        };
        if let Some(filled) = self.gl.call(cmd).into_buffer() {
            read_back(&filled, dst);
        }
    }

    pub fn copy_buffer_sub_data(
        &mut self,
        read_target: Arg<'_>,
        write_target: Arg<'_>,
        read_offset: Arg<'_>,
        write_offset: Arg<'_>,
        size: Arg<'_>,
    ) -> Result<(), BridgeError> {
        self.gl
            .submit(GlCmd::CopyBufferSubData {
                read_target: uint(read_target, 0),
                write_target: uint(write_target, 0),
                read_offset: offset(read_offset, 0),
                write_offset: offset(write_offset, 0),
                size: offset(size, 0),
            })
            .map(drop)
    }

    pub fn bind_buffer_base(
        &mut self,
        target: Arg<'_>,
        index: Arg<'_>,
        buffer: Arg<'_>,
    ) -> Result<(), BridgeError> {
        self.gl
            .submit(GlCmd::BindBufferBase {
                target: enum_or(target, consts::UNIFORM_BUFFER),
                index: uint(index, 0),
                buffer: handle(buffer),
            })
            .map(drop)
    }

    pub fn bind_buffer_range(
        &mut self,
        target: Arg<'_>,
        index: Arg<'_>,
        buffer: Arg<'_>,
        range_offset: Arg<'_>,
        size: Arg<'_>,
    ) -> Result<(), BridgeError> {
        self.gl
            .submit(GlCmd::BindBufferRange {
                target: enum_or(target, consts::UNIFORM_BUFFER),
                index: uint(index, 0),
                buffer: handle(buffer),
                offset: offset(range_offset, 0),
                size: offset(size, 0),
            })
            .map(drop)
    }
}
