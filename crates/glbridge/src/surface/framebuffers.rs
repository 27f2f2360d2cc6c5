use crate::args::Arg;
use crate::args::normalize::{enum_or, handle, int, mask, seq, uint};
use crate::consts;
use crate::driver::{GlCmd, GlDriver};
use crate::error::BridgeError;
use crate::marshal::{ElementKind, write};

use super::{Value, WebGl2};

impl<D: GlDriver> WebGl2<D> {
    /// Defaults: `FRAMEBUFFER`, `COLOR_ATTACHMENT0`, `TEXTURE_2D`, level `0`.
    pub fn framebuffer_texture_2d(
        &mut self,
        target: Arg<'_>,
        attachment: Arg<'_>,
        textarget: Arg<'_>,
        texture: Arg<'_>,
        level: Arg<'_>,
    ) {
        self.gl.call(GlCmd::FramebufferTexture2D {
            target: enum_or(target, consts::FRAMEBUFFER),
            attachment: enum_or(attachment, consts::COLOR_ATTACHMENT0),
            tex_target: enum_or(textarget, consts::TEXTURE_2D),
            texture: handle(texture),
            level: int(level, 0),
        });
    }

    pub fn framebuffer_texture_layer(
        &mut self,
        target: Arg<'_>,
        attachment: Arg<'_>,
        texture: Arg<'_>,
        level: Arg<'_>,
        layer: Arg<'_>,
    ) -> Result<(), BridgeError> {
        self.gl
            .submit(GlCmd::FramebufferTextureLayer {
                target: enum_or(target, consts::FRAMEBUFFER),
                attachment: enum_or(attachment, consts::COLOR_ATTACHMENT0),
                texture: handle(texture),
                level: int(level, 0),
                layer: int(layer, 0),
            })
            .map(drop)
    }

    pub fn framebuffer_renderbuffer(
        &mut self,
        target: Arg<'_>,
        attachment: Arg<'_>,
        renderbuffer_target: Arg<'_>,
        renderbuffer: Arg<'_>,
    ) {
        self.gl.call(GlCmd::FramebufferRenderbuffer {
            target: enum_or(target, consts::FRAMEBUFFER),
            attachment: enum_or(attachment, consts::COLOR_ATTACHMENT0),
            rb_target: enum_or(renderbuffer_target, consts::RENDERBUFFER),
            renderbuffer: handle(renderbuffer),
        });
    }

    pub fn check_framebuffer_status(&mut self, target: Arg<'_>) -> u32 {
        self.gl
            .call(GlCmd::CheckFramebufferStatus(enum_or(target, consts::FRAMEBUFFER)))
            .uint()
    }

    pub fn get_framebuffer_attachment_parameter(
        &mut self,
        target: Arg<'_>,
        attachment: Arg<'_>,
        pname: Arg<'_>,
    ) -> Value {
        let pname = uint(pname, 0);
        let reply = self.gl.call(GlCmd::GetFramebufferAttachmentParameter {
            target: enum_or(target, consts::FRAMEBUFFER),
            attachment: enum_or(attachment, consts::COLOR_ATTACHMENT0),
            pname,
        });
        Value::from_reply(pname, reply)
    }

    /// Defaults: `NEAREST` filtering.
    #[allow(clippy::too_many_arguments)]
    pub fn blit_framebuffer(
        &mut self,
        src_x0: Arg<'_>,
        src_y0: Arg<'_>,
        src_x1: Arg<'_>,
        src_y1: Arg<'_>,
        dst_x0: Arg<'_>,
        dst_y0: Arg<'_>,
        dst_x1: Arg<'_>,
        dst_y1: Arg<'_>,
        mask_bits: Arg<'_>,
        filter: Arg<'_>,
    ) -> Result<(), BridgeError> {
        self.gl
            .submit(GlCmd::BlitFramebuffer {
                src: [src_x0, src_y0, src_x1, src_y1].map(|a| int(a, 0)),
                dst: [dst_x0, dst_y0, dst_x1, dst_y1].map(|a| int(a, 0)),
                mask: mask(mask_bits, 0),
                filter: enum_or(filter, consts::NEAREST),
            })
            .map(drop)
    }

    /// Without an attachment list there is nothing to invalidate.
    pub fn invalidate_framebuffer(&mut self, target: Arg<'_>, attachments: Arg<'_>) -> Result<(), BridgeError> {
        let Some(attachments) = seq(attachments) else {
            return Ok(());
        };
        self.gl
            .submit(GlCmd::InvalidateFramebuffer {
                target: enum_or(target, consts::FRAMEBUFFER),
                attachments: write(attachments, ElementKind::Int),
            })
            .map(drop)
    }

    pub fn invalidate_sub_framebuffer(
        &mut self,
        target: Arg<'_>,
        attachments: Arg<'_>,
        x: Arg<'_>,
        y: Arg<'_>,
        width: Arg<'_>,
        height: Arg<'_>,
    ) -> Result<(), BridgeError> {
        let Some(attachments) = seq(attachments) else {
            return Ok(());
        };
        self.gl
            .submit(GlCmd::InvalidateSubFramebuffer {
                target: enum_or(target, consts::FRAMEBUFFER),
                attachments: write(attachments, ElementKind::Int),
                x: int(x, 0),
                y: int(y, 0),
                width: int(width, 0),
                height: int(height, 0),
            })
            .map(drop)
    }

    // ── renderbuffers ────────────────────────────────────────────────────

    /// Defaults: `RENDERBUFFER`, `RGBA8`.
    pub fn renderbuffer_storage(
        &mut self,
        target: Arg<'_>,
        internal_format: Arg<'_>,
        width: Arg<'_>,
        height: Arg<'_>,
    ) {
        self.gl.call(GlCmd::RenderbufferStorage {
            target: enum_or(target, consts::RENDERBUFFER),
            internal_format: enum_or(internal_format, consts::RGBA8),
            width: int(width, 0),
            height: int(height, 0),
        });
    }

    pub fn renderbuffer_storage_multisample(
        &mut self,
        target: Arg<'_>,
        samples: Arg<'_>,
        internal_format: Arg<'_>,
        width: Arg<'_>,
        height: Arg<'_>,
    ) -> Result<(), BridgeError> {
        self.gl
            .submit(GlCmd::RenderbufferStorageMultisample {
                target: enum_or(target, consts::RENDERBUFFER),
                samples: int(samples, 0),
                internal_format: enum_or(internal_format, consts::RGBA8),
                width: int(width, 0),
                height: int(height, 0),
            })
            .map(drop)
    }

    pub fn get_renderbuffer_parameter(&mut self, target: Arg<'_>, pname: Arg<'_>) -> Value {
        let pname = uint(pname, 0);
        let reply = self.gl.call(GlCmd::GetRenderbufferParameter {
            target: enum_or(target, consts::RENDERBUFFER),
            pname,
        });
        Value::from_reply(pname, reply)
    }

    /// E.g. the sample counts supported for a format.
    pub fn get_internalformat_parameter(
        &mut self,
        target: Arg<'_>,
        internal_format: Arg<'_>,
        pname: Arg<'_>,
    ) -> Result<Vec<i32>, BridgeError> {
        Ok(self
            .gl
            .submit(GlCmd::GetInternalformatParameter {
                target: enum_or(target, consts::RENDERBUFFER),
                internal_format: uint(internal_format, 0),
                pname: uint(pname, 0),
            })?
            .into_ints())
    }
}
